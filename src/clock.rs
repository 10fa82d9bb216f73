use chrono::{DateTime, SecondsFormat, Utc};

/// Current wall-clock time in UTC.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Format a UTC instant as ISO-8601 with microsecond precision and an
/// explicit `+00:00` offset, e.g. `2024-05-01T09:30:00.000000+00:00`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}
