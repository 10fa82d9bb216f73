//! JSON response bodies.
//!
//! Bodies are encoded with `", "` between members and `": "` between keys and
//! values, matching the separators clients of the historical handler already
//! compare against. Parsed, the output is ordinary JSON.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::error::Result;

/// The `{"message": ..., "time_utc": ...}` body returned by every JSON
/// response. Field order is part of the wire format.
#[derive(Debug, Serialize)]
pub struct MessageBody<'a> {
    pub message: &'a str,
    pub time_utc: &'a str,
}

/// Compact formatter that inserts a single space after `,` and `:`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize `value` to a JSON string using [`SpacedFormatter`].
pub fn to_spaced_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut out = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut out, SpacedFormatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(out)?)
}

/// Encode a [`MessageBody`] for the given message and timestamp.
pub fn message_body(message: &str, time_utc: &str) -> Result<String> {
    to_spaced_string(&MessageBody { message, time_utc })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn message_body_uses_spaced_separators() {
        let body = message_body(
            "Lambda executed successfully!",
            "2024-05-01T09:30:00.000000+00:00",
        )
        .unwrap();
        assert_eq!(
            body,
            r#"{"message": "Lambda executed successfully!", "time_utc": "2024-05-01T09:30:00.000000+00:00"}"#
        );
    }

    #[test]
    fn message_body_parses_as_json() {
        let body = message_body("hi", "t").unwrap();
        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, json!({"message": "hi", "time_utc": "t"}));
    }

    #[test]
    fn nested_values_are_spaced_too() {
        let out = to_spaced_string(&json!({"a": [1, 2], "b": {"c": null}})).unwrap();
        assert_eq!(out, r#"{"a": [1, 2], "b": {"c": null}}"#);
    }

    #[test]
    fn empty_containers_stay_compact() {
        assert_eq!(to_spaced_string(&json!({})).unwrap(), "{}");
        assert_eq!(to_spaced_string(&json!([])).unwrap(), "[]");
    }

    #[test]
    fn strings_are_escaped() {
        let body = message_body("say \"hi\"", "t").unwrap();
        assert_eq!(body, r#"{"message": "say \"hi\"", "time_utc": "t"}"#);
    }

    #[test]
    fn non_ascii_text_survives_encoding() {
        let value = json!({"city": "Zürich", "greeting": "こんにちは"});
        let out = to_spaced_string(&value).unwrap();
        assert_eq!(out, r#"{"city": "Zürich", "greeting": "こんにちは"}"#);
    }
}
