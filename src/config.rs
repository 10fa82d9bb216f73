/// Type alias for HTTP header name-value pairs.
pub type HeaderField = (String, String);

/// Message returned in the JSON body of HTTP-triggered invocations.
pub const DEFAULT_HTTP_MESSAGE: &str = "Hello from Lambda (HTTP)!";

/// Message returned in the JSON body of scheduled invocations.
pub const DEFAULT_SCHEDULE_MESSAGE: &str = "Lambda executed successfully!";

/// Configuration for the invocation handler.
///
/// Built once at cold start and borrowed by every invocation. The defaults
/// reproduce the canonical handler behavior exactly.
///
/// # Defaults
///
/// - `allow_origin`: `"*"`, so any origin may read HTTP responses.
/// - `log_event`: `true`, so the incoming event is dumped to the log.
/// - `http_message`: [`DEFAULT_HTTP_MESSAGE`].
/// - `schedule_message`: [`DEFAULT_SCHEDULE_MESSAGE`].
#[derive(Clone, Debug)]
pub struct HandlerConfig {
    /// Value of the `Access-Control-Allow-Origin` header on HTTP responses.
    pub allow_origin: String,

    /// Whether to log a serialized dump of each incoming event.
    pub log_event: bool,

    /// `message` field of the JSON body for HTTP-triggered invocations.
    pub http_message: String,

    /// `message` field of the JSON body for scheduled invocations.
    pub schedule_message: String,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            log_event: true,
            http_message: DEFAULT_HTTP_MESSAGE.to_string(),
            schedule_message: DEFAULT_SCHEDULE_MESSAGE.to_string(),
        }
    }
}

impl HandlerConfig {
    /// Headers attached to every HTTP-triggered response, in addition to
    /// `Content-Type`.
    pub fn http_headers(&self) -> Vec<HeaderField> {
        vec![(
            "Access-Control-Allow-Origin".to_string(),
            self.allow_origin.clone(),
        )]
    }
}
