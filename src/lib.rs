//! A stateless Lambda handler that records when it ran and answers with a
//! canned response. It serves two kinds of trigger from one entry point:
//!
//! - **Scheduled** invocations (EventBridge rules, manual test events, or
//!   anything not wrapped as an HTTP request) get a JSON body:
//!   `{"message": "Lambda executed successfully!", "time_utc": "..."}`.
//! - **HTTP** invocations (API Gateway, function URLs; any event carrying a
//!   `requestContext`) get a small HTML page, or with `?format=json`:
//!   `{"message": "Hello from Lambda (HTTP)!", "time_utc": "..."}`.
//!   HTTP responses always carry `Access-Control-Allow-Origin: *`.
//!
//! Every response has status 200. Malformed events never fail: unknown
//! shapes are treated as scheduled, and bad query parameters fall back to
//! the HTML page.
//!
//! # Usage
//!
//! ```rust,ignore
//! use invocation_handler::{function_handler, HandlerConfig};
//! use lambda_runtime::{run, service_fn, Error, LambdaEvent};
//! use serde_json::Value;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let config = HandlerConfig::default();
//!     let config = &config;
//!     run(service_fn(move |event: LambdaEvent<Value>| async move {
//!         function_handler(event, config).await
//!     }))
//!     .await
//! }
//! ```
//!
//! The pure core, [`respond`], takes the invocation time as an argument and
//! is what tests exercise directly.

/// Debug logging macro gated behind the `debug-logging` feature flag.
/// When enabled, expands to `tracing::debug!`; otherwise compiles to nothing.
#[cfg(feature = "debug-logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

use chrono::{DateTime, Utc};
use lambda_runtime::LambdaEvent;
use serde_json::Value;
use tracing::info;

/// JSON body encoding.
pub mod body;
/// Invocation timestamps.
pub mod clock;
/// Handler configuration.
pub mod config;
/// Error type.
pub mod error;
/// Event inspection: origin, query parameters, requested format.
pub mod event;
/// The static HTML page.
pub mod html;
/// Response type and builder.
pub mod response;

pub use config::{HandlerConfig, HeaderField};
pub use error::HandlerError;
pub use event::{query_params, InvocationOrigin, QueryParams, ResponseFormat};
pub use response::{InvocationResponse, InvocationResponseBuilder};

/// Content type of JSON responses on the HTTP path.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Build the response for `event` as if it were invoked at `at`.
///
/// Performs no I/O. The same event and instant always produce the same
/// response.
pub fn respond(
    event: &Value,
    at: DateTime<Utc>,
    config: &HandlerConfig,
) -> error::Result<InvocationResponse> {
    let time_utc = clock::iso_timestamp(at);

    match InvocationOrigin::of(event) {
        InvocationOrigin::Schedule => {
            debug_log!("scheduled invocation");
            let body = body::message_body(&config.schedule_message, &time_utc)?;
            Ok(InvocationResponse::builder().with_body(body).build())
        }
        InvocationOrigin::Http => {
            let params = query_params(event);
            let format = ResponseFormat::from_query(&params);
            debug_log!("http invocation, params: {:?}, format: {:?}", params, format);

            let (content_type, body) = match format {
                ResponseFormat::Json => (
                    JSON_CONTENT_TYPE,
                    body::message_body(&config.http_message, &time_utc)?,
                ),
                ResponseFormat::Html => (html::HTML_CONTENT_TYPE, html::render_page(&time_utc)),
            };

            Ok(InvocationResponse::builder()
                .with_header("Content-Type", content_type)
                .with_headers(config.http_headers())
                .with_body(body)
                .build())
        }
    }
}

/// Handle one invocation at the current time, logging the timestamp and
/// (when [`HandlerConfig::log_event`] is set) the incoming event.
pub fn handle(event: &Value, config: &HandlerConfig) -> error::Result<InvocationResponse> {
    let at = clock::now();
    info!("Lambda triggered at (UTC): {}", clock::iso_timestamp(at));
    if config.log_event {
        info!("Incoming event: {}", body::to_spaced_string(event)?);
    }
    respond(event, at, config)
}

/// Entry point for `lambda_runtime::service_fn`.
///
/// The runtime context is not consulted; `lambda_runtime` already tags log
/// lines with the request id.
pub async fn function_handler(
    event: LambdaEvent<Value>,
    config: &HandlerConfig,
) -> Result<InvocationResponse, lambda_runtime::Error> {
    let (payload, _context) = event.into_parts();
    Ok(handle(&payload, config)?)
}
