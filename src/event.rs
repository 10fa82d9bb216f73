//! Reading the incoming event.
//!
//! Events are untyped JSON. Every accessor here is total: missing or
//! wrongly-typed fields fall back to defaults instead of failing the
//! invocation.

use std::collections::HashMap;

use serde_json::Value;

/// Query parameters of an HTTP-triggered invocation.
pub type QueryParams = HashMap<String, String>;

/// Key whose presence marks an event as coming from an HTTP gateway.
pub const REQUEST_CONTEXT_KEY: &str = "requestContext";

/// Name of the query parameter selecting the response format.
pub const FORMAT_PARAM: &str = "format";

/// Where an invocation came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvocationOrigin {
    /// API Gateway (REST or HTTP API) or a function URL.
    Http,
    /// A schedule, or anything else that is not wrapped as an HTTP request.
    Schedule,
}

impl InvocationOrigin {
    /// Classify an event. Only a JSON object with a `requestContext` key
    /// counts as HTTP; arrays, scalars and `null` are scheduled invocations.
    pub fn of(event: &Value) -> Self {
        match event.as_object() {
            Some(map) if map.contains_key(REQUEST_CONTEXT_KEY) => InvocationOrigin::Http,
            _ => InvocationOrigin::Schedule,
        }
    }
}

/// Body format requested by an HTTP caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Html,
}

impl ResponseFormat {
    /// `json` (in any ASCII letter case) selects JSON; every other value,
    /// including an empty one, selects HTML.
    pub fn from_param(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            ResponseFormat::Json
        } else {
            ResponseFormat::Html
        }
    }

    /// Resolve the format from query parameters.
    ///
    /// The `format` key is matched ignoring ASCII case. An exact `format` key
    /// wins; otherwise the first matching key in sorted order is used, so the
    /// choice never depends on map iteration order.
    pub fn from_query(params: &QueryParams) -> Self {
        let value = params
            .get(FORMAT_PARAM)
            .or_else(|| {
                params
                    .iter()
                    .filter(|(k, _)| k.eq_ignore_ascii_case(FORMAT_PARAM))
                    .min_by(|(a, _), (b, _)| a.cmp(b))
                    .map(|(_, v)| v)
            })
            .map(String::as_str)
            .unwrap_or("");
        Self::from_param(value)
    }
}

/// Extract `queryStringParameters` from an HTTP event.
///
/// Absent, `null` or non-object values yield an empty map. Entries whose
/// value is not a string are skipped.
pub fn query_params(event: &Value) -> QueryParams {
    event
        .get("queryStringParameters")
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
                .collect()
        })
        .unwrap_or_default()
}
