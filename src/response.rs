use serde::{Serialize, Serializer};

use crate::config::HeaderField;

/// HTTP status code the handler answers with.
pub const STATUS_OK: u16 = 200;

/// The HTTP-style response handed back to the Lambda runtime.
///
/// Serializes to `{"statusCode": .., "headers": {..}, "body": ".."}`, the
/// shape API Gateway and function URLs expect. `headers` is left out
/// entirely when no custom header was set, and keeps insertion order when
/// present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    status_code: u16,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_headers"
    )]
    headers: Vec<HeaderField>,
    body: String,
}

fn serialize_headers<S>(headers: &[HeaderField], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(headers.iter().map(|(k, v)| (k, v)))
}

impl InvocationResponse {
    pub fn builder() -> InvocationResponseBuilder {
        InvocationResponseBuilder::default()
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn headers(&self) -> &[HeaderField] {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Look up a header value by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The `Content-Type` header, if one was set.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }
}

/// Builder for [`InvocationResponse`].
///
/// Defaults to status 200, no headers and an empty body.
#[derive(Debug)]
pub struct InvocationResponseBuilder {
    status_code: u16,
    headers: Vec<HeaderField>,
    body: String,
}

impl Default for InvocationResponseBuilder {
    fn default() -> Self {
        Self {
            status_code: STATUS_OK,
            headers: vec![],
            body: String::new(),
        }
    }
}

impl InvocationResponseBuilder {
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }

    /// Append headers. A header whose name matches an existing one
    /// (case-insensitively) replaces it in place.
    pub fn with_headers(mut self, headers: Vec<HeaderField>) -> Self {
        for (name, value) in headers {
            match self
                .headers
                .iter_mut()
                .find(|(k, _)| k.eq_ignore_ascii_case(&name))
            {
                Some(existing) => existing.1 = value,
                None => self.headers.push((name, value)),
            }
        }
        self
    }

    pub fn with_header(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_headers(vec![(name.into(), value.into())])
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> InvocationResponse {
        InvocationResponse {
            status_code: self.status_code,
            headers: self.headers,
            body: self.body,
        }
    }
}
