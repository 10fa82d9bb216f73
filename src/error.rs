use thiserror::Error;

/// Faults raised while building a response.
///
/// Input is never rejected: malformed events fall back to defaults. The only
/// failure left is encoding a body or event dump, which is reported to the
/// Lambda runtime as an invocation error.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A JSON body or event dump could not be encoded.
    #[error("failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),

    /// Encoded JSON was not valid UTF-8.
    #[error("encoded JSON is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, HandlerError>;
