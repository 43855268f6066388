/*
[INPUT]:  Error sources (transport, HTTP status, JSON, form encoding, URLs)
[OUTPUT]: Structured error types with network/parse classification
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Cryptsy adapter
///
/// Exchange-level failures (bad nonce, insufficient funds, ...) are not
/// represented here; they arrive inside the returned JSON body.
#[derive(Error, Debug)]
pub enum CryptsyError {
    /// HTTP transport failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("HTTP status {code}: {body}")]
    Status { code: u16, body: String },

    /// Response body was not valid JSON
    #[error("Invalid JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Request parameters could not be form-encoded
    #[error("Form encoding failed: {0}")]
    Encode(#[from] serde_html_form::ser::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CryptsyError {
    /// Transport failure or non-2xx status
    pub fn is_network_error(&self) -> bool {
        matches!(self, CryptsyError::Http(_) | CryptsyError::Status { .. })
    }

    /// Body could not be parsed as JSON
    pub fn is_parse_error(&self) -> bool {
        matches!(self, CryptsyError::Parse(_))
    }

    /// Create a status error from an HTTP status code and response body
    pub fn status_error(status: StatusCode, body: impl Into<String>) -> Self {
        CryptsyError::Status {
            code: status.as_u16(),
            body: body.into(),
        }
    }
}

/// Result type alias for Cryptsy operations
pub type Result<T> = std::result::Result<T, CryptsyError>;
