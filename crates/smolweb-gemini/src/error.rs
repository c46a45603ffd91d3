//! Error types for Gemini operations.

/// Result type alias for Gemini operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Gemini error types.
///
/// Gemtext parsing and link resolution never fail; these errors only come
/// from validating response headers and outgoing requests.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Response did not contain a header line.
    #[error("Missing response header")]
    MissingHeader,

    /// Header line is not `<status> <meta>`.
    #[error("Invalid response header: {0}")]
    InvalidHeader(String),

    /// Status code is not two digits.
    #[error("Invalid status code: {0}")]
    InvalidStatus(String),

    /// URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// URL has no host component.
    #[error("URL has no host: {0}")]
    MissingHost(String),

    /// URL scheme is not `gemini`.
    #[error("Not a gemini URL: {0}")]
    WrongScheme(String),

    /// Request line exceeds the protocol limit.
    #[error("Request URL is {0} bytes, limit is 1024")]
    RequestTooLong(usize),
}
