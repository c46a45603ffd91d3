//! Error types for Finger operations.

/// Result type alias for Finger operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Finger error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// URL scheme is not `finger`.
    #[error("Not a finger URL: {0}")]
    WrongScheme(String),

    /// URL has no host component.
    #[error("URL has no host: {0}")]
    MissingHost(String),
}
