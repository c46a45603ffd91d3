//! Error types for Gopher operations.

/// Result type alias for Gopher operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Gopher error types.
///
/// Menu parsing never fails; these come from URL handling only.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// URL scheme is not `gopher`.
    #[error("Not a gopher URL: {0}")]
    WrongScheme(String),

    /// URL has no host component.
    #[error("URL has no host: {0}")]
    MissingHost(String),
}
