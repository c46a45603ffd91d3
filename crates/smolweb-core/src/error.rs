//! Core error types.

use thiserror::Error;

/// Errors from request planning.
///
/// Dispatching and parsing never fail; see [`crate::dispatch`].
#[derive(Debug, Error)]
pub enum Error {
    /// URL could not be parsed.
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    /// Scheme is not one of the supported protocols.
    #[error("Unsupported scheme {0}: only gemini://, gopher:// and finger:// URLs are supported")]
    UnsupportedScheme(String),

    /// Gemini request error.
    #[error("Gemini error: {0}")]
    Gemini(#[from] smolweb_gemini::Error),

    /// Gopher URL error.
    #[error("Gopher error: {0}")]
    Gopher(#[from] smolweb_gopher::Error),

    /// Finger query error.
    #[error("Finger error: {0}")]
    Finger(#[from] smolweb_finger::Error),
}

/// Result type alias using the core error type.
pub type Result<T> = std::result::Result<T, Error>;
