//! Gemini request lines.

use url::Url;

use crate::error::{Error, Result};

/// Port used when a `gemini://` URL does not name one.
pub const DEFAULT_PORT: u16 = 1965;

/// Longest URL a server is required to accept.
pub const MAX_URL_LEN: usize = 1024;

/// Where to connect and what to send for a Gemini URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Host to connect to.
    pub host: String,
    /// Port to connect to.
    pub port: u16,
    /// Absolute URL, sent verbatim.
    pub url: String,
}

impl Request {
    /// Builds a request using the standard port.
    ///
    /// # Errors
    ///
    /// See [`Request::with_default_port`].
    pub fn from_url(url: &str) -> Result<Self> {
        Self::with_default_port(url, DEFAULT_PORT)
    }

    /// Builds a request, using `default_port` if the URL has no port.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse, is not `gemini://`, has
    /// no host, or is longer than [`MAX_URL_LEN`] bytes.
    pub fn with_default_port(url: &str, default_port: u16) -> Result<Self> {
        let parsed = Url::parse(url)?;
        if parsed.scheme() != "gemini" {
            return Err(Error::WrongScheme(url.to_string()));
        }
        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| Error::MissingHost(url.to_string()))?;
        if url.len() > MAX_URL_LEN {
            return Err(Error::RequestTooLong(url.len()));
        }

        Ok(Self {
            host: host.to_string(),
            port: parsed.port().unwrap_or(default_port),
            url: url.to_string(),
        })
    }

    /// Returns the request line, CRLF included.
    #[must_use]
    pub fn line(&self) -> String {
        format!("{}\r\n", self.url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_port() {
        let request = Request::from_url("gemini://example.com/page.gmi").unwrap();
        assert_eq!(request.host, "example.com");
        assert_eq!(request.port, 1965);
        assert_eq!(request.line(), "gemini://example.com/page.gmi\r\n");
    }

    #[test]
    fn explicit_port() {
        let request = Request::from_url("gemini://example.com:1966/").unwrap();
        assert_eq!(request.port, 1966);
    }

    #[test]
    fn configured_default_port() {
        let request = Request::with_default_port("gemini://example.com/", 7000).unwrap();
        assert_eq!(request.port, 7000);
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(matches!(
            Request::from_url("https://example.com/"),
            Err(Error::WrongScheme(_))
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(Request::from_url("not a url"), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn rejects_long_urls() {
        let url = format!("gemini://example.com/{}", "a".repeat(MAX_URL_LEN));
        assert!(matches!(Request::from_url(&url), Err(Error::RequestTooLong(_))));
    }
}
