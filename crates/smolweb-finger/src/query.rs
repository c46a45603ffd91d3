//! Finger queries (RFC 1288).

use url::Url;

use crate::error::{Error, Result};

/// Port used when a `finger://` URL does not name one.
pub const DEFAULT_PORT: u16 = 79;

/// Where to connect and who to ask about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerQuery {
    /// Host to connect to.
    pub host: String,
    /// Port to connect to.
    pub port: u16,
    /// User to look up; empty lists everyone logged in.
    pub user: String,
}

impl FingerQuery {
    /// Builds a query from a `finger://` URL.
    ///
    /// The user comes from the userinfo part (`finger://alice@host`) or,
    /// failing that, from the path (`finger://host/alice`).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse, is not `finger://` or
    /// has no host.
    pub fn from_url(url: &str) -> Result<Self> {
        Self::with_default_port(url, DEFAULT_PORT)
    }

    /// Like [`FingerQuery::from_url`], with a custom fallback port.
    ///
    /// # Errors
    ///
    /// See [`FingerQuery::from_url`].
    pub fn with_default_port(url: &str, default_port: u16) -> Result<Self> {
        let parsed = Url::parse(url)?;
        if parsed.scheme() != "finger" {
            return Err(Error::WrongScheme(url.to_string()));
        }
        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| Error::MissingHost(url.to_string()))?;

        let user = if parsed.username().is_empty() {
            parsed.path().trim_start_matches('/')
        } else {
            parsed.username()
        };

        Ok(Self {
            host: host.to_string(),
            port: parsed.port().unwrap_or(default_port),
            user: user.to_string(),
        })
    }

    /// Returns the request line, CRLF included.
    #[must_use]
    pub fn request_line(&self) -> String {
        format!("{}\r\n", self.user)
    }
}
