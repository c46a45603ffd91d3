//! Request planning.
//!
//! Turns a URL into what the protocol fetcher needs: where to connect and
//! which line to send. No connection is made here.

use url::Url;

use smolweb_finger::FingerQuery;
use smolweb_gopher::GopherUrl;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::protocol::Protocol;

/// Prefix of the message the fetcher reports when a request fails.
pub const FETCH_ERROR_PREFIX: &str = "Failed to fetch";

/// A planned request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Gemini request.
    Gemini(smolweb_gemini::Request),
    /// Gopher selector request.
    Gopher(GopherUrl),
    /// Finger query.
    Finger(FingerQuery),
}

impl Request {
    /// Plans a request for `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse, uses an unsupported
    /// scheme, or is rejected by the protocol (no host, too long).
    pub fn from_url(url: &str, config: &Config) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
        let protocol = Protocol::from_scheme(parsed.scheme())
            .ok_or_else(|| Error::UnsupportedScheme(parsed.scheme().to_string()))?;

        let request = match protocol {
            Protocol::Gemini => Self::Gemini(smolweb_gemini::Request::with_default_port(
                url,
                config.gemini_port,
            )?),
            Protocol::Gopher => Self::Gopher(GopherUrl::with_default_port(url, config.gopher_port)?),
            Protocol::Finger => {
                Self::Finger(FingerQuery::with_default_port(url, config.finger_port)?)
            }
        };

        tracing::debug!(
            %protocol,
            host = request.host(),
            port = request.port(),
            "Planned request"
        );
        Ok(request)
    }

    /// Plans a request for the configured start page.
    ///
    /// # Errors
    ///
    /// See [`Request::from_url`].
    pub fn start_page(config: &Config) -> Result<Self> {
        Self::from_url(&config.start_page, config)
    }

    /// Returns the protocol of the request.
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        match self {
            Self::Gemini(_) => Protocol::Gemini,
            Self::Gopher(_) => Protocol::Gopher,
            Self::Finger(_) => Protocol::Finger,
        }
    }

    /// Returns the host to connect to.
    #[must_use]
    pub fn host(&self) -> &str {
        match self {
            Self::Gemini(r) => &r.host,
            Self::Gopher(u) => &u.host,
            Self::Finger(q) => &q.host,
        }
    }

    /// Returns the port to connect to.
    #[must_use]
    pub const fn port(&self) -> u16 {
        match self {
            Self::Gemini(r) => r.port,
            Self::Gopher(u) => u.port,
            Self::Finger(q) => q.port,
        }
    }

    /// Returns the line to send once connected, CRLF included.
    #[must_use]
    pub fn line(&self) -> String {
        match self {
            Self::Gemini(r) => r.line(),
            Self::Gopher(u) => u.request_line(),
            Self::Finger(q) => q.request_line(),
        }
    }
}

/// Formats the message a fetcher hands back in place of content when a
/// request fails. [`crate::dispatch`] recognises it and shows it as-is.
#[must_use]
pub fn fetch_failure_message(url: &str, reason: impl std::fmt::Display) -> String {
    format!("{FETCH_ERROR_PREFIX} {url}: {reason}")
}
