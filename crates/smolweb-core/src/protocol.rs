//! Supported protocols.

use std::fmt;

/// A protocol this client can fetch and render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// `gemini://`
    Gemini,
    /// `gopher://`
    Gopher,
    /// `finger://`
    Finger,
}

impl Protocol {
    /// Every protocol.
    pub const ALL: [Self; 3] = [Self::Gemini, Self::Gopher, Self::Finger];

    /// Looks up a scheme name, ignoring case.
    #[must_use]
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.scheme().eq_ignore_ascii_case(scheme))
    }

    /// Returns the protocol named by a URL's scheme.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        let (scheme, _) = url.trim_start().split_once(':')?;
        Self::from_scheme(scheme)
    }

    /// Returns the URL scheme.
    #[must_use]
    pub const fn scheme(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Gopher => "gopher",
            Self::Finger => "finger",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}
