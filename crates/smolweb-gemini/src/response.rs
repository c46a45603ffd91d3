//! Gemini response headers.
//!
//! A Gemini response is a single header line, `<status> <meta>\r\n`,
//! followed by the body. Only the body of a success response is content;
//! the header is metadata and is never rendered.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// MIME type assumed when a success header carries no meta.
pub const DEFAULT_MIME_TYPE: &str = "text/gemini";

/// Two-digit Gemini status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(u8);

/// First digit of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    /// 1x: the server wants a line of user input.
    Input,
    /// 2x: the body follows.
    Success,
    /// 3x: meta is the new URL.
    Redirect,
    /// 4x: try again later.
    TemporaryFailure,
    /// 5x: do not try again.
    PermanentFailure,
    /// 6x: a client certificate is needed.
    ClientCertificate,
    /// Any other first digit.
    Unknown,
}

impl StatusCode {
    /// Creates a status code.
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Returns the numeric code.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Returns the category given by the first digit.
    #[must_use]
    pub const fn category(self) -> StatusCategory {
        match self.0 / 10 {
            1 => StatusCategory::Input,
            2 => StatusCategory::Success,
            3 => StatusCategory::Redirect,
            4 => StatusCategory::TemporaryFailure,
            5 => StatusCategory::PermanentFailure,
            6 => StatusCategory::ClientCertificate,
            _ => StatusCategory::Unknown,
        }
    }

    /// Returns true for 2x codes.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self.category(), StatusCategory::Success)
    }

    /// Returns true for 3x codes.
    #[must_use]
    pub const fn is_redirect(self) -> bool {
        matches!(self.category(), StatusCategory::Redirect)
    }

    /// Returns true for 4x and 5x codes.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(
            self.category(),
            StatusCategory::TemporaryFailure | StatusCategory::PermanentFailure
        )
    }
}

// Codes defined by the protocol
impl StatusCode {
    /// 10 Input
    pub const INPUT: Self = Self(10);
    /// 11 Sensitive input
    pub const SENSITIVE_INPUT: Self = Self(11);
    /// 20 Success
    pub const SUCCESS: Self = Self(20);
    /// 30 Temporary redirect
    pub const REDIRECT_TEMPORARY: Self = Self(30);
    /// 31 Permanent redirect
    pub const REDIRECT_PERMANENT: Self = Self(31);
    /// 40 Temporary failure
    pub const TEMPORARY_FAILURE: Self = Self(40);
    /// 41 Server unavailable
    pub const SERVER_UNAVAILABLE: Self = Self(41);
    /// 42 CGI error
    pub const CGI_ERROR: Self = Self(42);
    /// 43 Proxy error
    pub const PROXY_ERROR: Self = Self(43);
    /// 44 Slow down
    pub const SLOW_DOWN: Self = Self(44);
    /// 50 Permanent failure
    pub const PERMANENT_FAILURE: Self = Self(50);
    /// 51 Not found
    pub const NOT_FOUND: Self = Self(51);
    /// 52 Gone
    pub const GONE: Self = Self(52);
    /// 53 Proxy request refused
    pub const PROXY_REQUEST_REFUSED: Self = Self(53);
    /// 59 Bad request
    pub const BAD_REQUEST: Self = Self(59);
    /// 60 Client certificate required
    pub const CERTIFICATE_REQUIRED: Self = Self(60);
    /// 61 Certificate not authorised
    pub const CERTIFICATE_NOT_AUTHORISED: Self = Self(61);
    /// 62 Certificate not valid
    pub const CERTIFICATE_NOT_VALID: Self = Self(62);
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Parsed response header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Status code.
    pub status: StatusCode,
    /// MIME type, prompt, redirect URL or error message, depending on status.
    pub meta: String,
}

impl Header {
    /// Parses a header line, with or without its trailing CRLF.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is empty, the status is not two digits,
    /// or the status is not followed by a space.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return Err(Error::MissingHeader);
        }

        let code = line
            .get(..2)
            .filter(|c| c.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| Error::InvalidStatus(line.chars().take(2).collect()))?;
        let status = code
            .parse::<u8>()
            .map_err(|_| Error::InvalidStatus(code.to_string()))?;

        let meta = match &line[2..] {
            "" => "",
            rest => rest
                .strip_prefix(' ')
                .ok_or_else(|| Error::InvalidHeader(line.to_string()))?,
        };

        Ok(Self {
            status: StatusCode::new(status),
            meta: meta.to_string(),
        })
    }

    /// Returns the lowercase MIME type of a success response.
    #[must_use]
    pub fn mime_type(&self) -> Option<String> {
        if !self.status.is_success() {
            return None;
        }
        let essence = self.meta.split(';').next().unwrap_or_default().trim();
        Some(if essence.is_empty() {
            DEFAULT_MIME_TYPE.to_string()
        } else {
            essence.to_ascii_lowercase()
        })
    }

    /// Returns true if the body is Gemtext.
    #[must_use]
    pub fn is_gemtext(&self) -> bool {
        self.mime_type().as_deref() == Some(DEFAULT_MIME_TYPE)
    }

    /// Returns the redirect target of a 3x response.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        self.status.is_redirect().then_some(self.meta.as_str())
    }
}

impl FromStr for Header {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.meta)
    }
}

/// A raw response split into header and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Header, if the response contained a CRLF-terminated first line.
    pub header: Option<Header>,
    /// Body decoded as UTF-8, invalid sequences replaced.
    pub body: String,
}

impl Response {
    /// Splits a raw response at its first CRLF.
    ///
    /// Without a CRLF the whole buffer is taken as the body.
    ///
    /// # Errors
    ///
    /// Returns an error if the first line is present but is not a valid header.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let Some(pos) = raw.windows(2).position(|w| w == b"\r\n") else {
            tracing::debug!(len = raw.len(), "Response has no header line");
            return Ok(Self {
                header: None,
                body: String::from_utf8_lossy(raw).into_owned(),
            });
        };

        let header = Header::parse(&String::from_utf8_lossy(&raw[..pos]))?;
        tracing::debug!(status = %header.status, meta = %header.meta, "Parsed response header");

        Ok(Self {
            header: Some(header),
            body: String::from_utf8_lossy(&raw[pos + 2..]).into_owned(),
        })
    }
}
