//! `gopher://` URLs (RFC 4266).
//!
//! The path of a gopher URL is `/<type><selector>`, optionally followed by
//! a search string for type `7` items, either after an encoded tab or as a
//! `?query`.

use std::fmt;

use url::Url;

use crate::error::{Error, Result};
use crate::item_type::ItemType;
use crate::line::DEFAULT_PORT;

/// A decoded gopher URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GopherUrl {
    /// Server host.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Item type character; `1` when the URL has no path.
    pub type_char: char,
    /// Selector sent to the server.
    pub selector: String,
    /// Search terms for type `7` items.
    pub search: Option<String>,
}

impl GopherUrl {
    /// Creates a URL for a menu entry.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, type_char: char, selector: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            type_char,
            selector: selector.into(),
            search: None,
        }
    }

    /// Parses a `gopher://` URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse, is not `gopher://` or has
    /// no host.
    pub fn parse(url: &str) -> Result<Self> {
        Self::with_default_port(url, DEFAULT_PORT)
    }

    /// Parses a `gopher://` URL, using `default_port` if it names none.
    ///
    /// # Errors
    ///
    /// See [`GopherUrl::parse`].
    pub fn with_default_port(url: &str, default_port: u16) -> Result<Self> {
        let parsed = Url::parse(url)?;
        if parsed.scheme() != "gopher" {
            return Err(Error::WrongScheme(url.to_string()));
        }
        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| Error::MissingHost(url.to_string()))?;

        let path = percent_decode(parsed.path());
        let path = path.strip_prefix('/').unwrap_or(path.as_str());

        let mut chars = path.chars();
        let (type_char, rest) = chars
            .next()
            .map_or(('1', ""), |c| (c, chars.as_str()));

        let (selector, mut search) = match rest.split_once('\t') {
            Some((selector, search)) => (selector, Some(search.to_string())),
            None => (rest, None),
        };
        if let Some(query) = parsed.query() {
            search.get_or_insert_with(|| percent_decode(query));
        }

        Ok(Self {
            host: host.to_string(),
            port: parsed.port().unwrap_or(default_port),
            type_char,
            selector: selector.to_string(),
            search,
        })
    }

    /// Returns the item type named by the URL.
    #[must_use]
    pub fn item_type(&self) -> ItemType {
        ItemType::from_char(self.type_char)
    }

    /// Returns the request line, CRLF included.
    #[must_use]
    pub fn request_line(&self) -> String {
        match &self.search {
            Some(search) => format!("{}\t{search}\r\n", self.selector),
            None => format!("{}\r\n", self.selector),
        }
    }
}

impl fmt::Display for GopherUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gopher://{}", self.host)?;
        if self.port != DEFAULT_PORT {
            write!(f, ":{}", self.port)?;
        }
        write!(f, "/{}{}", self.type_char, percent_encode(&self.selector))?;
        if let Some(search) = &self.search {
            write!(f, "%09{}", percent_encode(search))?;
        }
        Ok(())
    }
}

/// Escapes the characters that would otherwise change the URL's structure.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '\t' => out.push_str("%09"),
            '?' => out.push_str("%3F"),
            '#' => out.push_str("%23"),
            c => out.push(c),
        }
    }
    out
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escaped = (bytes[i] == b'%')
            .then(|| bytes.get(i + 1..i + 3))
            .flatten()
            .and_then(|hex| std::str::from_utf8(hex).ok())
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());
        if let Some(byte) = escaped {
            out.push(byte);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
