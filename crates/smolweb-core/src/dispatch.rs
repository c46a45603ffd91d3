//! Protocol dispatch.
//!
//! Picks the parser for a response from the scheme of the URL it was
//! fetched from. Dispatch is total: every input yields a [`Document`].

use crate::document::Document;
use crate::protocol::Protocol;
use crate::request::FETCH_ERROR_PREFIX;

/// Prefix of a status/header block some fetchers leave in front of a
/// Gemini body.
pub const STATUS_PREFIX: &str = "Status:";

/// Parses a response fetched from `source_url`.
///
/// A response starting with [`FETCH_ERROR_PREFIX`] is a fetcher error and
/// is passed through unparsed. Responses from unrecognised schemes are
/// parsed as Gemtext.
#[must_use]
pub fn dispatch(raw: &str, source_url: &str) -> Document {
    if raw.starts_with(FETCH_ERROR_PREFIX) {
        tracing::debug!(source_url, "Passing through fetch error");
        return Document::FetchError(raw.to_string());
    }

    let protocol = Protocol::from_url(source_url).unwrap_or_else(|| {
        tracing::debug!(source_url, "Unrecognised scheme, parsing as gemtext");
        Protocol::Gemini
    });
    tracing::trace!(%protocol, len = raw.len(), "Dispatching response");

    match protocol {
        Protocol::Gemini => Document::Gemini(smolweb_gemini::parse(
            gemini_body(raw),
            Some(source_url),
        )),
        Protocol::Gopher => Document::Gopher(smolweb_gopher::parse(raw)),
        Protocol::Finger => Document::Finger(smolweb_finger::parse(raw)),
    }
}

/// Like [`dispatch`], for a raw byte buffer. Invalid UTF-8 is replaced.
#[must_use]
pub fn dispatch_bytes(raw: &[u8], source_url: &str) -> Document {
    dispatch(&String::from_utf8_lossy(raw), source_url)
}

/// Strips a leading `Status:` header block.
///
/// The body starts after the first blank line. Without a blank line the
/// whole response is the body.
#[must_use]
pub fn gemini_body(raw: &str) -> &str {
    if !raw.starts_with(STATUS_PREFIX) {
        return raw;
    }

    let mut offset = 0;
    for line in raw.split_inclusive('\n') {
        offset += line.len();
        if line.trim().is_empty() {
            tracing::trace!(header_len = offset, "Stripped status block");
            return &raw[offset..];
        }
    }

    tracing::debug!("Status block without blank line, keeping whole response");
    raw
}
