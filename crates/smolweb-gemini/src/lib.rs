//! # smolweb-gemini
//!
//! Gemini content handling for small-web clients.
//!
//! ## Features
//!
//! - **Gemtext parsing**: line classification with preformatted blocks
//! - **Link resolution**: relative targets resolved against the page URL
//! - **Scheme classification**: display hints for link targets
//! - **Response headers**: status codes, MIME types and redirects
//! - **Requests**: host, port and request line for a `gemini://` URL
//!
//! Parsing never fails. Malformed capsules degrade to plain text and
//! best-effort link targets instead of errors.
//!
//! ## Quick Start
//!
//! ```ignore
//! use smolweb_gemini::{GemtextKind, parse};
//!
//! let body = "# Welcome\n=> ./about.gmi About\n";
//! let elements = parse(body, Some("gemini://example.com/index.gmi"));
//!
//! assert_eq!(elements[0].kind(), GemtextKind::Heading);
//! let link = elements[1].link().unwrap();
//! assert_eq!(link.target.as_deref(), Some("gemini://example.com/about.gmi"));
//! ```
//!
//! ### Resolving links
//!
//! ```ignore
//! use smolweb_gemini::resolve;
//!
//! let url = resolve("gemini://example.com/a/b/page.gmi", "../up.gmi");
//! assert_eq!(url, "gemini://example.com/a/up.gmi");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
mod request;
mod response;
mod scheme;

pub mod gemtext;
pub mod resolve;

pub use error::{Error, Result};
pub use gemtext::{GemtextElement, GemtextKind, Link, parse};
pub use request::{DEFAULT_PORT, MAX_URL_LEN, Request};
pub use resolve::resolve;
pub use response::{DEFAULT_MIME_TYPE, Header, Response, StatusCategory, StatusCode};
pub use scheme::{LinkScheme, is_absolute};
