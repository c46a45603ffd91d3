//! # smolweb-gopher
//!
//! Gopher (RFC 1436) menu parsing for small-web clients.
//!
//! ## Features
//!
//! - **Menu parsing**: one typed [`GopherLine`] per non-empty response line
//! - **Item types**: table-driven classification of type characters
//! - **URLs**: RFC 4266 `gopher://` parsing, request lines and link targets
//!
//! Malformed menu lines are never dropped; they come back as
//! [`ItemType::Unknown`] lines carrying the raw text.
//!
//! ## Quick Start
//!
//! ```ignore
//! use smolweb_gopher::{ItemType, parse};
//!
//! let menu = parse("1Floodgap Home\t/\tgopher.floodgap.com\t70\r\n");
//! assert_eq!(menu[0].item_type, ItemType::Directory);
//! assert_eq!(menu[0].url().as_deref(), Some("gopher://gopher.floodgap.com/1/"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
mod item_type;
mod line;
mod gopher_url;

pub use error::{Error, Result};
pub use item_type::ItemType;
pub use line::{DEFAULT_PORT, GopherLine, parse};
pub use gopher_url::GopherUrl;
