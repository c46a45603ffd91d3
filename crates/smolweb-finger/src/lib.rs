//! # smolweb-finger
//!
//! Finger (RFC 1288) response classification for small-web clients.
//!
//! ## Features
//!
//! - **Line classification**: email, link, timestamp, status or plain text
//! - **Timestamps**: RFC 3339 and RFC 2822 dates extracted with `chrono`
//! - **Queries**: host, port and user for a `finger://` URL
//!
//! ## Quick Start
//!
//! ```ignore
//! use smolweb_finger::{Category, parse};
//!
//! let elements = parse("Login: alice\nMail: alice@example.com\n\nLast login: 2024-01-01T00:00:00Z\n");
//! assert_eq!(elements.len(), 3);
//! assert_eq!(elements[1].category, Category::Email);
//! assert_eq!(elements[2].category, Category::Timestamp);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod classify;
mod error;
mod query;

pub use classify::{Category, FingerElement, STATUS_KEYWORDS, parse};
pub use error::{Error, Result};
pub use query::{DEFAULT_PORT, FingerQuery};
