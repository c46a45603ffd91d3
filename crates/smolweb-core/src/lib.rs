//! # smolweb-core
//!
//! Glue between a protocol fetcher and a presentation layer for Gemini,
//! Gopher and Finger content.
//!
//! ## Features
//!
//! - **Dispatch**: pick the parser for a response from its source URL
//! - **Documents**: one typed element sequence per page, serializable
//! - **Links**: every navigation target of a page, in order
//! - **Requests**: host, port and request line for a URL, no I/O
//! - **Configuration**: default ports and start page
//!
//! ## Example
//!
//! ```ignore
//! use smolweb_core::{Config, Request, dispatch};
//!
//! let request = Request::from_url("gemini://example.com/", &Config::new())?;
//! // ... the fetcher connects to request.host():request.port(),
//! // sends request.line() and reads the body ...
//! let document = dispatch(&body, "gemini://example.com/");
//! for link in document.links() {
//!     println!("{} -> {}", link.label, link.target);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod config;
mod document;
mod error;
mod protocol;
mod request;

pub mod dispatch;

pub use config::{Config, ConfigBuilder, DEFAULT_START_PAGE};
pub use dispatch::{dispatch, dispatch_bytes};
pub use document::{Document, NavLink};
pub use error::{Error, Result};
pub use protocol::Protocol;
pub use request::{FETCH_ERROR_PREFIX, Request, fetch_failure_message};

// Re-export the protocol crates
pub use smolweb_finger as finger;
pub use smolweb_gemini as gemini;
pub use smolweb_gopher as gopher;
