//! Parsed pages.

use serde::{Deserialize, Serialize};

use smolweb_finger::{Category, FingerElement};
use smolweb_gemini::GemtextElement;
use smolweb_gopher::GopherLine;

use crate::protocol::Protocol;

/// A parsed page, ready for rendering.
///
/// Created fresh for every response and never shared between pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "protocol", content = "elements", rename_all = "snake_case")]
pub enum Document {
    /// Gemtext elements.
    Gemini(Vec<GemtextElement>),
    /// Gopher menu lines.
    Gopher(Vec<GopherLine>),
    /// Classified Finger lines.
    Finger(Vec<FingerElement>),
    /// The fetcher's error message, shown as a single element.
    FetchError(String),
}

/// Something the user can activate to navigate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Text to show.
    pub label: String,
    /// URL to hand back to the fetcher.
    pub target: String,
}

impl Document {
    /// Returns the protocol the document was parsed as.
    #[must_use]
    pub const fn protocol(&self) -> Option<Protocol> {
        match self {
            Self::Gemini(_) => Some(Protocol::Gemini),
            Self::Gopher(_) => Some(Protocol::Gopher),
            Self::Finger(_) => Some(Protocol::Finger),
            Self::FetchError(_) => None,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Gemini(elements) => elements.len(),
            Self::Gopher(lines) => lines.len(),
            Self::Finger(elements) => elements.len(),
            Self::FetchError(_) => 1,
        }
    }

    /// Returns true if there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true for a fetch-layer error message.
    #[must_use]
    pub const fn is_fetch_error(&self) -> bool {
        matches!(self, Self::FetchError(_))
    }

    /// Returns every navigation target, in document order.
    #[must_use]
    pub fn links(&self) -> Vec<NavLink> {
        match self {
            Self::Gemini(elements) => elements
                .iter()
                .filter_map(GemtextElement::link)
                .filter_map(|link| {
                    link.target.as_ref().map(|target| NavLink {
                        label: link.label.clone(),
                        target: target.clone(),
                    })
                })
                .collect(),
            Self::Gopher(lines) => lines
                .iter()
                .filter_map(|line| {
                    line.url().map(|target| NavLink {
                        label: line.description.clone(),
                        target,
                    })
                })
                .collect(),
            Self::Finger(elements) => elements
                .iter()
                .filter(|el| matches!(el.category, Category::Link | Category::Email))
                .filter_map(|el| {
                    let target = el.target.clone()?;
                    let label = el.display_text.clone().unwrap_or_else(|| target.clone());
                    Some(NavLink { label, target })
                })
                .collect(),
            Self::FetchError(_) => Vec::new(),
        }
    }
}
