//! Gemtext (`text/gemini`) parsing.
//!
//! Gemtext is line oriented. Every line is classified on its own by its
//! prefix, except that toggle lines (` ``` `) switch the parser in and out
//! of preformatted mode, where lines are passed through untouched.
//!
//! Parsing is a fold over the lines of the body carrying a [`Mode`]; the
//! mode always starts out [`Mode::Normal`] and never outlives the call.

use crate::resolve::{repair_scheme, resolve};
use crate::scheme::{LinkScheme, is_absolute};

/// Prefix of a preformat toggle line.
pub const TOGGLE_PREFIX: &str = "```";
/// Prefix of a link line.
pub const LINK_PREFIX: &str = "=>";
/// Deepest heading level; deeper headings are clamped to it.
pub const MAX_HEADING_LEVEL: u8 = 3;

const HEADING_MARKER: char = '#';
const LIST_MARKER: char = '*';
const QUOTE_MARKER: char = '>';

/// A parsed link line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    /// Resolved target, or `None` for a bare `=>` line.
    pub target: Option<String>,
    /// Text to show; the target itself when the line has no label.
    pub label: String,
    /// Scheme family of the resolved target.
    pub scheme: LinkScheme,
}

/// One rendered line of a Gemtext document.
///
/// Toggle lines never appear here; they only change the parser mode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum GemtextElement {
    /// Ordinary text, a blank spacing line, or a line of a preformatted block.
    PlainText {
        /// The line as received. Never trimmed.
        raw: String,
        /// Set for lines inside a preformatted block.
        preformatted: bool,
        /// Alt text from the toggle line that opened the block.
        alt: Option<String>,
    },
    /// `=> target [label]`
    Link {
        /// The line as received.
        raw: String,
        /// The parsed link.
        link: Link,
    },
    /// `#`, `##` or `###` followed by text.
    Heading {
        /// The line as received.
        raw: String,
        /// Level 1-3.
        level: u8,
        /// Heading text without markers.
        text: String,
    },
    /// `* item`
    ListItem {
        /// The line as received.
        raw: String,
        /// Item text without the marker.
        text: String,
    },
    /// `>quote`
    Quote {
        /// The line as received.
        raw: String,
        /// Quoted text without the marker.
        text: String,
    },
}

/// Field-less mirror of [`GemtextElement`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GemtextKind {
    /// See [`GemtextElement::PlainText`].
    PlainText,
    /// See [`GemtextElement::Link`].
    Link,
    /// See [`GemtextElement::Heading`].
    Heading,
    /// See [`GemtextElement::ListItem`].
    ListItem,
    /// See [`GemtextElement::Quote`].
    Quote,
}

impl GemtextKind {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::PlainText,
        Self::Link,
        Self::Heading,
        Self::ListItem,
        Self::Quote,
    ];
}

impl GemtextElement {
    /// Creates a plain text element outside preformatted mode.
    #[must_use]
    pub fn text(raw: impl Into<String>) -> Self {
        Self::PlainText {
            raw: raw.into(),
            preformatted: false,
            alt: None,
        }
    }

    /// Returns the kind of this element.
    #[must_use]
    pub const fn kind(&self) -> GemtextKind {
        match self {
            Self::PlainText { .. } => GemtextKind::PlainText,
            Self::Link { .. } => GemtextKind::Link,
            Self::Heading { .. } => GemtextKind::Heading,
            Self::ListItem { .. } => GemtextKind::ListItem,
            Self::Quote { .. } => GemtextKind::Quote,
        }
    }

    /// Returns the original line.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::PlainText { raw, .. }
            | Self::Link { raw, .. }
            | Self::Heading { raw, .. }
            | Self::ListItem { raw, .. }
            | Self::Quote { raw, .. } => raw,
        }
    }

    /// Returns the text a renderer should display.
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::PlainText { raw, .. } => raw,
            Self::Link { link, .. } => &link.label,
            Self::Heading { text, .. } | Self::ListItem { text, .. } | Self::Quote { text, .. } => {
                text
            }
        }
    }

    /// Returns the link if this is a link line.
    #[must_use]
    pub const fn link(&self) -> Option<&Link> {
        match self {
            Self::Link { link, .. } => Some(link),
            _ => None,
        }
    }

    /// Returns the heading level if this is a heading.
    #[must_use]
    pub const fn heading_level(&self) -> Option<u8> {
        match self {
            Self::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// Returns true for lines inside a preformatted block.
    #[must_use]
    pub const fn is_preformatted(&self) -> bool {
        matches!(
            self,
            Self::PlainText {
                preformatted: true,
                ..
            }
        )
    }
}

/// Parser mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Lines are classified by prefix.
    #[default]
    Normal,
    /// Lines are passed through verbatim until the next toggle line.
    Preformatted {
        /// Alt text of the opening toggle line.
        alt: Option<String>,
    },
}

impl Mode {
    /// Feeds one line, returning the next mode and the element to emit.
    ///
    /// Toggle lines switch mode and emit nothing.
    #[must_use]
    pub fn step(self, line: &str, base_url: Option<&str>) -> (Self, Option<GemtextElement>) {
        match self {
            Self::Preformatted { alt } => {
                if is_toggle(line) {
                    tracing::trace!("Leaving preformatted block");
                    return (Self::Normal, None);
                }
                let element = GemtextElement::PlainText {
                    raw: line.to_string(),
                    preformatted: true,
                    alt: alt.clone(),
                };
                (Self::Preformatted { alt }, Some(element))
            }
            Self::Normal => match classify_line(line, base_url) {
                LineClass::Toggle { alt } => {
                    tracing::trace!(?alt, "Entering preformatted block");
                    (Self::Preformatted { alt }, None)
                }
                LineClass::Element(element) => (Self::Normal, Some(element)),
            },
        }
    }
}

/// Classification of a single line in normal mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// A preformat toggle. Consumed by the parser, never emitted.
    Toggle {
        /// Text following the toggle marker, if any.
        alt: Option<String>,
    },
    /// A renderable element.
    Element(GemtextElement),
}

type Matcher = fn(&str) -> bool;
type Builder = fn(&str, Option<&str>) -> LineClass;

/// Normal-mode rules in precedence order. Lines matching none are text.
const RULES: &[(Matcher, Builder)] = &[
    (is_toggle, build_toggle),
    (is_link, build_link),
    (is_heading, build_heading),
    (is_list_item, build_list_item),
    (is_quote, build_quote),
];

/// Classifies one line as it would be in normal mode.
#[must_use]
pub fn classify_line(line: &str, base_url: Option<&str>) -> LineClass {
    RULES
        .iter()
        .find(|(matches, _)| matches(line))
        .map_or_else(
            || LineClass::Element(GemtextElement::text(line)),
            |(_, build)| build(line, base_url),
        )
}

/// Parses a Gemtext body into elements.
///
/// Relative link targets are resolved against `base_url`; without one they
/// are left as written. An unterminated preformatted block is not an error:
/// its lines are emitted as preformatted text up to the end of input.
#[must_use]
pub fn parse(body: &str, base_url: Option<&str>) -> Vec<GemtextElement> {
    let (mode, elements) = body
        .lines()
        .fold((Mode::Normal, Vec::new()), |(mode, mut out), line| {
            let (mode, element) = mode.step(line, base_url);
            out.extend(element);
            (mode, out)
        });

    if mode != Mode::Normal {
        tracing::debug!("Document ended inside a preformatted block");
    }

    elements
}

fn is_toggle(line: &str) -> bool {
    line.starts_with(TOGGLE_PREFIX)
}

fn is_link(line: &str) -> bool {
    line.starts_with(LINK_PREFIX)
}

fn is_heading(line: &str) -> bool {
    let rest = line.trim_start_matches(HEADING_MARKER);
    rest.len() < line.len() && !rest.trim().is_empty()
}

fn is_list_item(line: &str) -> bool {
    line.strip_prefix(LIST_MARKER)
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace)
}

fn is_quote(line: &str) -> bool {
    line.starts_with(QUOTE_MARKER)
}

fn build_toggle(line: &str, _: Option<&str>) -> LineClass {
    let alt = line[TOGGLE_PREFIX.len()..].trim();
    LineClass::Toggle {
        alt: (!alt.is_empty()).then(|| alt.to_string()),
    }
}

fn build_link(line: &str, base_url: Option<&str>) -> LineClass {
    let mut tokens = line[LINK_PREFIX.len()..].split_whitespace();
    let target = tokens.next().map(|token| resolve_target(token, base_url));
    let label = tokens.collect::<Vec<_>>().join(" ");

    let label = if label.is_empty() {
        target.clone().unwrap_or_default()
    } else {
        label
    };
    let scheme = LinkScheme::classify(target.as_deref().unwrap_or_default());

    LineClass::Element(GemtextElement::Link {
        raw: line.to_string(),
        link: Link {
            target,
            label,
            scheme,
        },
    })
}

fn build_heading(line: &str, _: Option<&str>) -> LineClass {
    let rest = line.trim_start_matches(HEADING_MARKER);
    let markers = line.len() - rest.len();
    let level = u8::try_from(markers)
        .unwrap_or(MAX_HEADING_LEVEL)
        .min(MAX_HEADING_LEVEL);

    LineClass::Element(GemtextElement::Heading {
        raw: line.to_string(),
        level,
        text: rest.trim().to_string(),
    })
}

fn build_list_item(line: &str, _: Option<&str>) -> LineClass {
    LineClass::Element(GemtextElement::ListItem {
        raw: line.to_string(),
        text: line[LIST_MARKER.len_utf8()..].trim().to_string(),
    })
}

fn build_quote(line: &str, _: Option<&str>) -> LineClass {
    LineClass::Element(GemtextElement::Quote {
        raw: line.to_string(),
        text: line[QUOTE_MARKER.len_utf8()..].trim().to_string(),
    })
}

fn resolve_target(token: &str, base_url: Option<&str>) -> String {
    if is_absolute(token) {
        return token.to_string();
    }
    match base_url {
        Some(base) => resolve(base, token),
        None => repair_scheme(token),
    }
}
