//! Finger response classification.
//!
//! Finger output is free-form text, so lines are classified heuristically.
//! Rules are tried in a fixed order and the first match wins: a line with
//! both an address and a URL is an email line.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use regex::Regex;

#[allow(clippy::expect_used)] // Pattern is a literal
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email pattern")
});

#[allow(clippy::expect_used)] // Pattern is a literal
static WEB_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s<>\[\]()]+").expect("valid url pattern"));

/// Prefixes that mark a presence/status line.
pub const STATUS_KEYWORDS: &[&str] = &["Status:", "Online", "Offline", "Away"];

const TOKEN_PUNCTUATION: &[char] = &[',', ';', '.', '(', ')', '[', ']', '"', '\''];

/// Category of a Finger line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    /// Anything else.
    PlainText,
    /// Contains an `http(s)://` URL.
    Link,
    /// Contains an email address.
    Email,
    /// Contains a date or time.
    Timestamp,
    /// Starts with a presence keyword.
    Status,
}

/// One classified, non-blank line of Finger output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FingerElement {
    /// Category of the line.
    pub category: Category,
    /// The line as received.
    pub raw: String,
    /// Navigation target for links and emails (`mailto:` for the latter).
    pub target: Option<String>,
    /// The matched URL or address.
    pub display_text: Option<String>,
    /// Parsed date for timestamp lines, when one of its tokens is RFC 3339
    /// or its tail is RFC 2822.
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl FingerElement {
    /// Classifies a single line.
    #[must_use]
    pub fn classify(line: &str) -> Self {
        if let Some(address) = EMAIL.find(line) {
            let address = address.as_str();
            return Self {
                target: Some(format!("mailto:{address}")),
                display_text: Some(address.to_string()),
                ..Self::new(Category::Email, line)
            };
        }

        if let Some(url) = WEB_URL.find(line) {
            let url = url.as_str();
            return Self {
                target: Some(url.to_string()),
                display_text: Some(url.to_string()),
                ..Self::new(Category::Link, line)
            };
        }

        if looks_like_timestamp(line) {
            return Self {
                timestamp: parse_timestamp(line),
                ..Self::new(Category::Timestamp, line)
            };
        }

        if STATUS_KEYWORDS.iter().any(|kw| line.starts_with(kw)) {
            return Self::new(Category::Status, line);
        }

        Self::new(Category::PlainText, line)
    }

    fn new(category: Category, raw: &str) -> Self {
        Self {
            category,
            raw: raw.to_string(),
            target: None,
            display_text: None,
            timestamp: None,
        }
    }

    /// Returns the text a renderer should display for the line.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.raw
    }
}

/// Classifies every non-blank line of a Finger response.
#[must_use]
pub fn parse(body: &str) -> Vec<FingerElement> {
    body.lines()
        .filter(|line| !line.trim().is_empty())
        .map(FingerElement::classify)
        .collect()
}

/// A token carrying both `T` and `Z` (ISO 8601 in UTC), or a `GMT`/`UTC` marker.
fn looks_like_timestamp(line: &str) -> bool {
    line.contains("GMT")
        || line.contains("UTC")
        || line
            .split_whitespace()
            .any(|token| token.contains('T') && token.contains('Z'))
}

fn parse_timestamp(line: &str) -> Option<DateTime<FixedOffset>> {
    line.split_whitespace()
        .map(|token| token.trim_matches(TOKEN_PUNCTUATION))
        .find_map(|token| DateTime::parse_from_rfc3339(token).ok())
        .or_else(|| {
            token_starts(line)
                .find_map(|start| DateTime::parse_from_rfc2822(line[start..].trim_end()).ok())
        })
}

fn token_starts(line: &str) -> impl Iterator<Item = usize> + '_ {
    line.char_indices()
        .filter(|(idx, c)| {
            !c.is_whitespace() && line[..*idx].chars().next_back().is_none_or(char::is_whitespace)
        })
        .map(|(idx, _)| idx)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn email() {
        let el = FingerElement::classify("Contact: alice@example.com");
        assert_eq!(el.category, Category::Email);
        assert_eq!(el.target.as_deref(), Some("mailto:alice@example.com"));
        assert_eq!(el.display_text.as_deref(), Some("alice@example.com"));
        assert_eq!(el.raw, "Contact: alice@example.com");
    }

    #[test]
    fn web_link() {
        let el = FingerElement::classify("Home page: https://alice.example.com/~a (new!)");
        assert_eq!(el.category, Category::Link);
        assert_eq!(el.target.as_deref(), Some("https://alice.example.com/~a"));
    }

    #[test]
    fn email_wins_over_link() {
        let el = FingerElement::classify("bob@example.org https://example.org/");
        assert_eq!(el.category, Category::Email);
        assert_eq!(el.target.as_deref(), Some("mailto:bob@example.org"));
    }

    #[test]
    fn iso_timestamp() {
        let el = FingerElement::classify("Last login: 2024-01-01T00:00:00Z");
        assert_eq!(el.category, Category::Timestamp);
        let ts = el.timestamp.unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day(), ts.hour()), (2024, 1, 1, 0));
        assert_eq!(el.target, None);
    }

    #[test]
    fn rfc2822_timestamp() {
        let el = FingerElement::classify("On since Mon, 01 Jan 2024 10:30:00 GMT");
        assert_eq!(el.category, Category::Timestamp);
        assert_eq!(el.timestamp.unwrap().hour(), 10);
    }

    #[test]
    fn marker_without_parseable_date() {
        let el = FingerElement::classify("Timezone: UTC");
        assert_eq!(el.category, Category::Timestamp);
        assert_eq!(el.timestamp, None);
    }

    #[test]
    fn t_and_z_must_share_a_token() {
        assert_eq!(
            FingerElement::classify("Tea at the Zoo").category,
            Category::PlainText
        );
    }

    #[test]
    fn status_keywords() {
        for line in ["Status: hacking", "Online since noon", "Offline", "Away for lunch"] {
            assert_eq!(FingerElement::classify(line).category, Category::Status, "{line}");
        }
    }

    #[test]
    fn indented_keyword_is_plain() {
        assert_eq!(
            FingerElement::classify("  Away for lunch").category,
            Category::PlainText
        );
    }

    #[test]
    fn keyword_must_lead() {
        assert_eq!(
            FingerElement::classify("I am Online").category,
            Category::PlainText
        );
    }

    #[test]
    fn plain() {
        let el = FingerElement::classify("Plan: world domination");
        assert_eq!(el.category, Category::PlainText);
        assert_eq!(el.text(), "Plan: world domination");
    }

    #[test]
    fn blank_lines_are_dropped() {
        let elements = parse("Login: alice\n\n   \r\nPlan: none\r\n");
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].raw, "Plan: none");
    }

    #[test]
    fn empty_response() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn token_start_offsets() {
        assert_eq!(token_starts("ab  cd e").collect::<Vec<_>>(), vec![0, 4, 7]);
        assert_eq!(token_starts("  x").collect::<Vec<_>>(), vec![2]);
    }
}
