//! Link scheme classification.
//!
//! The scheme of a link target only drives display affordances (icons,
//! "external" markers); it never changes how a line is parsed.

use std::fmt;

/// Scheme family of a resolved link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LinkScheme {
    /// `gemini://`
    Gemini,
    /// `gopher://`
    Gopher,
    /// `finger://`
    Finger,
    /// `http://`
    Http,
    /// `https://`
    Https,
    /// `mailto:`
    Mail,
    /// `xmpp:`
    Xmpp,
    /// `irc://` or `ircs://`
    Irc,
    /// No scheme, or a path-like target that could not be resolved.
    Relative,
    /// Some other scheme.
    Unknown,
}

/// Literal prefixes, checked in order.
const PREFIXES: &[(&str, LinkScheme)] = &[
    ("gemini://", LinkScheme::Gemini),
    ("gopher://", LinkScheme::Gopher),
    ("finger://", LinkScheme::Finger),
    ("http://", LinkScheme::Http),
    ("https://", LinkScheme::Https),
    ("mailto:", LinkScheme::Mail),
    ("xmpp:", LinkScheme::Xmpp),
    ("irc://", LinkScheme::Irc),
    ("ircs://", LinkScheme::Irc),
];

impl LinkScheme {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Gemini,
        Self::Gopher,
        Self::Finger,
        Self::Http,
        Self::Https,
        Self::Mail,
        Self::Xmpp,
        Self::Irc,
        Self::Relative,
        Self::Unknown,
    ];

    /// Classifies a link target by its literal scheme prefix.
    ///
    /// Targets without a scheme, or starting with `/`, `./` or `../`, are
    /// [`LinkScheme::Relative`]; anything else unrecognised is
    /// [`LinkScheme::Unknown`].
    #[must_use]
    pub fn classify(target: &str) -> Self {
        if let Some((_, scheme)) = PREFIXES
            .iter()
            .find(|(prefix, _)| starts_with_ignore_case(target, prefix))
        {
            return *scheme;
        }

        if is_path_like(target) || !has_scheme(target) {
            Self::Relative
        } else {
            Self::Unknown
        }
    }

    /// Returns the lowercase name of the scheme family.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Gopher => "gopher",
            Self::Finger => "finger",
            Self::Http => "http",
            Self::Https => "https",
            Self::Mail => "mail",
            Self::Xmpp => "xmpp",
            Self::Irc => "irc",
            Self::Relative => "relative",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true if following the link leaves Gemini space.
    #[must_use]
    pub const fn is_external(self) -> bool {
        !matches!(self, Self::Gemini | Self::Relative)
    }
}

impl fmt::Display for LinkScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if a link target should be used as-is rather than resolved.
///
/// A target is absolute when it contains `://` anywhere past its start, or
/// carries one of the opaque schemes from the table (`mailto:`, `xmpp:`).
/// A target starting with a bare `://` is never absolute.
#[must_use]
pub fn is_absolute(target: &str) -> bool {
    if target.starts_with("://") {
        return false;
    }
    target.contains("://")
        || PREFIXES
            .iter()
            .any(|(prefix, _)| !prefix.ends_with("//") && starts_with_ignore_case(target, prefix))
}

/// Returns true if the string begins with an RFC 3986 `scheme:`.
pub(crate) fn has_scheme(s: &str) -> bool {
    let Some((scheme, _)) = s.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn is_path_like(s: &str) -> bool {
    s.starts_with('/') || s.starts_with("./") || s.starts_with("../")
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn classify_known_prefixes() {
        assert_eq!(LinkScheme::classify("gemini://a.b/"), LinkScheme::Gemini);
        assert_eq!(LinkScheme::classify("gopher://a.b/1/"), LinkScheme::Gopher);
        assert_eq!(LinkScheme::classify("finger://a.b/me"), LinkScheme::Finger);
        assert_eq!(LinkScheme::classify("http://a.b"), LinkScheme::Http);
        assert_eq!(LinkScheme::classify("https://a.b"), LinkScheme::Https);
        assert_eq!(LinkScheme::classify("mailto:me@a.b"), LinkScheme::Mail);
        assert_eq!(LinkScheme::classify("xmpp:me@a.b"), LinkScheme::Xmpp);
        assert_eq!(LinkScheme::classify("irc://irc.a.b/#c"), LinkScheme::Irc);
        assert_eq!(LinkScheme::classify("ircs://irc.a.b/#c"), LinkScheme::Irc);
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(LinkScheme::classify("GEMINI://A.B/"), LinkScheme::Gemini);
        assert_eq!(LinkScheme::classify("HTTPS://A.B/"), LinkScheme::Https);
    }

    #[test]
    fn classify_relative() {
        assert_eq!(LinkScheme::classify("/abs/path"), LinkScheme::Relative);
        assert_eq!(LinkScheme::classify("./here.gmi"), LinkScheme::Relative);
        assert_eq!(LinkScheme::classify("../up.gmi"), LinkScheme::Relative);
        assert_eq!(LinkScheme::classify("page.gmi"), LinkScheme::Relative);
        assert_eq!(LinkScheme::classify(""), LinkScheme::Relative);
    }

    #[test]
    fn classify_unknown() {
        assert_eq!(LinkScheme::classify("ftp://a.b/"), LinkScheme::Unknown);
        assert_eq!(LinkScheme::classify("spartan://a.b/"), LinkScheme::Unknown);
        assert_eq!(LinkScheme::classify("news:comp.lang"), LinkScheme::Unknown);
    }

    #[test]
    fn every_named_variant_has_a_prefix() {
        for scheme in LinkScheme::ALL {
            let covered = PREFIXES.iter().any(|(_, s)| *s == scheme);
            match scheme {
                LinkScheme::Relative | LinkScheme::Unknown => assert!(!covered),
                _ => assert!(covered, "{scheme} has no prefix"),
            }
        }
    }

    #[test]
    fn display_matches_as_str() {
        for scheme in LinkScheme::ALL {
            assert_eq!(scheme.to_string(), scheme.as_str());
        }
    }

    #[test]
    fn external_schemes() {
        assert!(!LinkScheme::Gemini.is_external());
        assert!(!LinkScheme::Relative.is_external());
        assert!(LinkScheme::Https.is_external());
        assert!(LinkScheme::Mail.is_external());
    }

    #[test]
    fn absolute_targets() {
        assert!(is_absolute("gemini://a.b/"));
        assert!(is_absolute("https://a.b/"));
        assert!(is_absolute("mailto:me@a.b"));
        assert!(is_absolute("XMPP:me@a.b"));
        assert!(!is_absolute("://a.b/"));
        assert!(!is_absolute("page.gmi"));
        assert!(!is_absolute("/root"));
    }

    #[test]
    fn scheme_syntax() {
        assert!(has_scheme("news:x"));
        assert!(has_scheme("svn+ssh://x"));
        assert!(!has_scheme("1abc:x"));
        assert!(!has_scheme("no scheme here"));
        assert!(!has_scheme(":x"));
    }
}
