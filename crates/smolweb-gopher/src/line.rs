//! Gopher menu lines.
//!
//! A menu line is `<type><description>\t<selector>\t<host>\t<port>`. Servers
//! get this wrong constantly, so parsing is fail-open: every non-empty line
//! becomes exactly one [`GopherLine`], and lines that cannot be split are
//! kept whole as [`ItemType::Unknown`].

use crate::gopher_url::GopherUrl;
use crate::item_type::ItemType;

/// Port assumed when a line's port field does not parse.
pub const DEFAULT_PORT: u16 = 70;

const FIELD_SEPARATOR: char = '\t';
const INFO_TYPE: char = 'i';

/// One entry of a Gopher menu.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GopherLine {
    /// Type character as sent by the server.
    pub type_char: char,
    /// Classification of `type_char`.
    pub item_type: ItemType,
    /// Label to show.
    pub description: String,
    /// Resource path on the server. Empty for info and malformed lines.
    pub selector: String,
    /// Server host. Empty for info and malformed lines.
    pub host: String,
    /// Server port. Zero for info and malformed lines.
    pub port: u16,
}

impl GopherLine {
    /// Parses a single menu line (without its line terminator).
    ///
    /// With at least three tab-separated fields after the type character,
    /// the last three are selector, host and port and everything before
    /// them, tabs included, is the description. Info lines (`i`) keep that
    /// description but drop the location fields; when nothing precedes the
    /// last three fields their first field is the description.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let mut chars = line.chars();
        let Some(type_char) = chars.next() else {
            return Self::malformed(line);
        };
        let fields: Vec<&str> = chars.as_str().split(FIELD_SEPARATOR).collect();

        match fields.as_slice() {
            [description @ .., _, _, _] if type_char == INFO_TYPE && !description.is_empty() => {
                Self::info(description.join("\t"))
            }
            [first, ..] if type_char == INFO_TYPE => Self::info(*first),
            [description @ .., selector, host, port] => Self {
                type_char,
                item_type: ItemType::from_char(type_char),
                description: description.join("\t"),
                selector: (*selector).to_string(),
                host: (*host).to_string(),
                port: port.trim().parse().unwrap_or(DEFAULT_PORT),
            },
            _ => Self::malformed(line),
        }
    }

    /// Creates an informational line.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            type_char: INFO_TYPE,
            item_type: ItemType::Info,
            description: text.into(),
            selector: String::new(),
            host: String::new(),
            port: 0,
        }
    }

    /// Keeps a line that could not be split, type character included.
    fn malformed(line: &str) -> Self {
        tracing::debug!(line, "Malformed gopher line");
        Self {
            type_char: line.chars().next().unwrap_or('?'),
            item_type: ItemType::Unknown,
            description: line.to_string(),
            selector: String::new(),
            host: String::new(),
            port: 0,
        }
    }

    /// Returns true if a client can fetch and render this item.
    #[must_use]
    pub const fn is_navigable(&self) -> bool {
        self.item_type.is_navigable()
    }

    /// Returns true if this item should be downloaded.
    #[must_use]
    pub const fn is_downloadable(&self) -> bool {
        self.item_type.is_downloadable()
    }

    /// Returns true if this item points outside Gopher.
    #[must_use]
    pub const fn is_external(&self) -> bool {
        self.item_type.is_external()
    }

    /// Returns the URL to follow when the line is activated.
    ///
    /// Web items with a `URL:` selector yield the embedded URL. Info,
    /// error and unknown lines have no target.
    #[must_use]
    pub fn url(&self) -> Option<String> {
        if let Some(url) = self.selector.strip_prefix("URL:")
            && matches!(self.item_type, ItemType::Http | ItemType::Https)
        {
            return Some(url.to_string());
        }
        if self.host.is_empty() {
            return None;
        }

        match self.item_type {
            ItemType::Info
            | ItemType::Error
            | ItemType::Unknown
            | ItemType::Cso
            | ItemType::Redundant => None,
            ItemType::Telnet => Some(format!("telnet://{}:{}", self.host, self.port)),
            ItemType::Tn3270 | ItemType::Telnet3270 => {
                Some(format!("tn3270://{}:{}", self.host, self.port))
            }
            _ => Some(
                GopherUrl::new(&self.host, self.port, self.type_char, &self.selector).to_string(),
            ),
        }
    }
}

/// Parses a Gopher menu response.
///
/// Lines are split on CRLF (bare LF is accepted too) and empty lines are
/// skipped; every other line yields exactly one [`GopherLine`].
#[must_use]
pub fn parse(response: &str) -> Vec<GopherLine> {
    response
        .lines()
        .filter(|line| !line.is_empty())
        .map(GopherLine::parse)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod parse_line {
        use super::*;

        #[test]
        fn directory() {
            let line = GopherLine::parse("1Floodgap Home\t/\tgopher.floodgap.com\t70");
            assert_eq!(line.type_char, '1');
            assert_eq!(line.item_type, ItemType::Directory);
            assert_eq!(line.description, "Floodgap Home");
            assert_eq!(line.selector, "/");
            assert_eq!(line.host, "gopher.floodgap.com");
            assert_eq!(line.port, 70);
            assert!(line.is_navigable());
        }

        #[test]
        fn tabs_in_description_are_kept() {
            let line = GopherLine::parse("0Name\twith\ttabs\t/file.txt\thost.org\t7070");
            assert_eq!(line.description, "Name\twith\ttabs");
            assert_eq!(line.selector, "/file.txt");
            assert_eq!(line.port, 7070);
        }

        #[test]
        fn bad_port_defaults() {
            let line = GopherLine::parse("1Menu\t/m\thost.org\tseventy");
            assert_eq!(line.port, 70);
            let line = GopherLine::parse("1Menu\t/m\thost.org\t");
            assert_eq!(line.port, 70);
        }

        #[test]
        fn exactly_three_fields() {
            let line = GopherLine::parse("1/sel\thost.org\t70");
            assert_eq!(line.description, "");
            assert_eq!(line.selector, "/sel");
            assert_eq!(line.host, "host.org");
        }

        #[test]
        fn info_line() {
            let line = GopherLine::parse("iWelcome to my hole\tfake\t(NULL)\t0");
            assert_eq!(line.item_type, ItemType::Info);
            assert_eq!(line.description, "Welcome to my hole");
            assert_eq!(line.selector, "");
            assert_eq!(line.host, "");
            assert_eq!(line.port, 0);
        }

        #[test]
        fn info_line_keeps_tabbed_description() {
            let line = GopherLine::parse("iName:\tAlice\tfake\t(NULL)\t0");
            assert_eq!(line.item_type, ItemType::Info);
            assert_eq!(line.description, "Name:\tAlice");
            assert_eq!(line.selector, "");
            assert_eq!(line.host, "");
            assert_eq!(line.port, 0);
        }

        #[test]
        fn info_line_with_three_fields_keeps_text() {
            let line = GopherLine::parse("iBanner\tfake\t(NULL)");
            assert_eq!(line, GopherLine::info("Banner"));
        }

        #[test]
        fn info_line_with_one_tab() {
            let line = GopherLine::parse("iHello\tfake");
            assert_eq!(line, GopherLine::info("Hello"));
        }

        #[test]
        fn info_line_without_tabs() {
            let line = GopherLine::parse("ijust text");
            assert_eq!(line, GopherLine::info("just text"));
        }

        // The whole line, type character included, becomes the description.
        #[test]
        fn too_few_fields_keeps_raw_line() {
            let line = GopherLine::parse("1Broken\tline");
            assert_eq!(line.type_char, '1');
            assert_eq!(line.item_type, ItemType::Unknown);
            assert_eq!(line.description, "1Broken\tline");
            assert_eq!(line.port, 0);
            assert!(!line.is_navigable());
        }

        #[test]
        fn plain_text_line_is_unknown() {
            let line = GopherLine::parse("Hello there");
            assert_eq!(line.item_type, ItemType::Unknown);
            assert_eq!(line.description, "Hello there");
        }

        #[test]
        fn unknown_type_char_with_fields() {
            let line = GopherLine::parse("xThing\t/t\thost.org\t70");
            assert_eq!(line.type_char, 'x');
            assert_eq!(line.item_type, ItemType::Unknown);
            assert_eq!(line.description, "Thing");
        }

        #[test]
        fn multibyte_type_char() {
            let line = GopherLine::parse("ébroken");
            assert_eq!(line.type_char, 'é');
            assert_eq!(line.description, "ébroken");
        }
    }

    mod urls {
        use super::*;

        #[test]
        fn menu_url() {
            let line = GopherLine::parse("1Home\t/\tgopher.floodgap.com\t70");
            assert_eq!(line.url().as_deref(), Some("gopher://gopher.floodgap.com/1/"));
        }

        #[test]
        fn download_url_keeps_port() {
            let line = GopherLine::parse("9Archive\t/a.zip\thost.org\t7070");
            assert!(line.is_downloadable());
            assert_eq!(line.url().as_deref(), Some("gopher://host.org:7070/9/a.zip"));
        }

        #[test]
        fn web_link() {
            let line = GopherLine::parse("hMy site\tURL:https://example.com/\thost.org\t70");
            assert!(line.is_external());
            assert_eq!(line.url().as_deref(), Some("https://example.com/"));
        }

        #[test]
        fn telnet() {
            let line = GopherLine::parse("8BBS\t\tbbs.org\t23");
            assert_eq!(line.url().as_deref(), Some("telnet://bbs.org:23"));
        }

        #[test]
        fn no_target() {
            assert_eq!(GopherLine::parse("iHello").url(), None);
            assert_eq!(GopherLine::parse("3Oops\t\terror.host\t1").url(), None);
            assert_eq!(GopherLine::parse("1Broken").url(), None);
            assert_eq!(GopherLine::parse("1No host\t/x\t\t70").url(), None);
        }
    }

    #[test]
    fn response_skips_empty_lines() {
        let response = "iHello\r\n\r\n1Menu\t/m\thost.org\t70\r\n.\r\n";
        let lines = parse(response);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].item_type, ItemType::Unknown);
        assert_eq!(lines[2].description, ".");
    }

    #[test]
    fn empty_response() {
        assert!(parse("").is_empty());
        assert!(parse("\r\n\r\n").is_empty());
    }
}
