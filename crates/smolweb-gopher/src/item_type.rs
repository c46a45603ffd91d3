//! Gopher item types (RFC 1436 plus common extensions).

use std::fmt;

/// Semantic classification of a menu line's type character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemType {
    /// `0` plain text file.
    TextFile,
    /// `1` menu.
    Directory,
    /// `2` CSO phone-book server.
    Cso,
    /// `3` error.
    Error,
    /// `4` BinHexed Macintosh file.
    BinHex,
    /// `5` DOS binary archive.
    DosBinary,
    /// `6` uuencoded file.
    Uuencoded,
    /// `7` full-text search.
    Search,
    /// `8` telnet session.
    Telnet,
    /// `9` binary file.
    Binary,
    /// `+` redundant server.
    Redundant,
    /// `T` tn3270 session.
    Tn3270,
    /// `g` GIF image.
    Gif,
    /// `I` other image.
    Image,
    /// 3270 session classified out of band; no type character maps here.
    Telnet3270,
    /// `i` informational text.
    Info,
    /// `h` HTML or web link.
    Http,
    /// `H` secure web link.
    Https,
    /// `?` or anything unrecognised.
    Unknown,
}

/// Type character lookup table.
const TYPE_CHARS: &[(char, ItemType)] = &[
    ('0', ItemType::TextFile),
    ('1', ItemType::Directory),
    ('2', ItemType::Cso),
    ('3', ItemType::Error),
    ('4', ItemType::BinHex),
    ('5', ItemType::DosBinary),
    ('6', ItemType::Uuencoded),
    ('7', ItemType::Search),
    ('8', ItemType::Telnet),
    ('9', ItemType::Binary),
    ('+', ItemType::Redundant),
    ('T', ItemType::Tn3270),
    ('g', ItemType::Gif),
    ('I', ItemType::Image),
    ('i', ItemType::Info),
    ('h', ItemType::Http),
    ('H', ItemType::Https),
    ('?', ItemType::Unknown),
];

impl ItemType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 19] = [
        Self::TextFile,
        Self::Directory,
        Self::Cso,
        Self::Error,
        Self::BinHex,
        Self::DosBinary,
        Self::Uuencoded,
        Self::Search,
        Self::Telnet,
        Self::Binary,
        Self::Redundant,
        Self::Tn3270,
        Self::Gif,
        Self::Image,
        Self::Telnet3270,
        Self::Info,
        Self::Http,
        Self::Https,
        Self::Unknown,
    ];

    /// Looks up a type character.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        TYPE_CHARS
            .iter()
            .find(|(ch, _)| *ch == c)
            .map_or(Self::Unknown, |(_, item_type)| *item_type)
    }

    /// Returns the type character for this item type, if it has one.
    #[must_use]
    pub fn to_char(self) -> Option<char> {
        TYPE_CHARS
            .iter()
            .find(|(_, item_type)| *item_type == self)
            .map(|(ch, _)| *ch)
    }

    /// Returns true for items a client fetches and renders itself.
    #[must_use]
    pub const fn is_navigable(self) -> bool {
        matches!(self, Self::TextFile | Self::Directory | Self::Search)
    }

    /// Returns true for items that should be saved rather than rendered.
    #[must_use]
    pub const fn is_downloadable(self) -> bool {
        matches!(
            self,
            Self::BinHex | Self::DosBinary | Self::Uuencoded | Self::Binary | Self::Gif | Self::Image
        )
    }

    /// Returns true for items handled outside Gopher (web, telnet).
    #[must_use]
    pub const fn is_external(self) -> bool {
        matches!(
            self,
            Self::Http | Self::Https | Self::Telnet | Self::Tn3270 | Self::Telnet3270
        )
    }

    /// Returns the snake-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextFile => "text_file",
            Self::Directory => "directory",
            Self::Cso => "cso",
            Self::Error => "error",
            Self::BinHex => "bin_hex",
            Self::DosBinary => "dos_binary",
            Self::Uuencoded => "uuencoded",
            Self::Search => "search",
            Self::Telnet => "telnet",
            Self::Binary => "binary",
            Self::Redundant => "redundant",
            Self::Tn3270 => "tn3270",
            Self::Gif => "gif",
            Self::Image => "image",
            Self::Telnet3270 => "telnet3270",
            Self::Info => "info",
            Self::Http => "http",
            Self::Https => "https",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
