//! Supported locales and `Accept-Language` negotiation.
//!
//! Canonical locale identifiers use underscore separators (`zh_CN`), matching
//! the path segments the front-end routes on. HTTP language tags use hyphens
//! (`zh-CN`); conversion happens at the boundaries and nowhere else.

mod negotiate;

pub use negotiate::negotiate;

use std::fmt;

/// A locale in the fixed supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    ZhCn,
    ZhTw,
    Ja,
    Ko,
}

impl Locale {
    /// All supported locales, in negotiation preference order.
    pub const ALL: [Locale; 5] = [
        Locale::En,
        Locale::ZhCn,
        Locale::ZhTw,
        Locale::Ja,
        Locale::Ko,
    ];

    /// Canonical path/cookie form (underscore separators).
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhCn => "zh_CN",
            Locale::ZhTw => "zh_TW",
            Locale::Ja => "ja",
            Locale::Ko => "ko",
        }
    }

    /// HTTP language-tag form (hyphen separators), as sent in
    /// `Accept-Language` headers.
    pub const fn accept_tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhCn => "zh-CN",
            Locale::ZhTw => "zh-TW",
            Locale::Ja => "ja",
            Locale::Ko => "ko",
        }
    }

    /// Parse a canonical (underscore) locale identifier. Case-sensitive.
    pub fn from_canonical(s: &str) -> Option<Locale> {
        Locale::ALL.into_iter().find(|l| l.as_str() == s)
    }

    /// Parse a path segment, accepting the hyphenated variant of a supported
    /// locale (`zh-CN`) as an alias for its canonical form (`zh_CN`).
    ///
    /// The caller can detect the non-canonical spelling by comparing the
    /// original segment against [`Locale::as_str`].
    pub fn from_segment(segment: &str) -> Option<Locale> {
        if segment.contains('-') {
            Locale::from_canonical(&segment.replace('-', "_"))
        } else {
            Locale::from_canonical(segment)
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
