//! Separator Resolution
//!
//! Supplies the decimal-point and thousands-separator characters used by
//! both parsers. The parsers take a [`Separators`] value explicitly; only
//! [`Separators::platform`] and the free functions at the bottom of this
//! module consult the process environment.
//!
//! # Locale Lookup
//!
//! Rust has no locale facet, so the environment's locale *name* is mapped
//! through a small built-in table keyed by language, with territory
//! overrides where the grouping character differs (`de_CH`, `it_CH`).
//! Grouping characters outside ASCII (the narrow no-break space used by
//! French and Russian) are represented by a plain space.
//!
//! Precedence follows POSIX: `LC_ALL`, then `LC_NUMERIC`, then `LANG`.

use std::sync::OnceLock;

use tracing::debug;

use crate::error::SeparatorError;

/// Environment variables consulted by [`Separators::from_env`], in order.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// The active decimal-point and thousands-separator characters.
///
/// Both are single ASCII characters and never equal each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Separators {
    decimal: u8,
    thousands: u8,
}

/// `(language, territory, decimal, thousands)`.
///
/// Entries with a territory must precede the language-wide entry.
const LOCALE_TABLE: &[(&str, Option<&str>, u8, u8)] = &[
    ("de", Some("CH"), b'.', b'\''),
    ("it", Some("CH"), b'.', b'\''),
    ("de", None, b',', b'.'),
    ("es", None, b',', b'.'),
    ("it", None, b',', b'.'),
    ("nl", None, b',', b'.'),
    ("pt", None, b',', b'.'),
    ("da", None, b',', b'.'),
    ("id", None, b',', b'.'),
    ("tr", None, b',', b'.'),
    ("el", None, b',', b'.'),
    ("fr", None, b',', b' '),
    ("ru", None, b',', b' '),
    ("uk", None, b',', b' '),
    ("pl", None, b',', b' '),
    ("cs", None, b',', b' '),
    ("sv", None, b',', b' '),
    ("fi", None, b',', b' '),
    ("nb", None, b',', b' '),
];

impl Separators {
    /// `.` for the decimal point, `,` for grouping.
    pub const DEFAULT: Separators = Separators {
        decimal: b'.',
        thousands: b',',
    };

    /// Build a separator pair, validating both characters.
    ///
    /// The decimal point must be ASCII punctuation other than `+`/`-`; the
    /// thousands separator may additionally be a space.
    pub fn new(decimal: char, thousands: char) -> Result<Self, SeparatorError> {
        let decimal = validate(decimal, false)?;
        let thousands = validate(thousands, true)?;
        if decimal == thousands {
            return Err(SeparatorError::Identical(char::from(decimal)));
        }
        Ok(Separators { decimal, thousands })
    }

    #[inline]
    pub const fn decimal(&self) -> char {
        self.decimal as char
    }

    #[inline]
    pub const fn thousands(&self) -> char {
        self.thousands as char
    }

    #[inline]
    pub(crate) const fn decimal_byte(&self) -> u8 {
        self.decimal
    }

    #[inline]
    pub(crate) const fn thousands_byte(&self) -> u8 {
        self.thousands
    }

    /// Separators for a POSIX locale name such as `de_DE.UTF-8@euro`.
    ///
    /// `C`, `POSIX`, English and unknown locales yield [`Separators::DEFAULT`].
    pub fn for_locale(name: &str) -> Self {
        let base = name
            .split(['.', '@'])
            .next()
            .unwrap_or_default();
        let (language, territory) = match base.split_once(['_', '-']) {
            Some((language, territory)) => (language, Some(territory)),
            None => (base, None),
        };

        LOCALE_TABLE
            .iter()
            .find(|(lang, terr, _, _)| {
                lang.eq_ignore_ascii_case(language)
                    && match terr {
                        Some(t) => territory.is_some_and(|have| t.eq_ignore_ascii_case(have)),
                        None => true,
                    }
            })
            .map_or(Self::DEFAULT, |&(_, _, decimal, thousands)| Separators {
                decimal,
                thousands,
            })
    }

    /// Separators for the locale named by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Separators for the locale named by `lookup`, which stands in for the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let found = LOCALE_ENV_VARS
            .iter()
            .find_map(|&key| lookup(key).filter(|v| !v.is_empty()).map(|v| (key, v)));

        match found {
            Some((key, locale)) => {
                let separators = Self::for_locale(&locale);
                debug!(
                    key,
                    locale = locale.as_str(),
                    decimal = %separators.decimal(),
                    thousands = %separators.thousands(),
                    "resolved separators from environment"
                );
                separators
            }
            None => Self::DEFAULT,
        }
    }

    /// Process-wide separators, resolved from the environment on first use.
    ///
    /// Later changes to the environment are not observed.
    pub fn platform() -> Self {
        static PLATFORM: OnceLock<Separators> = OnceLock::new();
        *PLATFORM.get_or_init(Self::from_env)
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn validate(c: char, allow_space: bool) -> Result<u8, SeparatorError> {
    let Ok(byte) = u8::try_from(c) else {
        return Err(SeparatorError::NonAscii(c));
    };
    if !byte.is_ascii() {
        return Err(SeparatorError::NonAscii(c));
    }
    let usable = match byte {
        b'+' | b'-' => false,
        b' ' => allow_space,
        _ => byte.is_ascii_punctuation(),
    };
    if usable {
        Ok(byte)
    } else {
        Err(SeparatorError::Reserved(c))
    }
}

/// Decimal-point character of the process locale (default `.`).
pub fn decimal_separator() -> char {
    Separators::platform().decimal()
}

/// Thousands-separator character of the process locale (default `,`).
pub fn thousands_separator() -> char {
    Separators::platform().thousands()
}
