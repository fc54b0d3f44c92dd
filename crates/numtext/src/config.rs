//! Separator configuration for the CLI.
//!
//! Resolution order, highest first:
//!
//! 1. Command-line flags (`--decimal=`, `--thousands=`, `--locale=`)
//! 2. `NUMTEXT_DECIMAL`, `NUMTEXT_THOUSANDS`, `NUMTEXT_LOCALE`
//! 3. The POSIX locale variables (`LC_ALL`, `LC_NUMERIC`, `LANG`)
//! 4. `.` and `,`
//!
//! An explicit locale (flag or `NUMTEXT_LOCALE`) replaces step 3. Single
//! separator overrides are applied on top of whichever locale wins, and the
//! final pair is validated as a whole.
//!
//! Everything here reads the environment through an injected lookup so it
//! can be exercised without touching the process environment.

use numtext_core::{SeparatorError, Separators};
use thiserror::Error;
use tracing::debug;

pub const DECIMAL_VAR: &str = "NUMTEXT_DECIMAL";
pub const THOUSANDS_VAR: &str = "NUMTEXT_THOUSANDS";
pub const LOCALE_VAR: &str = "NUMTEXT_LOCALE";

/// A configuration or usage problem. Reported with exit status 2.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{origin} expects a single character, got {value:?}")]
    NotAChar { origin: String, value: String },
    #[error("invalid separators: {0}")]
    Separators(#[from] SeparatorError),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("invalid value for {option}: {value:?}")]
    InvalidValue { option: &'static str, value: String },
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// Separator settings gathered from one source.
///
/// Fields left as `None` defer to lower-priority sources.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeparatorOverrides {
    pub locale: Option<String>,
    pub decimal: Option<char>,
    pub thousands: Option<char>,
}

impl SeparatorOverrides {
    /// Read the `NUMTEXT_*` variables through `lookup`. Empty values are
    /// treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Ok(SeparatorOverrides {
            locale: get(LOCALE_VAR),
            decimal: get(DECIMAL_VAR)
                .map(|v| single_char(DECIMAL_VAR, &v))
                .transpose()?,
            thousands: get(THOUSANDS_VAR)
                .map(|v| single_char(THOUSANDS_VAR, &v))
                .transpose()?,
        })
    }

    /// Overlay `other` onto `self`; fields set in `other` win.
    pub fn merge(&mut self, other: &SeparatorOverrides) {
        if other.locale.is_some() {
            self.locale.clone_from(&other.locale);
        }
        if other.decimal.is_some() {
            self.decimal = other.decimal;
        }
        if other.thousands.is_some() {
            self.thousands = other.thousands;
        }
    }
}

/// Interpret `value` as exactly one character.
pub(crate) fn single_char(origin: &str, value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::NotAChar {
            origin: origin.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Resolve the active separators from command-line `flags` and the
/// environment seen through `lookup`.
pub fn resolve_separators(
    flags: &SeparatorOverrides,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Separators, ConfigError> {
    let mut overrides = SeparatorOverrides::from_lookup(&lookup)?;
    overrides.merge(flags);

    let base = match &overrides.locale {
        Some(locale) => Separators::for_locale(locale),
        None => Separators::from_lookup(&lookup),
    };
    if overrides.decimal.is_none() && overrides.thousands.is_none() {
        return Ok(base);
    }

    let separators = Separators::new(
        overrides.decimal.unwrap_or(base.decimal()),
        overrides.thousands.unwrap_or(base.thousands()),
    )?;
    debug!(?overrides, ?separators, "applied separator overrides");
    Ok(separators)
}
