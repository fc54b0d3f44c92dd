//! Conversion error types.
//!
//! A failed conversion never yields a partial value: callers get one of
//! these causes instead and are expected to surface it as a recoverable
//! "invalid numeric literal" at their own grammar layer.

use thiserror::Error;

/// Why a numeric conversion failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum NumError {
    /// Input was empty or held nothing but spaces.
    #[error("empty numeric literal")]
    Empty,
    /// A sign, prefix, or separators were present but no digit.
    #[error("numeric literal contains no digits")]
    NoDigits,
    /// A character that is invalid in its position (or for the active base).
    #[error("invalid character '{}' at offset {offset}", .byte.escape_ascii())]
    InvalidChar { byte: u8, offset: usize },
    /// Integer accumulation would leave the destination type's range.
    #[error("integer literal does not fit in the destination type")]
    Overflow,
    /// The float result is infinite or not a number.
    #[error("floating-point literal is not finite")]
    NonFinite,
}

impl NumError {
    #[inline]
    pub(crate) const fn invalid(byte: u8, offset: usize) -> Self {
        NumError::InvalidChar { byte, offset }
    }
}

/// Why a separator pair was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum SeparatorError {
    /// Separators must be single ASCII characters.
    #[error("separator '{0}' is not an ASCII character")]
    NonAscii(char),
    /// Digits, letters, signs and control characters carry meaning in
    /// numeric text and cannot act as separators.
    #[error("'{}' cannot be used as a separator", .0.escape_default())]
    Reserved(char),
    /// The decimal point and thousands separator must differ.
    #[error("decimal and thousands separators are both '{0}'")]
    Identical(char),
}
