//! Float Parser
//!
//! A character-driven state machine over [`ParseState`]. The integral and
//! fractional digits feed one exact decimal significand, the exponent is
//! accumulated separately, and the three are combined once at the end with
//! a correctly rounded decimal-to-binary conversion.
//!
//! # Transitions
//!
//! | Input | Accepted in | Next state |
//! |---|---|---|
//! | decimal separator | `LeadingSpace`, `IntDigits` | `FracDigits` |
//! | `' '` | any state except `IntDigits` | unchanged |
//! | `+` / `-` | `LeadingSpace` (number), `ExpMarker` (exponent), once each | unchanged |
//! | digit | `LeadingSpace`, `IntDigits` | `IntDigits` |
//! | digit | `FracDigits` | `FracDigits` |
//! | digit | `ExpMarker`, `ExpDigits` | `ExpDigits` |
//! | `e` / `E` | `LeadingSpace`, `IntDigits`, `FracDigits` | `ExpMarker` |
//! | `f` / `F` | any state | `Suffix` |
//!
//! Everything else fails, including a `.` or `,` that is not the active
//! decimal separator.
//!
//! A literal needs at least one digit somewhere. Exponent digits count, so
//! `"e5"` is zero.
//!
//! # Exponent Clamping
//!
//! An exponent above the type's maximum base-10 exponent is clamped to it.
//! This is reported through [`ExponentUnderflow`], not as a failure; the
//! result is only rejected if it ends up non-finite.

use std::fmt::{self, Write as _};

use tracing::{debug, trace};

use crate::error::NumError;
use crate::primitive::Float;
use crate::separators::Separators;

/// Position of the scanner within a float literal.
///
/// Variants are listed in the order they appear in a well-formed literal;
/// legal moves between them are spelled out by the `on_*` methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ParseState {
    /// Nothing significant seen yet (spaces and the number sign only).
    LeadingSpace,
    IntDigits,
    FracDigits,
    /// Just after `e`/`E`, before any exponent digit.
    ExpMarker,
    ExpDigits,
    /// After the `f`/`F` type suffix.
    Suffix,
}

impl ParseState {
    /// State after a decimal separator, or `None` if one is not allowed here.
    fn on_decimal_point(self) -> Option<Self> {
        match self {
            ParseState::LeadingSpace | ParseState::IntDigits => Some(ParseState::FracDigits),
            ParseState::FracDigits
            | ParseState::ExpMarker
            | ParseState::ExpDigits
            | ParseState::Suffix => None,
        }
    }

    /// State after an exponent marker, or `None` if one is not allowed here.
    fn on_exponent_marker(self) -> Option<Self> {
        match self {
            ParseState::LeadingSpace | ParseState::IntDigits | ParseState::FracDigits => {
                Some(ParseState::ExpMarker)
            }
            ParseState::ExpMarker | ParseState::ExpDigits | ParseState::Suffix => None,
        }
    }

    /// Spaces may lead the literal or trail the fraction, exponent and
    /// suffix, but never split the integral digits.
    fn allows_space(self) -> bool {
        self != ParseState::IntDigits
    }
}

/// Direction of precision loss when the exponent was clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExponentUnderflow {
    /// The exponent was in range.
    #[default]
    None,
    /// A positive exponent was clamped; the true value is larger.
    TowardInfinity,
    /// A negative exponent was clamped; the true value is closer to zero.
    TowardZero,
}

impl ExponentUnderflow {
    /// `0` if no clamping happened, otherwise the sign of the exponent.
    pub const fn sign(self) -> i8 {
        match self {
            ExponentUnderflow::None => 0,
            ExponentUnderflow::TowardInfinity => 1,
            ExponentUnderflow::TowardZero => -1,
        }
    }

    pub const fn is_clamped(self) -> bool {
        !matches!(self, ExponentUnderflow::None)
    }
}

/// A successfully converted float and whether its exponent was clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParsedFloat<F> {
    pub value: F,
    pub exponent_underflow: ExponentUnderflow,
}

/// Significant digits kept in a `u64` significand.
///
/// Integral digits past the first 19 shift the decimal scale up; fractional
/// digits past it are dropped.
#[derive(Clone, Copy, Debug, Default)]
struct Significand {
    digits: u64,
    /// Power of ten applied to `digits`.
    scale: i64,
}

impl Significand {
    fn push(digits: u64, digit: u8) -> Option<u64> {
        digits.checked_mul(10)?.checked_add(u64::from(digit))
    }

    fn push_integral(&mut self, digit: u8) {
        match Self::push(self.digits, digit) {
            Some(digits) => self.digits = digits,
            None => self.scale += 1,
        }
    }

    fn push_fractional(&mut self, digit: u8) {
        // Once an integral digit has been dropped, the lowest kept place is
        // above the fraction.
        if self.scale > 0 {
            return;
        }
        if let Some(digits) = Self::push(self.digits, digit) {
            self.digits = digits;
            self.scale -= 1;
        }
    }
}

/// Convert `text` to a float of type `F`.
///
/// Forwards to [`parse_float_bytes`].
pub fn parse_float<F: Float>(text: &str, separators: &Separators) -> Result<ParsedFloat<F>, NumError> {
    parse_float_bytes(text.as_bytes(), separators)
}

/// Convert a byte sequence to a float of type `F`.
pub fn parse_float_bytes<F: Float>(
    bytes: &[u8],
    separators: &Separators,
) -> Result<ParsedFloat<F>, NumError> {
    let result = scan(bytes, separators.decimal_byte());
    if let Err(err) = &result {
        trace!(%err, input = %bytes.escape_ascii(), "float conversion failed");
    }
    result
}

fn scan<F: Float>(bytes: &[u8], decimal: u8) -> Result<ParsedFloat<F>, NumError> {
    if bytes.iter().all(|&b| b == b' ') {
        return Err(NumError::Empty);
    }

    let mut state = ParseState::LeadingSpace;
    let mut significand = Significand::default();
    let mut negative: Option<bool> = None;
    let mut exp_negative: Option<bool> = None;
    let mut exponent: u32 = 0;
    let mut seen_digit = false;

    for (offset, &byte) in bytes.iter().enumerate() {
        let invalid = NumError::invalid(byte, offset);
        match byte {
            _ if byte == decimal => state = state.on_decimal_point().ok_or(invalid)?,
            b'.' | b',' => return Err(invalid),
            b' ' if state.allows_space() => {}
            b'+' | b'-' => {
                let sign = match state {
                    ParseState::LeadingSpace => &mut negative,
                    ParseState::ExpMarker => &mut exp_negative,
                    _ => return Err(invalid),
                };
                if sign.is_some() {
                    return Err(invalid);
                }
                *sign = Some(byte == b'-');
            }
            b'0'..=b'9' => {
                let digit = byte - b'0';
                seen_digit = true;
                match state {
                    ParseState::LeadingSpace | ParseState::IntDigits => {
                        significand.push_integral(digit);
                        state = ParseState::IntDigits;
                    }
                    ParseState::FracDigits => significand.push_fractional(digit),
                    ParseState::ExpMarker | ParseState::ExpDigits => {
                        exponent = exponent.saturating_mul(10).saturating_add(u32::from(digit));
                        state = ParseState::ExpDigits;
                    }
                    ParseState::Suffix => return Err(invalid),
                }
            }
            b'e' | b'E' => state = state.on_exponent_marker().ok_or(invalid)?,
            b'f' | b'F' => state = ParseState::Suffix,
            _ => return Err(invalid),
        }
    }

    if !seen_digit {
        return Err(NumError::NoDigits);
    }

    let exp_negative = exp_negative.unwrap_or(false);
    let mut exponent_underflow = ExponentUnderflow::None;
    if exponent > F::MAX_EXP10 {
        exponent_underflow = if exp_negative {
            ExponentUnderflow::TowardZero
        } else {
            ExponentUnderflow::TowardInfinity
        };
        debug!(
            exponent,
            clamped = F::MAX_EXP10,
            ?exponent_underflow,
            "float exponent out of range"
        );
        exponent = F::MAX_EXP10;
    }

    let exponent = i64::from(exponent);
    let exp10 = significand.scale + if exp_negative { -exponent } else { exponent };
    let magnitude: F = compose(significand.digits, exp10).ok_or(NumError::NonFinite)?;
    let value = if negative.unwrap_or(false) {
        -magnitude
    } else {
        magnitude
    };

    if !value.is_finite() {
        return Err(NumError::NonFinite);
    }
    Ok(ParsedFloat {
        value,
        exponent_underflow,
    })
}

/// Fixed-capacity ASCII buffer for the canonical `<digits>e<exp>` form.
///
/// 20 digits for a `u64`, the marker, and 20 characters for an `i64`.
struct CanonicalBuf {
    bytes: [u8; 48],
    len: usize,
}

impl fmt::Write for CanonicalBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        let dst = self.bytes.get_mut(self.len..end).ok_or(fmt::Error)?;
        dst.copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// `digits * 10^exp10`, rounded to nearest.
fn compose<F: Float>(digits: u64, exp10: i64) -> Option<F> {
    if digits == 0 {
        return Some(F::ZERO);
    }
    let mut buf = CanonicalBuf {
        bytes: [0; 48],
        len: 0,
    };
    write!(buf, "{digits}e{exp10}").ok()?;
    std::str::from_utf8(&buf.bytes[..buf.len]).ok()?.parse().ok()
}
