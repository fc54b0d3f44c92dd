//! Integer Parser
//!
//! Accumulates digits directly into the caller's destination type, so the
//! width and signedness limits are those of that type.
//!
//! # Accepted Forms
//!
//! - Leading spaces (only `' '`), then an optional `+`/`-`.
//! - With [`Base::Auto`]: `0x`/`0X` selects hexadecimal, any other leading
//!   `0` selects octal, otherwise decimal.
//! - Type suffix letters `u U l L` end the digits; they may repeat
//!   (`10ul`, `10ULL`) but nothing else may follow them.
//! - In decimal only, the thousands separator and spaces between digits are
//!   skipped without checking their position: `1,,2` and `1 2` both read
//!   as `12`.
//!
//! # Sign
//!
//! The sign is applied only to decimal text parsed into a signed type.
//! Octal and hexadecimal text, and every unsigned destination, keep the
//! magnitude: `-0x1F` is `31` and `-123` into `u32` is `123`.
//!
//! Because the accumulator is the destination type itself, the magnitude
//! of `MIN` is never reachable: `-128` into `i8` overflows.

use tracing::trace;

use crate::error::NumError;
use crate::primitive::Integer;
use crate::separators::Separators;

/// Numeric base for integer conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Base {
    /// Detect from the prefix: `0x` hexadecimal, `0` octal, else decimal.
    #[default]
    Auto,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    /// The explicit radix, or `None` for [`Base::Auto`].
    pub const fn radix(self) -> Option<u8> {
        match self {
            Base::Auto => None,
            Base::Octal => Some(8),
            Base::Decimal => Some(10),
            Base::Hexadecimal => Some(16),
        }
    }

    /// The base for an explicit radix. Only 8, 10 and 16 are supported.
    pub const fn from_radix(radix: u32) -> Option<Self> {
        match radix {
            8 => Some(Base::Octal),
            10 => Some(Base::Decimal),
            16 => Some(Base::Hexadecimal),
            _ => None,
        }
    }
}

/// Convert `text` to an integer of type `I`.
///
/// Forwards to [`parse_int_bytes`].
pub fn parse_int<I: Integer>(text: &str, base: Base, separators: &Separators) -> Result<I, NumError> {
    parse_int_bytes(text.as_bytes(), base, separators)
}

/// Convert a byte sequence to an integer of type `I`.
pub fn parse_int_bytes<I: Integer>(
    bytes: &[u8],
    base: Base,
    separators: &Separators,
) -> Result<I, NumError> {
    let result = scan(bytes, base, separators.thousands_byte());
    if let Err(err) = &result {
        trace!(%err, input = %bytes.escape_ascii(), ?base, "integer conversion failed");
    }
    result
}

fn scan<I: Integer>(bytes: &[u8], base: Base, thousands: u8) -> Result<I, NumError> {
    let mut pos = bytes.iter().take_while(|&&b| b == b' ').count();
    if pos == bytes.len() {
        return Err(NumError::Empty);
    }

    let negative = match bytes[pos] {
        b'-' => {
            pos += 1;
            true
        }
        b'+' => {
            pos += 1;
            false
        }
        _ => false,
    };
    if pos == bytes.len() {
        return Err(NumError::NoDigits);
    }

    // Resolve the radix from the prefix. A run of leading zeros counts as
    // digits, so `0`, `-00` and `0u` all succeed with zero.
    let mut seen_digit = false;
    let radix = if bytes[pos] == b'0' {
        pos += bytes[pos..].iter().take_while(|&&b| b == b'0').count();
        match bytes.get(pos) {
            None => return Ok(I::ZERO),
            Some(b'x' | b'X') if matches!(base, Base::Auto | Base::Hexadecimal) => {
                pos += 1;
                if pos == bytes.len() {
                    return Err(NumError::NoDigits);
                }
                16
            }
            Some(_) => {
                seen_digit = true;
                base.radix().unwrap_or(8)
            }
        }
    } else {
        base.radix().unwrap_or(10)
    };

    let mut value = I::ZERO;
    let mut suffix = false;
    for (offset, &byte) in bytes.iter().enumerate().skip(pos) {
        let digit = match byte {
            b'0'..=b'7' => byte - b'0',
            b'8' | b'9' if radix != 8 => byte - b'0',
            b'a'..=b'f' if radix == 16 => byte - b'a' + 10,
            b'A'..=b'F' if radix == 16 => byte - b'A' + 10,
            b'u' | b'U' | b'l' | b'L' => {
                suffix = true;
                continue;
            }
            b' ' if radix == 10 && !suffix => continue,
            _ if byte == thousands && radix == 10 && !suffix => continue,
            _ => return Err(NumError::invalid(byte, offset)),
        };
        if suffix {
            return Err(NumError::invalid(byte, offset));
        }

        // Check before the multiply; never rely on wraparound.
        if value > I::max_div(radix) {
            return Err(NumError::Overflow);
        }
        value = value
            .checked_mul_add(radix, digit)
            .ok_or(NumError::Overflow)?;
        seen_digit = true;
    }

    if !seen_digit {
        return Err(NumError::NoDigits);
    }

    if negative && radix == 10 && I::SIGNED {
        value = value.negate();
    }
    Ok(value)
}

#[cfg(test)]
mod tests;
