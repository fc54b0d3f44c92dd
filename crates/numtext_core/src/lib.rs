//! Locale-aware conversion of numeric text to native integers and floats.
//!
//! Two hand-written parsers share one small collaborator:
//!
//! - [`parse_int`]: accumulator-based, with base auto-detection (`0x` hex,
//!   `0` octal), type-suffix tolerance, and overflow detected before it can
//!   happen.
//! - [`parse_float`]: a state machine with decimal-separator awareness and
//!   exponent clamping reported through [`ExponentUnderflow`].
//! - [`Separators`]: the decimal-point and thousands-separator characters,
//!   passed into both parsers explicitly.
//!
//! Callers are expected to isolate the numeric substring first; nothing here
//! knows about surrounding JSON or template syntax.
//!
//! ```
//! use numtext_core::{parse_float, parse_int, Base, Separators};
//!
//! let seps = Separators::default();
//! assert_eq!(parse_int::<i32>("0x1F", Base::Auto, &seps), Ok(31));
//! assert_eq!(parse_int::<i32>("-1,024", Base::Auto, &seps), Ok(-1024));
//!
//! let parsed = parse_float::<f64>("1.5e3", &seps).map(|p| p.value);
//! assert_eq!(parsed, Ok(1500.0));
//! ```
//!
//! All conversions are pure: identical input and separators always produce
//! identical results, and calls may run concurrently without coordination.

mod error;
mod float;
mod integer;
mod primitive;
mod separators;

pub use error::{NumError, SeparatorError};
pub use float::{parse_float, parse_float_bytes, ExponentUnderflow, ParsedFloat};
pub use integer::{parse_int, parse_int_bytes, Base};
pub use primitive::{Float, Integer};
pub use separators::{decimal_separator, thousands_separator, Separators, LOCALE_ENV_VARS};
