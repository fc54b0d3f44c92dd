//! Command parsing and execution for the `numtext` CLI.
//!
//! Argument parsing produces an [`Invocation`]; execution turns a
//! [`Command`] plus the resolved separators into a [`Report`]. Neither step
//! performs I/O, so `main` owns printing and exit codes.

use numtext_core::{parse_float, parse_int, Base, Float, Integer, NumError, Separators};
use tracing::debug;

use crate::config::{single_char, ConfigError, SeparatorOverrides};

/// Integer destination selected with `--type=`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntWidth {
    I8,
    I16,
    #[default]
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
}

impl IntWidth {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "i8" => IntWidth::I8,
            "i16" => IntWidth::I16,
            "i32" => IntWidth::I32,
            "i64" => IntWidth::I64,
            "i128" => IntWidth::I128,
            "u8" => IntWidth::U8,
            "u16" => IntWidth::U16,
            "u32" => IntWidth::U32,
            "u64" => IntWidth::U64,
            "u128" => IntWidth::U128,
            _ => return None,
        })
    }
}

/// Float destination selected with `--type=`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FloatWidth {
    F32,
    #[default]
    F64,
}

impl FloatWidth {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "f32" => Some(FloatWidth::F32),
            "f64" => Some(FloatWidth::F64),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Int {
        text: String,
        base: Base,
        width: IntWidth,
    },
    Float {
        text: String,
        width: FloatWidth,
    },
    Separators,
    Help,
}

/// A parsed command line: what to run and the separator flags given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub overrides: SeparatorOverrides,
}

/// Outcome of running a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// Whether the conversion succeeded.
    pub ok: bool,
    /// Line for stdout on success, or for stderr on failure.
    pub output: String,
    /// Non-fatal notice for stderr (exponent clamping).
    pub warning: Option<String>,
}

impl Report {
    fn success(output: String) -> Self {
        Report {
            ok: true,
            output,
            warning: None,
        }
    }

    fn failure(text: &str, err: NumError) -> Self {
        Report {
            ok: false,
            output: format!("error: invalid numeric literal {text:?}: {err}"),
            warning: None,
        }
    }
}

/// Parse the arguments following the program name.
pub fn parse_args(args: &[String]) -> Result<Invocation, ConfigError> {
    let Some((name, rest)) = args.split_first() else {
        return Ok(Invocation {
            command: Command::Help,
            overrides: SeparatorOverrides::default(),
        });
    };

    let mut overrides = SeparatorOverrides::default();
    let mut positional: Vec<&str> = Vec::new();
    let mut base = Base::Auto;
    let mut type_name: Option<&str> = None;

    for arg in rest {
        if let Some(value) = arg.strip_prefix("--decimal=") {
            overrides.decimal = Some(single_char("--decimal", value)?);
        } else if let Some(value) = arg.strip_prefix("--thousands=") {
            overrides.thousands = Some(single_char("--thousands", value)?);
        } else if let Some(value) = arg.strip_prefix("--locale=") {
            overrides.locale = Some(value.to_string());
        } else if let Some(value) = arg.strip_prefix("--base=") {
            base = parse_base(value)?;
        } else if let Some(value) = arg.strip_prefix("--type=") {
            type_name = Some(value);
        } else if arg.starts_with("--") {
            return Err(ConfigError::UnknownOption(arg.clone()));
        } else {
            positional.push(arg);
        }
    }

    let command = match name.as_str() {
        "int" => Command::Int {
            text: single_positional(&positional)?,
            base,
            width: match type_name {
                Some(t) => IntWidth::from_name(t).ok_or_else(|| ConfigError::InvalidValue {
                    option: "--type",
                    value: t.to_string(),
                })?,
                None => IntWidth::default(),
            },
        },
        "float" => Command::Float {
            text: single_positional(&positional)?,
            width: match type_name {
                Some(t) => FloatWidth::from_name(t).ok_or_else(|| ConfigError::InvalidValue {
                    option: "--type",
                    value: t.to_string(),
                })?,
                None => FloatWidth::default(),
            },
        },
        "separators" => {
            no_positional(&positional)?;
            Command::Separators
        }
        "help" | "--help" | "-h" => Command::Help,
        other => return Err(ConfigError::UnexpectedArgument(other.to_string())),
    };

    Ok(Invocation { command, overrides })
}

fn parse_base(value: &str) -> Result<Base, ConfigError> {
    if value == "auto" {
        return Ok(Base::Auto);
    }
    value
        .parse::<u32>()
        .ok()
        .and_then(Base::from_radix)
        .ok_or_else(|| ConfigError::InvalidValue {
            option: "--base",
            value: value.to_string(),
        })
}

fn single_positional(positional: &[&str]) -> Result<String, ConfigError> {
    match positional {
        [text] => Ok((*text).to_string()),
        [] => Err(ConfigError::Missing("numeric text")),
        [_, extra, ..] => Err(ConfigError::UnexpectedArgument((*extra).to_string())),
    }
}

fn no_positional(positional: &[&str]) -> Result<(), ConfigError> {
    match positional.first() {
        Some(extra) => Err(ConfigError::UnexpectedArgument((*extra).to_string())),
        None => Ok(()),
    }
}

/// Run `command` against `separators`.
pub fn execute(command: &Command, separators: &Separators) -> Report {
    debug!(?command, ?separators, "executing command");
    match command {
        Command::Int { text, base, width } => {
            let result = match width {
                IntWidth::I8 => convert_int::<i8>(text, *base, separators),
                IntWidth::I16 => convert_int::<i16>(text, *base, separators),
                IntWidth::I32 => convert_int::<i32>(text, *base, separators),
                IntWidth::I64 => convert_int::<i64>(text, *base, separators),
                IntWidth::I128 => convert_int::<i128>(text, *base, separators),
                IntWidth::U8 => convert_int::<u8>(text, *base, separators),
                IntWidth::U16 => convert_int::<u16>(text, *base, separators),
                IntWidth::U32 => convert_int::<u32>(text, *base, separators),
                IntWidth::U64 => convert_int::<u64>(text, *base, separators),
                IntWidth::U128 => convert_int::<u128>(text, *base, separators),
            };
            match result {
                Ok(value) => Report::success(value),
                Err(err) => Report::failure(text, err),
            }
        }
        Command::Float { text, width } => {
            let result = match width {
                FloatWidth::F32 => convert_float::<f32>(text, separators),
                FloatWidth::F64 => convert_float::<f64>(text, separators),
            };
            match result {
                Ok(report) => report,
                Err(err) => Report::failure(text, err),
            }
        }
        Command::Separators => Report::success(format!(
            "decimal: {:?}\nthousands: {:?}",
            separators.decimal(),
            separators.thousands()
        )),
        Command::Help => Report::success(usage().to_string()),
    }
}

fn convert_int<I: Integer>(text: &str, base: Base, separators: &Separators) -> Result<String, NumError> {
    parse_int::<I>(text, base, separators).map(|value| value.to_string())
}

fn convert_float<F: Float>(text: &str, separators: &Separators) -> Result<Report, NumError> {
    let parsed = parse_float::<F>(text, separators)?;
    let mut report = Report::success(parsed.value.to_string());
    if parsed.exponent_underflow.is_clamped() {
        let direction = if parsed.exponent_underflow.sign() > 0 {
            "toward infinity"
        } else {
            "toward zero"
        };
        report.warning = Some(format!(
            "warning: exponent out of range, clamped with precision lost {direction}"
        ));
    }
    Ok(report)
}

pub fn usage() -> &'static str {
    "\
Usage: numtext <command> [options]

Commands:
  int <text>          Convert text to an integer
  float <text>        Convert text to a floating-point number
  separators          Show the active decimal and thousands separators
  help                Show this message

Options:
  --base=<b>          Integer base: auto, 8, 10, 16 (default: auto)
  --type=<t>          int: i8..i128, u8..u128 (default: i32)
                      float: f32, f64 (default: f64)
  --decimal=<c>       Decimal separator override
  --thousands=<c>     Thousands separator override
  --locale=<name>     Locale to take separators from (e.g. de_DE.UTF-8)

Environment:
  NUMTEXT_DECIMAL, NUMTEXT_THOUSANDS, NUMTEXT_LOCALE
  LC_ALL, LC_NUMERIC, LANG
  RUST_LOG            Enable tracing output (e.g. RUST_LOG=numtext_core=trace)"
}
