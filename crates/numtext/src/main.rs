//! numtext CLI
//!
//! Converts numeric text the way the core library does and reports the
//! result. Exit status: 0 converted, 1 conversion failed, 2 usage error.

use std::process::ExitCode;

use numtext::commands::{execute, parse_args, usage};
use numtext::config::resolve_separators;
use numtext::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{}", usage());
            return ExitCode::from(2);
        }
    };

    let separators = match resolve_separators(&invocation.overrides, |key| {
        std::env::var(key).ok()
    }) {
        Ok(separators) => separators,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    let report = execute(&invocation.command, &separators);
    if let Some(warning) = &report.warning {
        eprintln!("{warning}");
    }
    if report.ok {
        println!("{}", report.output);
        ExitCode::SUCCESS
    } else {
        eprintln!("{}", report.output);
        ExitCode::from(1)
    }
}
