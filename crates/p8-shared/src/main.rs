//! p8-shared CLI - shared project configuration for JS/TS repositories
//!
//! This is the main entry point for the p8-shared command-line interface.

mod cli;
mod commands;
mod context;
mod output;
mod prompt;
mod shell;
#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;
use context::Context;

/// Environment variable overriding the log filter
const LOG_ENV: &str = "P8_SHARED_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            output::failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let ctx = Context::from_cli(cli)?;
    let args = p8_project::parse(&cli.args);

    commands::dispatch(&args, &ctx)
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            match verbose {
                // Stdout of root/pm/ws is captured by scripts; keep logs quiet by default
                0 => EnvFilter::new("warn"),
                1 => EnvFilter::new("info"),
                2 => EnvFilter::new("debug"),
                _ => EnvFilter::new("trace"),
            }
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
