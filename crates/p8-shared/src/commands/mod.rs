//! CLI command implementations

pub mod dirn;
pub mod init;
pub mod pm;
pub mod root;
pub mod run;
pub mod ws;

use anyhow::Result;
use p8_project::ParsedArguments;
use std::process::ExitCode;

use crate::context::Context;
use crate::output;
use crate::prompt::prompter;
use crate::shell::SystemShell;

/// Command reference shown for `--help` and for unknown commands
pub const USAGE: &str = "\
Usage: p8-shared [FLAGS] <command> [args]

Commands:
  init [cleanup]
      Add eslint, prettier and (optionally) commitlint/lefthook configs to the
      project in the current directory. With `cleanup`, move the eslintConfig,
      prettier and commitlint sections of package.json to p8-package-backup.json.
  dirn [levelsUp]
      Print the name of the current directory, or of the directory levelsUp
      levels above it.
  run <script> [-p|--pm npm|yarn|pnpm|auto] [-w|--workspace none|seq|par|auto] [--dry-run]
      Run a package script with the detected (or given) package manager,
      across workspace packages when the project is a workspace.
  root
      Print the project root (the outermost directory with a package.json).
  pm
      Print the detected package manager.
  ws
      Print whether the project is a workspace (true/false).";

/// Route a tokenized command line to its command
pub fn dispatch(args: &ParsedArguments, ctx: &Context) -> Result<ExitCode> {
    match args.command.as_str() {
        "init" => init::run(args, ctx, prompter(ctx.assume_yes).as_ref(), &SystemShell)?,
        "dirn" => dirn::run(args, ctx)?,
        "run" => run::run(args, ctx, &SystemShell)?,
        "root" => root::run(ctx),
        "pm" => pm::run(ctx),
        "ws" => ws::run(ctx),
        "" => {
            eprintln!("{USAGE}");
            return Ok(ExitCode::FAILURE);
        }
        unknown => {
            output::error(&format!("Unknown command: {unknown}"));
            eprintln!("\n{USAGE}");
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
