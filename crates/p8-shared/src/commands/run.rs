//! Run command
//!
//! `run <script> [-p manager] [-w mode] [--dry-run]`, where manager and mode
//! may also be given positionally (`run test pnpm par`).

use anyhow::{bail, Context as _, Result};
use p8_project::{OptionValue, PackageManager, ParsedArguments, RunRequest, WorkspaceMode};
use tracing::info;

use crate::context::Context;
use crate::output;
use crate::shell::Shell;

const PACKAGE_MANAGER_OPTIONS: &[&str] = &["p", "pm", "package-manager"];
const WORKSPACE_OPTIONS: &[&str] = &["w", "workspace"];
const DRY_RUN_OPTIONS: &[&str] = &["dry-run"];

pub fn run(args: &ParsedArguments, ctx: &Context, shell: &dyn Shell) -> Result<()> {
    let request = request_from_args(args)?;
    let command = request
        .resolve(&ctx.fs, ctx.cwd())
        .with_context(|| format!("Cannot run script '{}'", request.script))?;

    if args.has(DRY_RUN_OPTIONS) {
        output::result(&command);
        return Ok(());
    }

    info!("Running in {}", ctx.cwd());
    output::command(&command);
    shell.exec(&command, ctx.cwd())
}

fn request_from_args(args: &ParsedArguments) -> Result<RunRequest> {
    let script = args
        .positional(0)
        .context("Missing script name. Usage: run <script> [-p manager] [-w mode]")?;

    let package_manager = option_value(args, PACKAGE_MANAGER_OPTIONS, &PackageManager::ACCEPTED)?
        .or_else(|| args.positional(1));
    let workspace_mode = option_value(args, WORKSPACE_OPTIONS, &WorkspaceMode::ACCEPTED)?
        .or_else(|| args.positional(2));

    Ok(RunRequest::from_names(script, package_manager, workspace_mode)?)
}

/// Value of the first of `names` given with one; a bare flag is an error
fn option_value<'a>(
    args: &'a ParsedArguments,
    names: &[&str],
    accepted: &[&str],
) -> Result<Option<&'a str>> {
    if let Some(value) = args.value_of(names) {
        return Ok(Some(value));
    }

    let bare = names
        .iter()
        .find(|name| args.option(name).is_some_and(OptionValue::is_flag));
    if let Some(name) = bare {
        let dashes = if name.len() == 1 { "-" } else { "--" };
        bail!(
            "Option {dashes}{name} requires a value. Accepted values: {}",
            accepted.join(", ")
        );
    }

    Ok(None)
}
