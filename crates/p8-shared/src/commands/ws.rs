//! Workspace command

use p8_project::detect_workspace;

use crate::context::Context;
use crate::output;

/// Print `true` when the project root declares a workspace
pub fn run(ctx: &Context) {
    let is_workspace = detect_workspace(&ctx.fs, ctx.cwd());
    output::result(&is_workspace.to_string());
}
