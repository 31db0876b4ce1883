//! Root command

use p8_project::find_project_root;

use crate::context::Context;
use crate::output;

/// Print the outermost directory holding a package.json
pub fn run(ctx: &Context) {
    let root = find_project_root(&ctx.fs, ctx.cwd());
    output::result(root.as_str());
}
