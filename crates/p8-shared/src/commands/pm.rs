//! Package manager command

use p8_project::detect_package_manager;

use crate::context::Context;
use crate::output;

pub fn run(ctx: &Context) {
    let pm = detect_package_manager(&ctx.fs, ctx.cwd());
    output::result(pm.as_str());
}
