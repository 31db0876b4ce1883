//! Directory name command

use anyhow::{anyhow, Result};
use camino::Utf8Path;
use p8_project::ParsedArguments;
use std::path::MAIN_SEPARATOR;
use tracing::warn;

use crate::context::Context;
use crate::output;

pub fn run(args: &ParsedArguments, ctx: &Context) -> Result<()> {
    let levels = levels_up(args.positional(0));
    output::result(&dir_name(ctx.cwd(), levels)?);
    Ok(())
}

/// Name of the path component `levels` steps above the last one
///
/// Level 0 is the directory itself. Stepping onto the root of an absolute
/// path yields an empty name.
pub fn dir_name(cwd: &Utf8Path, levels: usize) -> Result<String> {
    cwd.as_str()
        .split(MAIN_SEPARATOR)
        .rev()
        .nth(levels)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Cannot go {levels} levels up from {cwd}"))
}

/// Leading decimal digits of `arg`; anything else means 0
fn levels_up(arg: Option<&str>) -> usize {
    let Some(arg) = arg else {
        return 0;
    };

    let digits: String = arg.trim().chars().take_while(char::is_ascii_digit).collect();
    match digits.parse() {
        Ok(levels) => levels,
        Err(_) => {
            warn!("Ignoring levelsUp '{}', using 0", arg);
            0
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_dir_name_levels() {
        let cwd = Utf8Path::new("/home/user/project");
        assert_eq!(dir_name(cwd, 0).unwrap(), "project");
        assert_eq!(dir_name(cwd, 1).unwrap(), "user");
        assert_eq!(dir_name(cwd, 2).unwrap(), "home");
        assert_eq!(dir_name(cwd, 3).unwrap(), "");
        assert!(dir_name(cwd, 4).is_err());
    }

    #[test]
    fn test_levels_up_parsing() {
        assert_eq!(levels_up(None), 0);
        assert_eq!(levels_up(Some("0")), 0);
        assert_eq!(levels_up(Some("1")), 1);
        assert_eq!(levels_up(Some("2nd")), 2);
        assert_eq!(levels_up(Some("up")), 0);
    }

    #[test]
    fn test_run_defaults_to_current_dir() {
        let ctx = Context::new("/home/user/project", true);
        let args = p8_project::parse(&["dirn"]);
        run(&args, &ctx).unwrap();

        let args = p8_project::parse(&["dirn", "9"]);
        assert!(run(&args, &ctx).is_err());
    }
}
