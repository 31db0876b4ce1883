//! Terminal output utilities
//!
//! Status lines go to stderr; stdout carries only command results so they can
//! be captured by a shell (`cd "$(p8-shared root)"`).

use camino::Utf8Path;
use console::{style, StyledObject};

fn status(icon: StyledObject<&str>, msg: &str) {
    eprintln!("{icon} {msg}");
}

/// Print a success message
pub fn success(msg: &str) {
    status(style("✓").green().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    status(style("⚠").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    status(style("ℹ").blue().bold(), msg);
}

/// Report a file written into the project
pub fn created(path: &Utf8Path) {
    status(style("+").green().bold(), &style(path).bold().to_string());
}

/// Echo a shell command about to be executed
pub fn command(cmd: &str) {
    eprintln!("{} {}", style("$").dim(), style(cmd).cyan());
}

/// Print a command the user is expected to run themselves
///
/// The hint goes to stderr and the bare command to stdout, so it can be piped.
pub fn suggest_command(hint: &str, cmd: &str) {
    info(hint);
    result(cmd);
}

/// Print a failed command with its chain of causes
pub fn failure(err: &anyhow::Error) {
    status(style("✗").red().bold(), &err.to_string());
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", style("caused by:").dim(), cause);
    }
}

/// Print an error message
pub fn error(msg: &str) {
    status(style("✗").red().bold(), msg);
}

/// Print a command result on stdout
pub fn result(value: &str) {
    println!("{value}");
}

