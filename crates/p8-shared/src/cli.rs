//! Binary-level flags parsed with clap
//!
//! clap owns only the flags that configure the process (verbosity, working
//! directory, prompting). Everything from the command word onward is passed
//! through untouched and tokenized by [`p8_project::args::parse`].

use camino::Utf8PathBuf;
use clap::Parser;

/// p8-shared - shared lint, format and commit-hook setup for JS/TS projects
#[derive(Parser, Debug)]
#[command(name = "p8-shared")]
#[command(author, version, about, long_about = None)]
#[command(after_help = crate::commands::USAGE)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory to act on (default: current directory)
    #[arg(short = 'C', long, env = "P8_SHARED_CWD")]
    pub cwd: Option<Utf8PathBuf>,

    /// Answer every question with its default
    #[arg(short, long, env = "P8_SHARED_YES")]
    pub yes: bool,

    /// Command and its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub args: Vec<String>,
}
