//! Per-invocation settings resolved once at startup

use anyhow::{Context as _, Result};
use camino::{Utf8Path, Utf8PathBuf};
use p8_project::OsFileSystem;

use crate::cli::Cli;

/// Settings every command runs against
#[derive(Debug, Clone)]
pub struct Context {
    /// Absolute directory the command acts on
    pub cwd: Utf8PathBuf,
    /// Answer prompts with their defaults
    pub assume_yes: bool,
    /// Filesystem used for detection
    pub fs: OsFileSystem,
}

impl Context {
    pub fn new(cwd: impl Into<Utf8PathBuf>, assume_yes: bool) -> Self {
        Self {
            cwd: cwd.into(),
            assume_yes,
            fs: OsFileSystem,
        }
    }

    /// Build from parsed flags, falling back to the process working directory
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = match &cli.cwd {
            Some(dir) => absolute(dir)?,
            None => {
                let dir = std::env::current_dir().context("Failed to read current directory")?;
                Utf8PathBuf::try_from(dir).context("Current directory is not valid UTF-8")?
            }
        };

        Ok(Self::new(cwd, cli.yes))
    }

    pub fn cwd(&self) -> &Utf8Path {
        &self.cwd
    }
}

fn absolute(dir: &Utf8Path) -> Result<Utf8PathBuf> {
    let path = std::path::absolute(dir).with_context(|| format!("Invalid directory: {dir}"))?;
    Utf8PathBuf::try_from(path).context("Directory is not valid UTF-8")
}
