//! Boilerplate configuration files bundled into the binary.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use std::fmt;
use tracing::debug;

/// Embedded lint, format and commit-hook configuration files
#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Git hooks configuration, shared by both module flavors
pub const LEFTHOOK_CONFIG: &str = "lefthook.yml";

/// JavaScript module system of the target project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleFlavor {
    /// CommonJS (`require` / `module.exports`)
    Cjs,
    /// ES modules (`"type": "module"`)
    Mjs,
}

impl ModuleFlavor {
    /// File extension used for config files of this flavor
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Cjs => "cjs",
            Self::Mjs => "mjs",
        }
    }

    /// Config file name for a tool, e.g. `eslint.config.mjs`
    pub fn config_file(&self, tool: &str) -> String {
        format!("{tool}.config.{}", self.extension())
    }
}

impl fmt::Display for ModuleFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Names of all bundled assets
pub fn asset_names() -> Vec<String> {
    let mut names: Vec<String> = Assets::iter().map(|name| name.into_owned()).collect();
    names.sort();
    names
}

/// Contents of a bundled asset
pub fn asset_contents(name: &str) -> Result<Vec<u8>> {
    Assets::get(name)
        .map(|file| file.data.into_owned())
        .ok_or_else(|| Error::asset_not_found(name))
}

/// Write the named asset into `dest_dir`, overwriting any existing file
pub fn copy_asset(name: &str, dest_dir: &Utf8Path) -> Result<Utf8PathBuf> {
    let contents = asset_contents(name)?;
    let dest = dest_dir.join(name);

    std::fs::write(&dest, contents)?;
    debug!("Wrote {}", dest);

    Ok(dest)
}
