//! Core types for package managers and workspace modes

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Project manifest file name
pub const MANIFEST_FILE: &str = "package.json";

/// pnpm workspace manifest file name
pub const PNPM_WORKSPACE_FILE: &str = "pnpm-workspace.yaml";

/// Value accepted wherever a manager or mode can be detected instead of given
pub const AUTO: &str = "auto";

/// JavaScript package manager owning a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// All supported package managers
    pub const ALL: [Self; 3] = [Self::Npm, Self::Yarn, Self::Pnpm];

    /// Names accepted by [`FromStr`], plus `auto`
    pub const ACCEPTED: [&'static str; 4] = ["npm", "yarn", "pnpm", AUTO];

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// Lockfile written by this manager
    pub fn lockfile(&self) -> &'static str {
        match self {
            Self::Npm => "package-lock.json",
            Self::Yarn => "yarn.lock",
            Self::Pnpm => "pnpm-lock.yaml",
        }
    }

    /// Workspace modes this manager has a command for
    pub fn supported_modes(&self) -> &'static [WorkspaceMode] {
        match self {
            Self::Npm => &[WorkspaceMode::None, WorkspaceMode::Seq],
            Self::Yarn | Self::Pnpm => &WorkspaceMode::ALL,
        }
    }

    /// Script that wipes installed modules and lockfiles, then reinstalls
    pub fn reset_script(&self) -> String {
        format!(
            "rm -rf ./**/node_modules && rm -rf ./**/{} && {} install",
            self.lockfile(),
            self.as_str()
        )
    }

    /// Script that audits installed dependencies
    pub fn audit_script(&self) -> &'static str {
        match self {
            Self::Npm => "npm audit --audit-level=moderate",
            Self::Yarn => "yarn npm audit",
            Self::Pnpm => "pnpm audit",
        }
    }

    /// Command installing the commit-hook dev dependencies
    pub fn hook_install_command(&self) -> &'static str {
        match self {
            Self::Npm => {
                "npm install --save-dev @commitlint/{config-conventional,cli} commitlint lefthook"
            }
            Self::Yarn => {
                "yarn add -D @commitlint/config-conventional @commitlint/cli commitlint lefthook"
            }
            Self::Pnpm => {
                "pnpm install -D @commitlint/{config-conventional,cli} commitlint lefthook"
            }
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|pm| pm.as_str() == s)
            .ok_or_else(|| Error::unknown_package_manager(s, &Self::ACCEPTED))
    }
}

/// How a script is run across workspace packages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkspaceMode {
    /// Run in the current package only
    None,
    /// Run in every workspace package, one at a time
    Seq,
    /// Run in every workspace package in parallel
    Par,
}

impl WorkspaceMode {
    /// All workspace modes
    pub const ALL: [Self; 3] = [Self::None, Self::Seq, Self::Par];

    /// Names accepted by [`FromStr`], plus `auto`
    pub const ACCEPTED: [&'static str; 4] = ["none", "seq", "par", AUTO];

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Seq => "seq",
            Self::Par => "par",
        }
    }

    /// Resolve a possibly automatic request against workspace detection
    ///
    /// `auto` becomes `seq` inside a workspace and `none` elsewhere.
    pub fn resolve(request: Selection<Self>, is_workspace: bool) -> Self {
        match request {
            Selection::Explicit(mode) => mode,
            Selection::Auto if is_workspace => Self::Seq,
            Selection::Auto => Self::None,
        }
    }
}

impl fmt::Display for WorkspaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkspaceMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::unknown_workspace_mode(s, &Self::ACCEPTED))
    }
}

/// A value that is either given explicitly or left to detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    Auto,
    Explicit(T),
}

impl<T> Selection<T>
where
    T: FromStr<Err = Error>,
{
    /// Parse an optional request; absent means `auto`
    pub fn from_option(value: Option<&str>) -> Result<Self> {
        value.map_or(Ok(Self::Auto), |v| v.parse())
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr<Err = Error>,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == AUTO {
            Ok(Self::Auto)
        } else {
            s.parse().map(Self::Explicit)
        }
    }
}
