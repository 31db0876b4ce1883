//! # p8-project
//!
//! Project tooling library for the p8-shared CLI providing:
//! - Command line tokenizing ([`args::parse`])
//! - Project root, package manager and workspace detection
//! - Script command synthesis for npm, yarn and pnpm
//! - Bundled lint/format/commit-hook configuration files
//! - `package.json` editing
//!
//! # Examples
//!
//! ## Build the command for a script
//!
//! ```
//! use p8_project::{synthesize, PackageManager, WorkspaceMode};
//!
//! let cmd = synthesize("build", PackageManager::Pnpm, WorkspaceMode::Par).unwrap();
//! assert_eq!(cmd, "pnpm -r --if-present --parallel run build");
//! ```
//!
//! ## Detect the package manager of a project
//!
//! ```no_run
//! use p8_project::{detect_package_manager, OsFileSystem};
//! use camino::Utf8Path;
//!
//! let pm = detect_package_manager(&OsFileSystem, Utf8Path::new("/work/repo/packages/app"));
//! println!("{pm}");
//! ```

pub mod args;
pub mod assets;
pub mod command;
pub mod detect;
pub mod error;
pub mod fs;
pub mod manifest;
pub mod types;

pub use error::{Error, Result};

pub use args::{parse, OptionValue, ParsedArguments};
pub use command::{synthesize, synthesize_named, RunRequest};
pub use detect::{detect_package_manager, detect_workspace, find_project_root};
pub use fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use types::{PackageManager, Selection, WorkspaceMode};
