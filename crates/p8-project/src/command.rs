//! Shell command synthesis for running a package script.

use crate::detect::{detect_package_manager, detect_workspace};
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::types::{PackageManager, Selection, WorkspaceMode};
use camino::Utf8Path;
use tracing::debug;

const YARN_WORKSPACE_SEQ: &str = "workspaces foreach -A";
const YARN_WORKSPACE_PAR: &str = "workspaces foreach -A -p";
const PNPM_WORKSPACE_SEQ: &str = "-r --workspace-concurrency=1 --if-present --reporter-hide-prefix";
const PNPM_WORKSPACE_PAR: &str = "-r --if-present --parallel";

/// Build the command line that runs `script` with the given manager and mode
///
/// The script name is substituted verbatim. npm has no parallel workspace
/// mode, so `(Npm, Par)` is rejected.
pub fn synthesize(
    script: &str,
    package_manager: PackageManager,
    workspace_mode: WorkspaceMode,
) -> Result<String> {
    use PackageManager::*;
    use WorkspaceMode::{None as Single, Par, Seq};

    let command = match (package_manager, workspace_mode) {
        (Npm, Single) => format!("npm run {script}"),
        (Npm, Seq) => format!("npm run {script} --workspaces --if-present"),
        (Yarn, Single) => format!("yarn run {script}"),
        (Yarn, Seq) => format!("yarn {YARN_WORKSPACE_SEQ} run {script}"),
        (Yarn, Par) => format!("yarn {YARN_WORKSPACE_PAR} run {script}"),
        (Pnpm, Single) => format!("pnpm run {script}"),
        (Pnpm, Seq) => format!("pnpm {PNPM_WORKSPACE_SEQ} run {script}"),
        (Pnpm, Par) => format!("pnpm {PNPM_WORKSPACE_PAR} run {script}"),
        (pm, mode) => {
            let supported: Vec<&str> = pm.supported_modes().iter().map(|m| m.as_str()).collect();
            return Err(Error::unsupported_workspace_mode(
                pm.as_str(),
                mode.as_str(),
                &supported,
            ));
        }
    };

    debug!("Synthesized command: {}", command);
    Ok(command)
}

/// Like [`synthesize`], taking manager and mode by name
pub fn synthesize_named(
    script: &str,
    package_manager: &str,
    workspace_mode: &str,
) -> Result<String> {
    synthesize(script, package_manager.parse()?, workspace_mode.parse()?)
}

/// A script invocation whose manager and mode may still be `auto`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub script: String,
    pub package_manager: Selection<PackageManager>,
    pub workspace_mode: Selection<WorkspaceMode>,
}

impl RunRequest {
    /// Request with both manager and mode detected
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            package_manager: Selection::Auto,
            workspace_mode: Selection::Auto,
        }
    }

    /// Parse manager and mode names, where absent or `auto` means detect
    pub fn from_names(
        script: impl Into<String>,
        package_manager: Option<&str>,
        workspace_mode: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            script: script.into(),
            package_manager: Selection::from_option(package_manager)?,
            workspace_mode: Selection::from_option(workspace_mode)?,
        })
    }

    /// Resolve `auto` values against the project at `cwd` and synthesize
    pub fn resolve(&self, fs: &dyn FileSystem, cwd: &Utf8Path) -> Result<String> {
        let workspace_mode = match self.workspace_mode {
            Selection::Explicit(mode) => mode,
            Selection::Auto => WorkspaceMode::resolve(Selection::Auto, detect_workspace(fs, cwd)),
        };
        let package_manager = match self.package_manager {
            Selection::Explicit(pm) => pm,
            Selection::Auto => detect_package_manager(fs, cwd),
        };

        synthesize(&self.script, package_manager, workspace_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFileSystem;

    #[test]
    fn test_mapping_table() {
        let cases = [
            ("npm", "none", "npm run S"),
            ("npm", "seq", "npm run S --workspaces --if-present"),
            ("yarn", "none", "yarn run S"),
            ("yarn", "seq", "yarn workspaces foreach -A run S"),
            ("yarn", "par", "yarn workspaces foreach -A -p run S"),
            ("pnpm", "none", "pnpm run S"),
            (
                "pnpm",
                "seq",
                "pnpm -r --workspace-concurrency=1 --if-present --reporter-hide-prefix run S",
            ),
            ("pnpm", "par", "pnpm -r --if-present --parallel run S"),
        ];

        for (pm, mode, expected) in cases {
            assert_eq!(synthesize_named("S", pm, mode).unwrap(), expected);
        }
    }

    #[test]
    fn test_known_commands() {
        assert_eq!(
            synthesize("test", PackageManager::Npm, WorkspaceMode::Seq).unwrap(),
            "npm run test --workspaces --if-present"
        );
        assert_eq!(
            synthesize("build", PackageManager::Yarn, WorkspaceMode::Par).unwrap(),
            "yarn workspaces foreach -A -p run build"
        );
        assert_eq!(
            synthesize("lint", PackageManager::Pnpm, WorkspaceMode::Seq).unwrap(),
            "pnpm -r --workspace-concurrency=1 --if-present --reporter-hide-prefix run lint"
        );
    }

    #[test]
    fn test_script_is_substituted_verbatim() {
        assert_eq!(
            synthesize("test:unit -- --watch", PackageManager::Npm, WorkspaceMode::None).unwrap(),
            "npm run test:unit -- --watch"
        );
    }

    #[test]
    fn test_npm_parallel_is_unsupported() {
        let err = synthesize("test", PackageManager::Npm, WorkspaceMode::Par).unwrap_err();
        assert!(matches!(err, Error::UnsupportedWorkspaceMode { .. }));
        let msg = err.to_string();
        assert!(msg.contains("'par'"));
        assert!(msg.contains("npm"));
        assert!(msg.contains("none, seq"));
    }

    #[test]
    fn test_unknown_names_are_configuration_errors() {
        let err = synthesize_named("x", "bogus", "none").unwrap_err();
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("Unknown package manager: bogus"));

        let err = synthesize_named("x", "npm", "bogus").unwrap_err();
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("Unknown workspace mode: bogus"));
    }

    #[test]
    fn test_request_resolves_auto_from_project() {
        let fs = MemoryFileSystem::new()
            .with_file("/repo/package.json", r#"{"workspaces": ["packages/*"]}"#)
            .touch("/repo/yarn.lock")
            .touch("/repo/packages/a/package.json");

        let request = RunRequest::new("build");
        assert_eq!(
            request.resolve(&fs, Utf8Path::new("/repo/packages/a")).unwrap(),
            "yarn workspaces foreach -A run build"
        );
    }

    #[test]
    fn test_request_auto_outside_workspace() {
        let fs = MemoryFileSystem::new().with_file("/app/package.json", r#"{"name": "app"}"#);

        let request = RunRequest::from_names("test", Some("auto"), None).unwrap();
        assert_eq!(
            request.resolve(&fs, Utf8Path::new("/app")).unwrap(),
            "npm run test"
        );
    }

    #[test]
    fn test_request_explicit_values_skip_detection() {
        let fs = MemoryFileSystem::new()
            .with_file("/repo/package.json", r#"{"workspaces": ["packages/*"]}"#)
            .touch("/repo/pnpm-lock.yaml");

        let request = RunRequest::from_names("lint", Some("npm"), Some("none")).unwrap();
        assert_eq!(
            request.resolve(&fs, Utf8Path::new("/repo")).unwrap(),
            "npm run lint"
        );
    }

    #[test]
    fn test_request_rejects_bad_names() {
        assert!(RunRequest::from_names("x", Some("bun"), None).is_err());
        assert!(RunRequest::from_names("x", None, Some("parallel")).is_err());
    }
}
