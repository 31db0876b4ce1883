//! Project root, package manager and workspace detection.
//!
//! All lookups start from the *outermost* directory holding a `package.json`,
//! so a call from inside a nested workspace package sees the same lockfiles
//! and workspace declaration as a call from the repository root.

use crate::fs::FileSystem;
use crate::types::{PackageManager, MANIFEST_FILE, PNPM_WORKSPACE_FILE};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use tracing::debug;

/// Find the topmost ancestor of `start_dir` (inclusive) that holds a manifest
///
/// Falls back to `start_dir` when no manifest exists anywhere above it. A
/// start directory that cannot be resolved is walked as an absolute path.
pub fn find_project_root(fs: &dyn FileSystem, start_dir: &Utf8Path) -> Utf8PathBuf {
    let start = match fs.real_path(start_dir) {
        Ok(path) => path,
        Err(e) => {
            debug!("Could not canonicalize {}: {}", start_dir, e);
            absolute(start_dir)
        }
    };

    let mut last_match = start.clone();
    let mut current = start.as_path();

    loop {
        if fs.exists(&current.join(MANIFEST_FILE)) {
            debug!("Found {} in {}", MANIFEST_FILE, current);
            last_match = current.to_path_buf();
        }

        let parent = fs.parent_of(current);
        if parent == current || parent.as_str().is_empty() {
            break;
        }
        current = parent;
    }

    debug!("Project root: {}", last_match);
    last_match
}

/// `path` made absolute against the process directory, without touching the filesystem
fn absolute(path: &Utf8Path) -> Utf8PathBuf {
    std::path::absolute(path)
        .ok()
        .and_then(|abs| Utf8PathBuf::try_from(abs).ok())
        .unwrap_or_else(|| path.to_path_buf())
}

/// Detect the package manager from lockfiles at the project root
///
/// pnpm wins over yarn; npm is the default when neither lockfile exists.
pub fn detect_package_manager(fs: &dyn FileSystem, cwd: &Utf8Path) -> PackageManager {
    let root = find_project_root(fs, cwd);

    let detected = [PackageManager::Pnpm, PackageManager::Yarn]
        .into_iter()
        .find(|pm| fs.exists(&root.join(pm.lockfile())))
        .unwrap_or(PackageManager::Npm);

    debug!("Package manager: {}", detected);
    detected
}

/// Detect whether the project root declares a workspace
///
/// True for a `pnpm-workspace.yaml`, or a `package.json` with a non-empty
/// `workspaces` field. An unreadable or malformed manifest counts as no
/// workspace.
pub fn detect_workspace(fs: &dyn FileSystem, cwd: &Utf8Path) -> bool {
    let root = find_project_root(fs, cwd);

    if fs.exists(&root.join(PNPM_WORKSPACE_FILE)) {
        debug!("Found {} in {}", PNPM_WORKSPACE_FILE, root);
        return true;
    }

    let manifest_path = root.join(MANIFEST_FILE);
    if !fs.exists(&manifest_path) {
        return false;
    }

    let probe = fs
        .read_text(&manifest_path)
        .map_err(|e| e.to_string())
        .and_then(|text| {
            serde_json::from_str::<WorkspaceProbe>(&text).map_err(|e| e.to_string())
        });

    match probe {
        Ok(probe) => probe.declares_workspaces(),
        Err(e) => {
            debug!("Ignoring unreadable {}: {}", manifest_path, e);
            false
        }
    }
}

/// The part of `package.json` that declares workspaces
#[derive(Debug, Default, Deserialize)]
struct WorkspaceProbe {
    #[serde(default)]
    workspaces: Option<Workspaces>,
}

/// `workspaces` as a glob list or as yarn's `{ "packages": [...] }` object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Workspaces {
    List(Vec<String>),
    Object {
        #[serde(default)]
        packages: Vec<String>,
    },
}

impl WorkspaceProbe {
    fn declares_workspaces(&self) -> bool {
        match &self.workspaces {
            Some(Workspaces::List(globs)) => !globs.is_empty(),
            Some(Workspaces::Object { packages }) => !packages.is_empty(),
            None => false,
        }
    }
}
