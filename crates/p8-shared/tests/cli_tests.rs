//! Integration tests for the p8-shared binary
//!
//! Runs the built executable against temporary project trees and checks
//! stdout and exit status.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn p8_shared(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_p8-shared"))
        .arg("-C")
        .arg(cwd)
        .args(args)
        .env_remove("P8_SHARED_LOG")
        .env_remove("P8_SHARED_YES")
        .output()
        .expect("failed to run p8-shared")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

/// Monorepo with a pnpm lockfile and one nested package
fn pnpm_monorepo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    std::fs::write(root.join("package.json"), r#"{"private": true}"#).unwrap();
    std::fs::write(root.join("pnpm-lock.yaml"), "").unwrap();
    std::fs::write(root.join("pnpm-workspace.yaml"), "packages:\n  - 'packages/*'\n").unwrap();
    std::fs::create_dir_all(root.join("packages/app/src")).unwrap();
    std::fs::write(root.join("packages/app/package.json"), r#"{"name": "app"}"#).unwrap();
    (temp_dir, root)
}

#[test]
fn test_root_pm_ws_from_nested_dir() {
    let (_guard, root) = pnpm_monorepo();
    let nested = root.join("packages/app/src");

    let output = p8_shared(&nested, &["root"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), root.to_str().unwrap());

    let output = p8_shared(&nested, &["pm"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "pnpm");

    let output = p8_shared(&nested, &["ws"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "true");
}

#[test]
fn test_run_dry_run_prints_command() {
    let (_guard, root) = pnpm_monorepo();

    let output = p8_shared(&root, &["run", "lint", "--dry-run"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "pnpm -r --workspace-concurrency=1 --if-present --reporter-hide-prefix run lint"
    );

    let output = p8_shared(&root, &["run", "build", "-p", "yarn", "-w", "par", "--dry-run"]);
    assert_eq!(stdout(&output), "yarn workspaces foreach -A -p run build");
}

#[test]
fn test_run_rejects_unsupported_configuration() {
    let (_guard, root) = pnpm_monorepo();

    let output = p8_shared(&root, &["run", "test", "npm", "par", "--dry-run"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot run script 'test'"), "{stderr}");
    assert!(
        stderr.contains("caused by: Unsupported workspace mode 'par' for npm"),
        "{stderr}"
    );
}

#[test]
fn test_dirn() {
    let (_guard, root) = pnpm_monorepo();
    let nested = root.join("packages/app");

    assert_eq!(stdout(&p8_shared(&nested, &["dirn"])), "app");
    assert_eq!(stdout(&p8_shared(&nested, &["dirn", "1"])), "packages");
}

#[test]
fn test_unknown_command_prints_usage_and_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = p8_shared(temp_dir.path(), &["deploy"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown command: deploy"));
    assert!(stderr.contains("Usage: p8-shared"));

    let output = p8_shared(temp_dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
}

#[cfg(unix)]
#[test]
fn test_init_non_interactive() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    std::fs::write(
        dir.join("package.json"),
        r#"{"name": "demo", "type": "module", "prettier": {"semi": false}}"#,
    )
    .unwrap();
    std::fs::write(dir.join("yarn.lock"), "").unwrap();

    // With an empty PATH the dependency install cannot start, so init stops
    // right after the manifest with the hook scripts has been saved.
    let output = Command::new(env!("CARGO_BIN_EXE_p8-shared"))
        .args(["-y", "-C"])
        .arg(dir)
        .args(["init", "cleanup"])
        .env("PATH", "")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(dir.join("eslint.config.mjs").exists());
    assert!(dir.join("prettier.config.mjs").exists());
    assert!(dir.join("commitlint.config.mjs").exists());
    assert!(dir.join("lefthook.yml").exists());

    let pkg = std::fs::read_to_string(dir.join("package.json")).unwrap();
    assert!(pkg.contains("\"yarn:audit\": \"yarn npm audit\""));
    assert!(pkg.contains("\"postinstall\": \"lefthook install\""));
}
