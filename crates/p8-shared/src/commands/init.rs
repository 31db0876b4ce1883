//! Init command
//!
//! Adds the shared eslint/prettier configs to the project in the working
//! directory, registers package-manager helper scripts and optionally sets up
//! commitlint with lefthook git hooks.

use anyhow::{Context as _, Result};
use camino::Utf8Path;
use p8_project::assets::{copy_asset, ModuleFlavor, LEFTHOOK_CONFIG};
use p8_project::manifest::{write_backup, PackageJson, BACKUP_FILE};
use p8_project::{detect_package_manager, PackageManager, ParsedArguments};
use tracing::debug;

use crate::context::Context;
use crate::output;
use crate::prompt::Prompter;
use crate::shell::Shell;

const LEFTHOOK_INSTALL: &str = "lefthook install";
const CLEANUP: &str = "cleanup";

pub fn run(
    args: &ParsedArguments,
    ctx: &Context,
    prompter: &dyn Prompter,
    shell: &dyn Shell,
) -> Result<()> {
    let options = InitOptions {
        package_manager: detect_package_manager(&ctx.fs, ctx.cwd()),
        cleanup: wants_cleanup(args),
    };
    debug!("Init options: {:?}", options);

    init(ctx.cwd(), &options, prompter, shell)
}

/// Options for initializing a project
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Manager the helper scripts and installs are written for
    pub package_manager: PackageManager,
    /// Move inline tool configs out of package.json
    pub cleanup: bool,
}

/// `init cleanup`, `init cleanup,other` or `init --cleanup`
fn wants_cleanup(args: &ParsedArguments) -> bool {
    let listed = args
        .positional(0)
        .is_some_and(|list| list.split(',').any(|option| option.trim() == CLEANUP));
    let flagged = args
        .option(CLEANUP)
        .is_some_and(|value| value.as_str() != Some("false"));

    listed || flagged
}

/// Initialize the project whose package.json sits in `dir`
pub fn init(
    dir: &Utf8Path,
    options: &InitOptions,
    prompter: &dyn Prompter,
    shell: &dyn Shell,
) -> Result<()> {
    let pm = options.package_manager;
    let mut manifest = PackageJson::load(dir).context("Cannot initialize project")?;
    let flavor = manifest.module_flavor();

    for tool in ["eslint", "prettier"] {
        create_asset(&flavor.config_file(tool), dir)?;
    }

    manifest.set_script(&format!("{pm}:reset"), pm.reset_script())?;
    manifest.set_script(&format!("{pm}:audit"), pm.audit_script())?;

    if prompter.confirm("Do you want to use commitlint/lefthook?", true)? {
        setup_commit_hooks(&mut manifest, flavor)?;

        // Installs may edit package.json themselves, so hand them the current
        // file and pick up their changes afterwards.
        manifest.save()?;
        install_commit_hooks(dir, pm, prompter, shell)?;
        manifest = PackageJson::load(dir)?;
    }

    if options.cleanup {
        cleanup(&mut manifest)?;
    } else {
        output::info("Skipping cleanup...");
    }

    manifest.save()?;
    output::success("Project initialized");
    Ok(())
}

fn create_asset(name: &str, dir: &Utf8Path) -> Result<()> {
    let path = copy_asset(name, dir).with_context(|| format!("Failed to create {name}"))?;
    output::created(&path);
    Ok(())
}

fn setup_commit_hooks(manifest: &mut PackageJson, flavor: ModuleFlavor) -> Result<()> {
    let dir = manifest.dir().to_path_buf();
    create_asset(&flavor.config_file("commitlint"), &dir)?;
    create_asset(LEFTHOOK_CONFIG, &dir)?;

    output::info("Adding lefthook install to postinstall...");
    manifest.set_script("postinstall", LEFTHOOK_INSTALL)?;
    Ok(())
}

fn install_commit_hooks(
    dir: &Utf8Path,
    pm: PackageManager,
    prompter: &dyn Prompter,
    shell: &dyn Shell,
) -> Result<()> {
    let install = pm.hook_install_command();

    if prompter.confirm(&format!("Do you want to run \"{install}\" now?"), true)? {
        output::command(install);
        shell.exec(install, dir)?;
    } else {
        output::suggest_command(
            "You could run the following command to install needed dependencies:",
            install,
        );
    }

    if prompter.confirm(&format!("Do you want to run \"{LEFTHOOK_INSTALL}\" now?"), true)? {
        output::command(LEFTHOOK_INSTALL);
        shell.exec(LEFTHOOK_INSTALL, dir)?;
    }

    Ok(())
}

/// Move inline tool configs to the backup file
fn cleanup(manifest: &mut PackageJson) -> Result<()> {
    output::info("Removing eslintConfig, prettier and commitlint from package.json...");

    let sections = manifest.take_config_sections();
    if sections.is_empty() {
        output::warning("No inline eslintConfig, prettier or commitlint sections found");
    }
    for section in sections.keys() {
        output::info(&format!("Backing up {section} to {BACKUP_FILE}..."));
    }

    write_backup(manifest.dir(), &sections)?;
    Ok(())
}
