//! Running command lines through the platform shell

use anyhow::{bail, Context, Result};
use camino::Utf8Path;
use tracing::debug;

/// Executes a command line in a directory
pub trait Shell {
    fn exec(&self, command: &str, cwd: &Utf8Path) -> Result<()>;
}

/// [`Shell`] spawning `sh -c` (or `cmd /C` on Windows) with inherited stdio
#[derive(Debug, Default)]
pub struct SystemShell;

impl Shell for SystemShell {
    fn exec(&self, command: &str, cwd: &Utf8Path) -> Result<()> {
        debug!("Running in {}: {}", cwd, command);

        let (program, flag) = if cfg!(windows) {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        };

        let output = duct::cmd(program, [flag, command])
            .dir(cwd.as_std_path())
            .unchecked()
            .run()
            .with_context(|| format!("Failed to start: {command}"))?;

        if !output.status.success() {
            match output.status.code() {
                Some(code) => bail!("Command failed with exit code {code}: {command}"),
                None => bail!("Command terminated by signal: {command}"),
            }
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_exec_runs_in_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();

        SystemShell.exec("touch created.txt", &dir).unwrap();
        assert!(dir.join("created.txt").exists());
    }

    #[test]
    fn test_exec_reports_exit_code() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();

        let err = SystemShell.exec("exit 3", &dir).unwrap_err();
        assert!(err.to_string().contains("exit code 3"));
    }
}
