use std::fs::{self, File};
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::{AppError, CommandSpec};
use crate::ports::{CommandRunner, DaemonProcess};
use crate::services::adapters::child_daemon::ChildDaemon;

/// Runs external tools as child processes of devstack.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(spec: &CommandSpec, cwd: &Path) -> Command {
        let mut command = Command::new(spec.program());
        command.args(spec.args());
        command.current_dir(cwd);
        command
    }

    fn spawn_error(spec: &CommandSpec, cwd: &Path, err: std::io::Error) -> AppError {
        AppError::CommandSpawn {
            command: spec.to_string(),
            details: format!("{} (in {})", err, cwd.display()),
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec, cwd: &Path) -> Result<(), AppError> {
        debug!(command = %spec, cwd = %cwd.display(), "running command");
        let status = Self::command(spec, cwd)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| Self::spawn_error(spec, cwd, e))?;

        if !status.success() {
            return Err(AppError::CommandFailed {
                command: spec.to_string(),
                status: status.to_string(),
            });
        }
        Ok(())
    }

    fn run_foreground(&self, spec: &CommandSpec, cwd: &Path) -> Result<Option<i32>, AppError> {
        debug!(command = %spec, cwd = %cwd.display(), "running foreground command");
        let status =
            Self::command(spec, cwd).status().map_err(|e| Self::spawn_error(spec, cwd, e))?;
        debug!(%status, "foreground command exited");
        Ok(status.code())
    }

    fn spawn_background(
        &self,
        spec: &CommandSpec,
        cwd: &Path,
        log_file: &Path,
    ) -> Result<Box<dyn DaemonProcess>, AppError> {
        if let Some(parent) = log_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let stdout = File::create(log_file)?;
        let stderr = stdout.try_clone()?;

        debug!(command = %spec, log = %log_file.display(), "spawning background command");
        let mut command = Self::command(spec, cwd);
        command.stdin(Stdio::null()).stdout(Stdio::from(stdout)).stderr(Stdio::from(stderr));
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }
        let child = command.spawn().map_err(|e| Self::spawn_error(spec, cwd, e))?;

        Ok(Box::new(ChildDaemon::new(child, spec.to_string())))
    }
}
