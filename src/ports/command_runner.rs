use std::path::Path;
use std::time::Duration;

use crate::domain::{AppError, CommandSpec};

/// Port for running external tools.
pub trait CommandRunner {
    /// Run a command to completion with inherited stdio.
    ///
    /// Fails if the command cannot be started or exits unsuccessfully.
    fn run(&self, command: &CommandSpec, cwd: &Path) -> Result<(), AppError>;

    /// Run a command in the foreground and hand back its exit code.
    ///
    /// `None` means the process was ended by a signal.
    fn run_foreground(&self, command: &CommandSpec, cwd: &Path) -> Result<Option<i32>, AppError>;

    /// Spawn a command in the background with stdout and stderr written to `log_file`.
    ///
    /// The process is started outside the caller's process group so a terminal
    /// Ctrl-C does not reach it.
    fn spawn_background(
        &self,
        command: &CommandSpec,
        cwd: &Path,
        log_file: &Path,
    ) -> Result<Box<dyn DaemonProcess>, AppError>;
}

/// Handle to a background process.
pub trait DaemonProcess {
    /// OS process id.
    fn id(&self) -> u32;

    /// Exit status if the process has already exited.
    fn exit_status(&mut self) -> Result<Option<String>, AppError>;

    /// Ask the process to stop, force it after `grace`, and reap it.
    fn terminate(&mut self, grace: Duration) -> Result<(), AppError>;
}
