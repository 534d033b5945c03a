use std::path::Path;
use std::time::Duration;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, CommandSpec};
use crate::ports::{CommandRunner, DaemonProcess};
use crate::testing::FakeInterrupts;

/// Shared, ordered record of fake process activity.
#[derive(Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn push(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

/// Command runner that records invocations instead of executing them.
pub struct FakeCommandRunner {
    pub log: CallLog,
    failing: Vec<String>,
    serve_exit: Option<i32>,
    daemon_exit: Option<String>,
    interrupt_on: Option<(String, FakeInterrupts)>,
}

impl FakeCommandRunner {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            failing: Vec::new(),
            serve_exit: Some(0),
            daemon_exit: None,
            interrupt_on: None,
        }
    }

    /// Make the command with this display form fail.
    pub fn failing(mut self, command: &str) -> Self {
        self.failing.push(command.to_string());
        self
    }

    pub fn serve_exit(mut self, code: Option<i32>) -> Self {
        self.serve_exit = code;
        self
    }

    /// Spawned daemons report as already exited.
    pub fn daemon_dies(mut self, status: &str) -> Self {
        self.daemon_exit = Some(status.to_string());
        self
    }

    /// Raise `interrupts` while the command with this display form runs,
    /// as a terminal Ctrl-C would.
    pub fn interrupting(mut self, command: &str, interrupts: &FakeInterrupts) -> Self {
        self.interrupt_on = Some((command.to_string(), interrupts.clone()));
        self
    }

    fn check(&self, command: &CommandSpec) -> Result<(), AppError> {
        if let Some((target, interrupts)) = &self.interrupt_on {
            if *target == command.to_string() {
                interrupts.raise();
            }
        }
        if self.failing.iter().any(|c| *c == command.to_string()) {
            return Err(AppError::CommandFailed {
                command: command.to_string(),
                status: "exit status: 1".into(),
            });
        }
        Ok(())
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, command: &CommandSpec, _cwd: &Path) -> Result<(), AppError> {
        self.log.push(format!("run {}", command));
        self.check(command)
    }

    fn run_foreground(&self, command: &CommandSpec, _cwd: &Path) -> Result<Option<i32>, AppError> {
        self.log.push(format!("foreground {}", command));
        self.check(command)?;
        Ok(self.serve_exit)
    }

    fn spawn_background(
        &self,
        command: &CommandSpec,
        _cwd: &Path,
        _log_file: &Path,
    ) -> Result<Box<dyn DaemonProcess>, AppError> {
        self.log.push(format!("spawn {}", command));
        self.check(command)?;
        Ok(Box::new(match &self.daemon_exit {
            Some(status) => FakeDaemon::exited(&self.log, status),
            None => FakeDaemon::new(&self.log),
        }))
    }
}

/// Background process double; records `terminate` in the call log.
pub struct FakeDaemon {
    log: CallLog,
    exit_status: Option<String>,
}

impl FakeDaemon {
    pub fn new(log: &CallLog) -> Self {
        Self { log: log.clone(), exit_status: None }
    }

    pub fn exited(log: &CallLog, status: &str) -> Self {
        Self { log: log.clone(), exit_status: Some(status.to_string()) }
    }
}

impl DaemonProcess for FakeDaemon {
    fn id(&self) -> u32 {
        4242
    }

    fn exit_status(&mut self) -> Result<Option<String>, AppError> {
        Ok(self.exit_status.clone())
    }

    fn terminate(&mut self, _grace: Duration) -> Result<(), AppError> {
        self.log.push("terminate");
        Ok(())
    }
}
