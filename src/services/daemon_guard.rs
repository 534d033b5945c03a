//! Scoped ownership of the background daemon.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{AppError, ExitPolicy};
use crate::ports::DaemonProcess;

/// Owns the daemon handle for the lifetime of one orchestration.
///
/// Dropping the guard releases the daemon according to its [`ExitPolicy`],
/// so every exit path (success, error, interrupt) goes through the same
/// release.
pub struct DaemonGuard {
    process: Option<Box<dyn DaemonProcess>>,
    policy: ExitPolicy,
    stop_timeout: Duration,
    log_file: PathBuf,
}

impl DaemonGuard {
    pub fn new(process: Box<dyn DaemonProcess>, policy: ExitPolicy, log_file: PathBuf) -> Self {
        Self { process: Some(process), policy, stop_timeout: Duration::from_secs(5), log_file }
    }

    /// How long a stopping daemon gets after SIGTERM before it is killed.
    pub fn with_stop_timeout(mut self, stop_timeout: Duration) -> Self {
        self.stop_timeout = stop_timeout;
        self
    }

    pub fn id(&self) -> Option<u32> {
        self.process.as_ref().map(|p| p.id())
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Exit status if the daemon has already stopped on its own.
    pub fn exit_status(&mut self) -> Result<Option<String>, AppError> {
        match self.process.as_mut() {
            Some(process) => process.exit_status(),
            None => Ok(None),
        }
    }

    fn release(&mut self) -> Result<(), AppError> {
        let Some(mut process) = self.process.take() else {
            return Ok(());
        };
        match self.policy {
            ExitPolicy::Stop => {
                println!("Stopping daemon (pid {})...", process.id());
                process.terminate(self.stop_timeout)
            }
            ExitPolicy::Keep => {
                println!(
                    "Leaving daemon running (pid {}, log: {})",
                    process.id(),
                    self.log_file.display()
                );
                debug!(pid = process.id(), "daemon detached");
                Ok(())
            }
        }
    }
}

impl Drop for DaemonGuard {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            warn!(error = %err, "failed to stop daemon");
            eprintln!("Warning: failed to stop daemon: {}", err);
        }
    }
}
