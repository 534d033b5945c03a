use std::process::Child;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::domain::AppError;
use crate::ports::DaemonProcess;

const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Background process backed by a `std::process::Child`.
#[derive(Debug)]
pub struct ChildDaemon {
    child: Child,
    command: String,
    reaped: bool,
}

impl ChildDaemon {
    pub fn new(child: Child, command: String) -> Self {
        Self { child, command, reaped: false }
    }

    /// Poll until the child exits or `grace` elapses.
    fn wait_for_exit(&mut self, grace: Duration) -> Result<bool, AppError> {
        let deadline = Instant::now() + grace;
        loop {
            if let Some(status) = self.child.try_wait()? {
                debug!(command = %self.command, %status, "daemon exited after SIGTERM");
                self.reaped = true;
                return Ok(true);
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            thread::sleep(EXIT_POLL_INTERVAL);
        }
    }

    #[cfg(unix)]
    fn request_stop(&self) -> bool {
        use nix::sys::signal::{Signal, kill};
        use nix::unistd::Pid;

        let Ok(raw) = i32::try_from(self.child.id()) else {
            return false;
        };
        match kill(Pid::from_raw(raw), Signal::SIGTERM) {
            Ok(()) => true,
            Err(err) => {
                warn!(command = %self.command, error = %err, "failed to send SIGTERM");
                false
            }
        }
    }

    #[cfg(not(unix))]
    fn request_stop(&self) -> bool {
        false
    }
}

impl DaemonProcess for ChildDaemon {
    fn id(&self) -> u32 {
        self.child.id()
    }

    fn exit_status(&mut self) -> Result<Option<String>, AppError> {
        let status = self.child.try_wait()?;
        if status.is_some() {
            self.reaped = true;
        }
        Ok(status.map(|s| s.to_string()))
    }

    fn terminate(&mut self, grace: Duration) -> Result<(), AppError> {
        if self.reaped {
            return Ok(());
        }
        if let Some(status) = self.child.try_wait()? {
            debug!(command = %self.command, %status, "daemon already exited");
            self.reaped = true;
            return Ok(());
        }
        if self.request_stop() && self.wait_for_exit(grace)? {
            return Ok(());
        }

        warn!(command = %self.command, "daemon did not stop in time, killing it");
        if let Err(err) = self.child.kill() {
            // Lost the race with a natural exit; wait() below still reaps it.
            warn!(command = %self.command, error = %err, "failed to kill daemon");
        }
        let status = self.child.wait()?;
        self.reaped = true;
        debug!(command = %self.command, %status, "daemon stopped");
        Ok(())
    }
}
