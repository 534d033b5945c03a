//! Waiting for the daemon to accept requests.

use std::path::Path;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::domain::{AppError, ReadinessConfig, ReadinessStrategy};
use crate::ports::{Interrupts, ReadinessProbe};
use crate::services::DaemonGuard;
use crate::services::adapters::command_readiness::CommandReadinessProbe;
use crate::services::adapters::http_readiness::HttpReadinessProbe;

/// Build the probe for a strategy. `Delay` has no probe.
pub fn build_probe(
    config: &ReadinessConfig,
    root: &Path,
) -> Result<Option<Box<dyn ReadinessProbe>>, AppError> {
    let probe: Box<dyn ReadinessProbe> = match config.strategy {
        ReadinessStrategy::Http => {
            Box::new(HttpReadinessProbe::new(config.url.clone(), config.timeout_ms)?)
        }
        ReadinessStrategy::Command => {
            Box::new(CommandReadinessProbe::new(config.command.clone(), root.to_path_buf()))
        }
        ReadinessStrategy::Delay => return Ok(None),
    };
    Ok(Some(probe))
}

/// Block until the daemon is ready, it exits, or attempts run out.
pub fn wait_until_ready(
    daemon: &mut DaemonGuard,
    probe: Option<&dyn ReadinessProbe>,
    config: &ReadinessConfig,
    interrupts: &dyn Interrupts,
) -> Result<(), AppError> {
    let Some(probe) = probe else {
        thread::sleep(Duration::from_millis(config.delay_ms));
        return ensure_running(daemon);
    };

    let mut last_error = String::from("no attempt made");
    for attempt in 1..=config.attempts {
        if interrupts.interrupted() {
            return Err(AppError::Interrupted);
        }
        ensure_running(daemon)?;

        match probe.check() {
            Ok(()) => {
                debug!(attempt, target = %probe.target(), "daemon ready");
                return Ok(());
            }
            Err(err) => {
                debug!(attempt, error = %err, "daemon not ready yet");
                last_error = err.to_string();
            }
        }

        if attempt < config.attempts {
            thread::sleep(Duration::from_millis(config.interval_ms));
        }
    }

    Err(AppError::DaemonNotReady { attempts: config.attempts, last_error })
}

fn ensure_running(daemon: &mut DaemonGuard) -> Result<(), AppError> {
    match daemon.exit_status()? {
        Some(status) => {
            Err(AppError::DaemonExited { status, log_file: daemon.log_file().to_path_buf() })
        }
        None => Ok(()),
    }
}
