//! The deployment pipeline: init → daemon → compile → migrate → publish → serve.
//!
//! Steps run strictly in order; the first failure ends the run. The daemon
//! started along the way is owned by a [`DaemonGuard`] local to this function,
//! so it is released on every return path.

use std::path::Path;
use std::time::Duration;

use tracing::info;

use crate::app::AppContext;
use crate::domain::step::{self, StepAction};
use crate::domain::{AppError, ArtifactSet, INTERRUPTED_EXIT_CODE, StepKind};
use crate::ports::{CommandRunner, Interrupts, ReadinessProbe};
use crate::services::artifact_publisher::{self, PublishedArtifact};
use crate::services::{DaemonGuard, readiness};

/// Options for a deploy run.
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Run the frontend dev server as the final step.
    pub serve: bool,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self { serve: true }
    }
}

/// Result of a deploy run that reached its last step.
#[derive(Debug, Clone)]
pub struct DeployOutcome {
    /// Steps that completed, in order.
    pub completed: Vec<StepKind>,
    pub published: Vec<PublishedArtifact>,
    /// Exit code for the devstack process.
    pub exit_code: i32,
}

/// Execute the pipeline.
pub fn execute<R: CommandRunner, I: Interrupts>(
    ctx: &AppContext<R, I>,
    probe: Option<&dyn ReadinessProbe>,
    options: &DeployOptions,
) -> Result<DeployOutcome, AppError> {
    let project = ctx.project();
    let config = project.config();
    let runner = ctx.runner();

    let mut daemon: Option<DaemonGuard> = None;
    let mut outcome = DeployOutcome { completed: Vec::new(), published: Vec::new(), exit_code: 0 };

    for step in step::plan(config, project.root(), project.home()) {
        if step.kind == StepKind::Serve && !options.serve {
            println!("Skipping frontend dev server (--no-serve)");
            break;
        }
        if ctx.interrupts().interrupted() {
            return Err(AppError::Interrupted);
        }
        info!(step = %step.kind, cwd = %step.cwd.display(), "starting step");

        match &step.action {
            StepAction::InitIfMissing { state_dir, command } => {
                println!("==> Checking if the daemon is initialized...");
                if state_dir.exists() {
                    println!("Daemon state found at {}", state_dir.display());
                } else {
                    println!("==> Initializing daemon: {}", command);
                    runner.run(command, &step.cwd).map_err(|e| interrupted_or(ctx, e))?;
                }
            }
            StepAction::Background { command, log_file } => {
                println!("==> Starting daemon: {}", command);
                let process = runner.spawn_background(command, &step.cwd, log_file)?;
                let guard = daemon.insert(
                    DaemonGuard::new(process, config.daemon.on_exit, log_file.clone())
                        .with_stop_timeout(Duration::from_millis(config.daemon.stop_timeout_ms)),
                );
                match probe {
                    Some(probe) => println!("Waiting for daemon at {}...", probe.target()),
                    None => println!(
                        "Waiting {} ms for daemon to start...",
                        config.daemon.readiness.delay_ms
                    ),
                }
                readiness::wait_until_ready(
                    guard,
                    probe,
                    &config.daemon.readiness,
                    ctx.interrupts(),
                )?;
                if let Some(pid) = guard.id() {
                    println!("✅ Daemon ready (pid {})", pid);
                }
            }
            StepAction::Run { command } => {
                require_dir(&step.cwd)?;
                println!("==> Running {} in {}", command, step.cwd.display());
                runner.run(command, &step.cwd).map_err(|e| interrupted_or(ctx, e))?;
            }
            StepAction::CopyArtifacts { names, source_dir, dest_dir } => {
                println!("==> Publishing artifacts to {}", dest_dir.display());
                let set = ArtifactSet::new(names.clone(), source_dir.clone(), dest_dir.clone());
                outcome.published =
                    artifact_publisher::publish(&set, config.artifacts.network_id.as_deref())?;
                for artifact in &outcome.published {
                    print_published(artifact);
                }
            }
            StepAction::Foreground { command } => {
                require_dir(&step.cwd)?;
                println!("==> Running {} in {}", command, step.cwd.display());
                let code = runner.run_foreground(command, &step.cwd)?;
                outcome.exit_code = match code {
                    Some(code) => code,
                    None if ctx.interrupts().interrupted() => INTERRUPTED_EXIT_CODE,
                    None => 1,
                };
                info!(exit_code = outcome.exit_code, "dev server exited");
            }
        }
        outcome.completed.push(step.kind);
    }

    Ok(outcome)
}

/// A tool that died from the operator's Ctrl-C counts as an interrupt, not a failure.
fn interrupted_or<R: CommandRunner, I: Interrupts>(
    ctx: &AppContext<R, I>,
    err: AppError,
) -> AppError {
    if ctx.interrupts().interrupted() { AppError::Interrupted } else { err }
}

fn require_dir(path: &Path) -> Result<(), AppError> {
    if path.is_dir() {
        return Ok(());
    }
    let what = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Working".to_string());
    Err(AppError::MissingDirectory { what, path: path.to_path_buf() })
}

pub(crate) fn print_published(artifact: &PublishedArtifact) {
    let verb = if artifact.changed { "Copied" } else { "Unchanged" };
    match &artifact.address {
        Some(address) => println!(
            "✅ {} {} -> {} ({})",
            verb,
            artifact.source.display(),
            artifact.dest.display(),
            address
        ),
        None => {
            println!("✅ {} {} -> {}", verb, artifact.source.display(), artifact.dest.display())
        }
    }
}
