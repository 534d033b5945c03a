//! devstack: bring up a local IPFS + smart-contract + frontend development stack.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::commands::{deploy, plan, publish, status};
use app::{AppContext, Project};
use domain::config::render_config;
use services::{CtrlCInterrupts, SystemCommandRunner, readiness};

pub use app::commands::deploy::{DeployOptions, DeployOutcome};
pub use app::commands::status::StatusReport;
pub use domain::{AppError, Step, StepKind};
pub use services::artifact_publisher::{ArtifactStatus, PublishedArtifact};

/// Run the full pipeline for the project at `root` (default: current directory).
///
/// The returned outcome carries the exit code of the frontend dev server.
pub fn deploy(
    root: Option<&Path>,
    config: Option<&Path>,
    options: DeployOptions,
) -> Result<DeployOutcome, AppError> {
    let project = Project::open(root, config)?;
    let probe = readiness::build_probe(&project.config().daemon.readiness, project.root())?;
    let interrupts = CtrlCInterrupts::install()?;
    let ctx = AppContext::new(project, SystemCommandRunner::new(), interrupts);

    deploy::execute(&ctx, probe.as_deref(), &options)
}

/// Copy compiled artifacts into the frontend tree.
pub fn publish(
    root: Option<&Path>,
    config: Option<&Path>,
) -> Result<Vec<PublishedArtifact>, AppError> {
    let project = Project::open(root, config)?;
    publish::execute(&project)
}

/// Ordered steps a deploy would run, without running them.
pub fn plan(root: Option<&Path>, config: Option<&Path>) -> Result<Vec<Step>, AppError> {
    let project = Project::open(root, config)?;
    Ok(plan::execute(&project))
}

/// Daemon initialization and artifact sync state.
pub fn status(root: Option<&Path>, config: Option<&Path>) -> Result<StatusReport, AppError> {
    let project = Project::open(root, config)?;
    status::execute(&project)
}

/// Effective configuration rendered as TOML.
pub fn effective_config(root: Option<&Path>, config: Option<&Path>) -> Result<String, AppError> {
    let project = Project::open(root, config)?;
    render_config(project.config())
}
