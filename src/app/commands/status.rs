//! Read-only report of daemon state and artifact sync.

use std::path::PathBuf;

use crate::app::Project;
use crate::domain::config::paths;
use crate::domain::{AppError, ArtifactSet};
use crate::services::artifact_publisher::{self, ArtifactStatus};

#[derive(Debug, Clone)]
pub struct StatusReport {
    pub daemon_state_dir: PathBuf,
    pub daemon_initialized: bool,
    pub artifacts: Vec<ArtifactStatus>,
}

pub fn execute(project: &Project) -> Result<StatusReport, AppError> {
    let config = project.config();
    let daemon_state_dir = paths::expand_home(&config.daemon.state_dir, project.home());
    let set = ArtifactSet::from_config(&config.artifacts, project.root());

    Ok(StatusReport {
        daemon_initialized: daemon_state_dir.is_dir(),
        daemon_state_dir,
        artifacts: artifact_publisher::inspect(&set, config.artifacts.network_id.as_deref())?,
    })
}
