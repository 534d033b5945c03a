//! Standalone artifact publishing.

use crate::app::Project;
use crate::domain::{AppError, ArtifactSet};
use crate::services::artifact_publisher::{self, PublishedArtifact};

/// Copy the configured artifacts into the frontend tree.
pub fn execute(project: &Project) -> Result<Vec<PublishedArtifact>, AppError> {
    let config = &project.config().artifacts;
    let set = ArtifactSet::from_config(config, project.root());
    artifact_publisher::publish(&set, config.network_id.as_deref())
}
