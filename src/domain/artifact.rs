//! Contract artifact descriptors.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::ArtifactsConfig;
use crate::domain::config::paths;

/// Extension appended to every artifact stem.
pub const ARTIFACT_EXTENSION: &str = "json";

/// One artifact resolved to its source and destination files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// Ordered artifacts plus the directories they move between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    names: Vec<String>,
    source_dir: PathBuf,
    dest_dir: PathBuf,
}

impl ArtifactSet {
    pub fn new(names: Vec<String>, source_dir: PathBuf, dest_dir: PathBuf) -> Self {
        Self { names, source_dir, dest_dir }
    }

    pub fn from_config(config: &ArtifactsConfig, root: &Path) -> Self {
        Self::new(
            config.names.clone(),
            paths::resolve(root, &config.source_dir),
            paths::resolve(root, &config.dest_dir),
        )
    }

    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    pub fn artifacts(&self) -> Vec<Artifact> {
        self.names
            .iter()
            .map(|name| {
                let file = format!("{}.{}", name, ARTIFACT_EXTENSION);
                Artifact {
                    name: name.clone(),
                    source: self.source_dir.join(&file),
                    dest: self.dest_dir.join(&file),
                }
            })
            .collect()
    }
}

/// Deployed address recorded in a Truffle artifact for `network_id`.
///
/// Truffle writes `networks.<id>.address` after a successful migration.
pub fn deployed_address(artifact: &Value, network_id: &str) -> Option<String> {
    artifact
        .get("networks")?
        .get(network_id)?
        .get("address")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn artifacts_keep_names_and_order() {
        let set = ArtifactSet::new(
            vec!["DeedRepository".into(), "AuctionRepository".into()],
            PathBuf::from("/work/backend/build/contracts"),
            PathBuf::from("/work/frontend/src/contracts"),
        );
        let artifacts = set.artifacts();

        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0].name, "DeedRepository");
        assert_eq!(
            artifacts[0].source,
            PathBuf::from("/work/backend/build/contracts/DeedRepository.json")
        );
        assert_eq!(
            artifacts[1].dest,
            PathBuf::from("/work/frontend/src/contracts/AuctionRepository.json")
        );
    }

    #[test]
    fn reads_deployed_address_for_network() {
        let artifact = json!({
            "abi": [],
            "networks": { "5777": { "address": "0xbb55adc67f64d1e6f08ba7523ecd2eca2ee434a3" } }
        });
        assert_eq!(
            deployed_address(&artifact, "5777").as_deref(),
            Some("0xbb55adc67f64d1e6f08ba7523ecd2eca2ee434a3")
        );
        assert_eq!(deployed_address(&artifact, "1"), None);
    }

    #[test]
    fn missing_networks_yields_none() {
        assert_eq!(deployed_address(&json!({ "abi": [] }), "5777"), None);
    }
}
