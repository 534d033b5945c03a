//! Copying compiled contract artifacts into the frontend tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::domain::artifact::deployed_address;
use crate::domain::{AppError, ArtifactSet};

/// Result of publishing one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedArtifact {
    pub name: String,
    pub source: PathBuf,
    pub dest: PathBuf,
    /// Whether the destination content differs from what was there before.
    pub changed: bool,
    pub address: Option<String>,
}

/// Sync state of one artifact, reported by `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactStatus {
    pub name: String,
    pub source_exists: bool,
    pub dest_exists: bool,
    pub in_sync: bool,
    pub address: Option<String>,
}

/// Copy every artifact into the destination directory, overwriting.
///
/// All sources are checked before anything is written.
pub fn publish(
    set: &ArtifactSet,
    network_id: Option<&str>,
) -> Result<Vec<PublishedArtifact>, AppError> {
    let artifacts = set.artifacts();
    if let Some(missing) = artifacts.iter().find(|a| !a.source.is_file()) {
        return Err(AppError::ArtifactMissing(missing.source.clone()));
    }

    fs::create_dir_all(set.dest_dir())?;

    let mut published = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let previous = file_digest(&artifact.dest)?;
        fs::copy(&artifact.source, &artifact.dest)?;
        let current = file_digest(&artifact.dest)?;
        debug!(name = %artifact.name, dest = %artifact.dest.display(), "artifact copied");

        published.push(PublishedArtifact {
            address: network_id.and_then(|id| read_address(&artifact.dest, id)),
            changed: previous != current,
            name: artifact.name,
            source: artifact.source,
            dest: artifact.dest,
        });
    }
    Ok(published)
}

/// Compare sources and destinations without writing anything.
pub fn inspect(
    set: &ArtifactSet,
    network_id: Option<&str>,
) -> Result<Vec<ArtifactStatus>, AppError> {
    set.artifacts()
        .into_iter()
        .map(|artifact| {
            let source = file_digest(&artifact.source)?;
            let dest = file_digest(&artifact.dest)?;
            let address_from = if source.is_some() { &artifact.source } else { &artifact.dest };
            Ok(ArtifactStatus {
                address: network_id.and_then(|id| read_address(address_from, id)),
                source_exists: source.is_some(),
                dest_exists: dest.is_some(),
                in_sync: source.is_some() && source == dest,
                name: artifact.name,
            })
        })
        .collect()
}

fn file_digest(path: &Path) -> Result<Option<Vec<u8>>, AppError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(Sha256::digest(&bytes).to_vec())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn read_address(path: &Path, network_id: &str) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let json: Value = serde_json::from_str(&content).ok()?;
    deployed_address(&json, network_id)
}
