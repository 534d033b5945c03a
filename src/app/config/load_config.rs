//! Stack configuration loading from the project root.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::config::{self, paths};
use crate::domain::{AppError, StackConfig};

/// Load `devstack.toml` from `root`, or the explicit file when given.
///
/// A relative explicit path is taken from `root`. A missing default file
/// yields the built-in configuration; a missing explicit file is an error.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<StackConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            let path = paths::resolve(root, path);
            if !path.is_file() {
                return Err(AppError::ConfigMissing(path));
            }
            path
        }
        None => {
            let path = paths::config(root);
            if !path.is_file() {
                debug!(root = %root.display(), "no config file, using defaults");
                return Ok(StackConfig::default());
            }
            path
        }
    };

    debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(&path)?;
    config::parse_config_content(&content)
}
