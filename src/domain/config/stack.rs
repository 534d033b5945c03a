//! Stack configuration loaded from `devstack.toml`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::config::DaemonConfig;
use crate::domain::{AppError, CommandSpec};

/// Top-level configuration for a devstack run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StackConfig {
    #[serde(default)]
    pub daemon: DaemonConfig,
    #[serde(default)]
    pub contracts: ContractsConfig,
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
}

impl StackConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.daemon.validate()?;
        self.contracts.validate()?;
        self.artifacts.validate()?;
        self.frontend.validate()?;
        Ok(())
    }
}

/// Contract toolchain configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractsConfig {
    /// Working directory for compile and migrate, relative to the root.
    #[serde(default = "default_contracts_dir")]
    pub dir: String,
    #[serde(default = "default_compile")]
    pub compile: CommandSpec,
    #[serde(default = "default_migrate")]
    pub migrate: CommandSpec,
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            dir: default_contracts_dir(),
            compile: default_compile(),
            migrate: default_migrate(),
        }
    }
}

impl ContractsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.dir.trim().is_empty() {
            return Err(AppError::invalid_config("contracts.dir must not be empty"));
        }
        if self.compile.is_empty() {
            return Err(AppError::invalid_config("contracts.compile must name a program"));
        }
        if self.migrate.is_empty() {
            return Err(AppError::invalid_config("contracts.migrate must name a program"));
        }
        Ok(())
    }
}

/// Artifact publishing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactsConfig {
    /// Artifact file stems, copied in this order.
    #[serde(default = "default_artifact_names")]
    pub names: Vec<String>,
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    #[serde(default = "default_dest_dir")]
    pub dest_dir: String,
    /// Network whose deployed address is reported, e.g. Ganache's `5777`.
    #[serde(default = "default_network_id", skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            names: default_artifact_names(),
            source_dir: default_source_dir(),
            dest_dir: default_dest_dir(),
            network_id: default_network_id(),
        }
    }
}

impl ArtifactsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.names.is_empty() {
            return Err(AppError::invalid_config("artifacts.names must not be empty"));
        }
        let mut seen = HashSet::new();
        for name in &self.names {
            if !is_valid_artifact_name(name) {
                return Err(AppError::invalid_config(format!(
                    "artifacts.names entry '{}' must be a plain file stem",
                    name
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(AppError::invalid_config(format!(
                    "artifacts.names lists '{}' more than once",
                    name
                )));
            }
        }
        if self.source_dir.trim().is_empty() || self.dest_dir.trim().is_empty() {
            return Err(AppError::invalid_config(
                "artifacts.source_dir and artifacts.dest_dir must not be empty",
            ));
        }
        Ok(())
    }
}

fn is_valid_artifact_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}

/// Frontend dev server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrontendConfig {
    #[serde(default = "default_frontend_dir")]
    pub dir: String,
    #[serde(default = "default_serve")]
    pub serve: CommandSpec,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self { dir: default_frontend_dir(), serve: default_serve() }
    }
}

impl FrontendConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.dir.trim().is_empty() {
            return Err(AppError::invalid_config("frontend.dir must not be empty"));
        }
        if self.serve.is_empty() {
            return Err(AppError::invalid_config("frontend.serve must name a program"));
        }
        Ok(())
    }
}

fn default_contracts_dir() -> String {
    "backend".to_string()
}

fn default_compile() -> CommandSpec {
    CommandSpec::new(["truffle", "compile"])
}

fn default_migrate() -> CommandSpec {
    CommandSpec::new(["truffle", "migrate", "--network", "ganache"])
}

fn default_artifact_names() -> Vec<String> {
    vec!["DeedRepository".to_string(), "AuctionRepository".to_string()]
}

fn default_source_dir() -> String {
    "backend/build/contracts".to_string()
}

fn default_dest_dir() -> String {
    "frontend/src/contracts".to_string()
}

fn default_network_id() -> Option<String> {
    Some("5777".to_string())
}

fn default_frontend_dir() -> String {
    "frontend".to_string()
}

fn default_serve() -> CommandSpec {
    CommandSpec::new(["npm", "run", "dev"])
}
