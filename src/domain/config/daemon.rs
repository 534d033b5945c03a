//! Storage daemon configuration (`[daemon]` section).

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, CommandSpec};

/// What happens to the daemon when the orchestration ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitPolicy {
    /// Terminate and reap the daemon.
    #[default]
    Stop,
    /// Leave the daemon running after devstack exits.
    Keep,
}

/// How daemon readiness is confirmed after spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessStrategy {
    /// Poll an HTTP endpoint until it answers with 2xx.
    #[default]
    Http,
    /// Run a status command until it exits successfully.
    Command,
    /// Sleep once and assume the daemon is up.
    Delay,
}

/// Daemon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DaemonConfig {
    /// Local state directory; `~` expands to `$HOME`.
    #[serde(default = "default_state_dir")]
    pub state_dir: String,
    /// One-time initialization command.
    #[serde(default = "default_init")]
    pub init: CommandSpec,
    /// Long-running daemon command.
    #[serde(default = "default_start")]
    pub start: CommandSpec,
    /// Captured stdout/stderr of the daemon, relative to the project root.
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default)]
    pub on_exit: ExitPolicy,
    /// Grace period after SIGTERM before the daemon is killed.
    #[serde(default = "default_stop_timeout_ms")]
    pub stop_timeout_ms: u64,
    #[serde(default)]
    pub readiness: ReadinessConfig,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
            init: default_init(),
            start: default_start(),
            log_file: default_log_file(),
            on_exit: ExitPolicy::default(),
            stop_timeout_ms: default_stop_timeout_ms(),
            readiness: ReadinessConfig::default(),
        }
    }
}

impl DaemonConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.state_dir.trim().is_empty() {
            return Err(AppError::invalid_config("daemon.state_dir must not be empty"));
        }
        if self.init.is_empty() {
            return Err(AppError::invalid_config("daemon.init must name a program"));
        }
        if self.start.is_empty() {
            return Err(AppError::invalid_config("daemon.start must name a program"));
        }
        if self.log_file.trim().is_empty() {
            return Err(AppError::invalid_config("daemon.log_file must not be empty"));
        }
        self.readiness.validate()
    }
}

/// Readiness probe configuration (`[daemon.readiness]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadinessConfig {
    #[serde(default)]
    pub strategy: ReadinessStrategy,
    /// Endpoint for the `http` strategy.
    #[serde(default = "default_url")]
    pub url: Url,
    /// Status command for the `command` strategy.
    #[serde(default = "default_status_command")]
    pub command: CommandSpec,
    /// Maximum probe attempts.
    #[serde(default = "default_attempts")]
    pub attempts: u32,
    /// Delay between attempts in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Per-attempt HTTP timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Blind wait for the `delay` strategy.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            strategy: ReadinessStrategy::default(),
            url: default_url(),
            command: default_status_command(),
            attempts: default_attempts(),
            interval_ms: default_interval_ms(),
            timeout_ms: default_timeout_ms(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl ReadinessConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.attempts == 0 {
            return Err(AppError::invalid_config("readiness.attempts must be greater than 0"));
        }
        if self.interval_ms == 0 {
            return Err(AppError::invalid_config("readiness.interval_ms must be greater than 0"));
        }
        if self.timeout_ms == 0 {
            return Err(AppError::invalid_config("readiness.timeout_ms must be greater than 0"));
        }
        if self.strategy == ReadinessStrategy::Http
            && !matches!(self.url.scheme(), "http" | "https")
        {
            return Err(AppError::invalid_config(format!(
                "readiness.url must be http(s), got '{}'",
                self.url
            )));
        }
        if self.strategy == ReadinessStrategy::Command && self.command.is_empty() {
            return Err(AppError::invalid_config("readiness.command must name a program"));
        }
        Ok(())
    }
}

fn default_state_dir() -> String {
    "~/.ipfs".to_string()
}

fn default_init() -> CommandSpec {
    CommandSpec::new(["ipfs", "init"])
}

fn default_start() -> CommandSpec {
    CommandSpec::new(["ipfs", "daemon"])
}

fn default_log_file() -> String {
    ".devstack/daemon.log".to_string()
}

fn default_stop_timeout_ms() -> u64 {
    5000
}

fn default_url() -> Url {
    Url::parse("http://127.0.0.1:5001/api/v0/id").expect("Default readiness URL must be valid")
}

fn default_status_command() -> CommandSpec {
    CommandSpec::new(["ipfs", "id"])
}

fn default_attempts() -> u32 {
    30
}

fn default_interval_ms() -> u64 {
    500
}

fn default_timeout_ms() -> u64 {
    1000
}

fn default_delay_ms() -> u64 {
    5000
}
