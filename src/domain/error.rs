use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit status reported when the run was cut short by an operator interrupt.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Library-wide error type for devstack operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file could not be located.
    #[error("Config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// Configuration parsed but failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML rendering error.
    #[error("TOML render error: {0}")]
    TomlRender(#[from] toml::ser::Error),

    /// A directory the pipeline depends on is absent.
    #[error("{what} folder not found: {}", path.display())]
    MissingDirectory { what: String, path: PathBuf },

    /// A compiled artifact is absent from the build output.
    #[error("Artifact not found: {}", .0.display())]
    ArtifactMissing(PathBuf),

    /// An external command could not be started.
    #[error("Failed to start '{command}': {details}")]
    CommandSpawn { command: String, details: String },

    /// An external command exited unsuccessfully.
    #[error("Command '{command}' failed with {status}")]
    CommandFailed { command: String, status: String },

    /// Daemon process stopped before it became ready.
    #[error("Daemon exited before becoming ready ({status}); see {}", log_file.display())]
    DaemonExited { status: String, log_file: PathBuf },

    /// Readiness probe exhausted its attempts.
    #[error("Daemon not ready after {attempts} attempts: {last_error}")]
    DaemonNotReady { attempts: u32, last_error: String },

    /// HTTP client setup failure.
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Operator interrupt received before the pipeline finished.
    #[error("Interrupted")]
    Interrupted,
}

impl AppError {
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Interrupted => INTERRUPTED_EXIT_CODE,
            _ => 1,
        }
    }
}
