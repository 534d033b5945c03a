use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::domain::{AppError, CommandSpec};
use crate::ports::ReadinessProbe;

/// Probes readiness by running a status command; zero exit means ready.
#[derive(Debug, Clone)]
pub struct CommandReadinessProbe {
    command: CommandSpec,
    cwd: PathBuf,
}

impl CommandReadinessProbe {
    pub fn new(command: CommandSpec, cwd: PathBuf) -> Self {
        Self { command, cwd }
    }
}

impl ReadinessProbe for CommandReadinessProbe {
    fn check(&self) -> Result<(), AppError> {
        let output = Command::new(self.command.program())
            .args(self.command.args())
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AppError::CommandSpawn {
                command: self.command.to_string(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::CommandFailed {
                command: self.command.to_string(),
                status: if stderr.is_empty() { output.status.to_string() } else { stderr },
            });
        }
        Ok(())
    }

    fn target(&self) -> String {
        self.command.to_string()
    }
}
