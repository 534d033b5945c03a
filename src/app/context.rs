use std::env;
use std::path::{Path, PathBuf};

use crate::app::config::load_config;
use crate::domain::{AppError, StackConfig};
use crate::ports::{CommandRunner, Interrupts};

/// A resolved project: root directory, home directory and effective config.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    home: Option<PathBuf>,
    config: StackConfig,
}

impl Project {
    /// Resolve the project root (default: current directory) and load its config.
    pub fn open(root: Option<&Path>, config_path: Option<&Path>) -> Result<Self, AppError> {
        let cwd = env::current_dir()?;
        let root = match root {
            Some(root) if root.is_absolute() => root.to_path_buf(),
            Some(root) => cwd.join(root),
            None => cwd,
        };
        if !root.is_dir() {
            return Err(AppError::MissingDirectory {
                what: "Project root".into(),
                path: root,
            });
        }
        let config = load_config(&root, config_path)?;
        let home = env::var_os("HOME").map(PathBuf::from);
        Ok(Self::new(root, home, config))
    }

    pub fn new(root: PathBuf, home: Option<PathBuf>, config: StackConfig) -> Self {
        Self { root, home, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }
}

/// Application context holding dependencies for command execution.
pub struct AppContext<R: CommandRunner, I: Interrupts> {
    project: Project,
    runner: R,
    interrupts: I,
}

impl<R: CommandRunner, I: Interrupts> AppContext<R, I> {
    /// Create a new application context.
    pub fn new(project: Project, runner: R, interrupts: I) -> Self {
        Self { project, runner, interrupts }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn interrupts(&self) -> &I {
        &self.interrupts
    }
}
