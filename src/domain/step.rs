//! Pipeline steps and the ordered plan derived from configuration.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::config::paths;
use crate::domain::{CommandSpec, StackConfig};

/// The six pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepKind {
    Init,
    DaemonStart,
    Compile,
    Migrate,
    Publish,
    Serve,
}

impl StepKind {
    pub const ALL: [StepKind; 6] = [
        StepKind::Init,
        StepKind::DaemonStart,
        StepKind::Compile,
        StepKind::Migrate,
        StepKind::Publish,
        StepKind::Serve,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StepKind::Init => "init",
            StepKind::DaemonStart => "daemon-start",
            StepKind::Compile => "compile",
            StepKind::Migrate => "migrate",
            StepKind::Publish => "publish",
            StepKind::Serve => "serve",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// What a step does when it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Run `command` only if `state_dir` is missing.
    InitIfMissing { state_dir: PathBuf, command: CommandSpec },
    /// Spawn `command` in the background, logging to `log_file`.
    Background { command: CommandSpec, log_file: PathBuf },
    /// Run `command` to completion.
    Run { command: CommandSpec },
    /// Copy artifacts between directories.
    CopyArtifacts { names: Vec<String>, source_dir: PathBuf, dest_dir: PathBuf },
    /// Run `command` in the foreground until it exits.
    Foreground { command: CommandSpec },
}

/// A step descriptor: kind, action and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub action: StepAction,
    pub cwd: PathBuf,
}

impl Step {
    /// Human-readable summary of the action, used by `plan`.
    pub fn describe(&self) -> String {
        match &self.action {
            StepAction::InitIfMissing { state_dir, command } => {
                format!("{} (unless {} exists)", command, state_dir.display())
            }
            StepAction::Background { command, log_file } => {
                format!("{} & (log: {})", command, log_file.display())
            }
            StepAction::Run { command } | StepAction::Foreground { command } => command.to_string(),
            StepAction::CopyArtifacts { names, source_dir, dest_dir } => format!(
                "copy {} from {} to {}",
                names.iter().map(|n| format!("{}.json", n)).collect::<Vec<_>>().join(", "),
                source_dir.display(),
                dest_dir.display()
            ),
        }
    }
}

/// Build the ordered step plan for a project root.
pub fn plan(config: &StackConfig, root: &Path, home: Option<&Path>) -> Vec<Step> {
    let contracts_dir = paths::resolve(root, &config.contracts.dir);
    vec![
        Step {
            kind: StepKind::Init,
            action: StepAction::InitIfMissing {
                state_dir: paths::expand_home(&config.daemon.state_dir, home),
                command: config.daemon.init.clone(),
            },
            cwd: root.to_path_buf(),
        },
        Step {
            kind: StepKind::DaemonStart,
            action: StepAction::Background {
                command: config.daemon.start.clone(),
                log_file: paths::resolve(root, &config.daemon.log_file),
            },
            cwd: root.to_path_buf(),
        },
        Step {
            kind: StepKind::Compile,
            action: StepAction::Run { command: config.contracts.compile.clone() },
            cwd: contracts_dir.clone(),
        },
        Step {
            kind: StepKind::Migrate,
            action: StepAction::Run { command: config.contracts.migrate.clone() },
            cwd: contracts_dir,
        },
        Step {
            kind: StepKind::Publish,
            action: StepAction::CopyArtifacts {
                names: config.artifacts.names.clone(),
                source_dir: paths::resolve(root, &config.artifacts.source_dir),
                dest_dir: paths::resolve(root, &config.artifacts.dest_dir),
            },
            cwd: root.to_path_buf(),
        },
        Step {
            kind: StepKind::Serve,
            action: StepAction::Foreground { command: config.frontend.serve.clone() },
            cwd: paths::resolve(root, &config.frontend.dir),
        },
    ]
}
