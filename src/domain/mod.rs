pub mod artifact;
pub mod command;
pub mod config;
pub mod error;
pub mod step;

pub use artifact::{Artifact, ArtifactSet};
pub use command::CommandSpec;
pub use config::{
    ArtifactsConfig, ContractsConfig, DaemonConfig, ExitPolicy, FrontendConfig, ReadinessConfig,
    ReadinessStrategy, StackConfig,
};
pub use error::{AppError, INTERRUPTED_EXIT_CODE};
pub use step::{Step, StepAction, StepKind};
