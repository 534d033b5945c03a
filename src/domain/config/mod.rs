pub mod daemon;
pub mod parse;
pub mod paths;
pub mod stack;

pub use daemon::{DaemonConfig, ExitPolicy, ReadinessConfig, ReadinessStrategy};
pub use parse::{parse_config_content, render_config};
pub use stack::{ArtifactsConfig, ContractsConfig, FrontendConfig, StackConfig};
