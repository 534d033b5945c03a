pub mod adapters;
pub mod artifact_publisher;
mod daemon_guard;
pub mod logging;
pub mod readiness;

pub use adapters::ctrl_c::CtrlCInterrupts;
pub use adapters::process_command::SystemCommandRunner;
pub use daemon_guard::DaemonGuard;
