mod command_runner;
mod interrupts;
mod readiness_probe;

pub use command_runner::{CommandRunner, DaemonProcess};
pub use interrupts::Interrupts;
pub use readiness_probe::ReadinessProbe;
