mod fake_probe;
mod fake_runner;

pub use fake_probe::{FakeInterrupts, FakeProbe};
pub use fake_runner::{CallLog, FakeCommandRunner, FakeDaemon};
