pub mod child_daemon;
pub mod command_readiness;
pub mod ctrl_c;
pub mod http_readiness;
pub mod process_command;
