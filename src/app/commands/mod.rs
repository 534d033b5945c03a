pub mod deploy;
pub mod plan;
pub mod publish;
pub mod status;
