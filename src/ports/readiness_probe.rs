use crate::domain::AppError;

/// Port for checking whether the daemon is serving requests.
pub trait ReadinessProbe {
    /// Single readiness check.
    fn check(&self) -> Result<(), AppError>;

    /// Short description for progress output.
    fn target(&self) -> String;
}
