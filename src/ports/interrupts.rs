/// Port for observing operator interrupts.
pub trait Interrupts {
    /// Whether an interrupt has been received since startup.
    fn interrupted(&self) -> bool;
}
