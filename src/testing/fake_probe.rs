use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::AppError;
use crate::ports::{Interrupts, ReadinessProbe};

/// Probe that succeeds on a chosen attempt.
pub struct FakeProbe {
    ready_on: Option<u32>,
    calls: Cell<u32>,
}

impl FakeProbe {
    pub fn ready_after(attempts: u32) -> Self {
        Self { ready_on: Some(attempts), calls: Cell::new(0) }
    }

    pub fn never_ready() -> Self {
        Self { ready_on: None, calls: Cell::new(0) }
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl ReadinessProbe for FakeProbe {
    fn check(&self) -> Result<(), AppError> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        match self.ready_on {
            Some(n) if call >= n => Ok(()),
            _ => Err(AppError::Http("connection refused".into())),
        }
    }

    fn target(&self) -> String {
        "fake".to_string()
    }
}

/// Interrupt flag shared between a test and the fakes that raise it.
#[derive(Clone, Default)]
pub struct FakeInterrupts {
    raised: Arc<AtomicBool>,
}

impl FakeInterrupts {
    pub fn raised() -> Self {
        let interrupts = Self::default();
        interrupts.raise();
        interrupts
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }
}

impl Interrupts for FakeInterrupts {
    fn interrupted(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}
