//! Ctrl-C listener backed by `tokio::signal`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::Interrupts;

/// Records operator interrupts instead of letting them kill the process.
///
/// Children in the foreground process group still receive the signal from
/// the terminal, so a foreground dev server stops while devstack survives to
/// release the daemon.
#[derive(Debug, Clone)]
pub struct CtrlCInterrupts {
    flag: Arc<AtomicBool>,
}

impl CtrlCInterrupts {
    /// Install the listener. Returns once the signal handler is registered.
    pub fn install() -> Result<Self, AppError> {
        let flag = Arc::new(AtomicBool::new(false));
        let listener_flag = Arc::clone(&flag);
        let (ready_tx, ready_rx) = mpsc::channel::<Result<(), String>>();

        thread::Builder::new().name("devstack-signals".into()).spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread().enable_io().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    let _ = ready_tx.send(Err(err.to_string()));
                    return;
                }
            };
            runtime.block_on(listen(listener_flag, ready_tx));
        })?;

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self { flag }),
            Ok(Err(details)) => Err(AppError::Io(std::io::Error::other(details))),
            Err(_) => {
                Err(AppError::Io(std::io::Error::other("interrupt listener failed to start")))
            }
        }
    }
}

#[cfg(unix)]
async fn listen(flag: Arc<AtomicBool>, ready: mpsc::Sender<Result<(), String>>) {
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupts = match signal(SignalKind::interrupt()) {
        Ok(stream) => stream,
        Err(err) => {
            let _ = ready.send(Err(err.to_string()));
            return;
        }
    };
    let _ = ready.send(Ok(()));
    while interrupts.recv().await.is_some() {
        debug!("interrupt received");
        flag.store(true, Ordering::SeqCst);
    }
}

#[cfg(not(unix))]
async fn listen(flag: Arc<AtomicBool>, ready: mpsc::Sender<Result<(), String>>) {
    let _ = ready.send(Ok(()));
    while tokio::signal::ctrl_c().await.is_ok() {
        debug!("interrupt received");
        flag.store(true, Ordering::SeqCst);
    }
}

impl Interrupts for CtrlCInterrupts {
    fn interrupted(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
