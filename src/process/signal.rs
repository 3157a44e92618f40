use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::ProcessError;

/// Whether the shell is currently blocked reading a line.
///
/// The loop arms this immediately before calling into the line editor and
/// disarms it as soon as the read returns. The SIGINT handler consults it:
/// armed means "break the prompt line and let the loop re-prompt", idle
/// means the signal is none of our business (a child in the foreground
/// process group handles its own copy).
#[derive(Clone)]
pub struct InterruptState {
    armed: Arc<AtomicBool>,
}

impl Default for InterruptState {
    fn default() -> Self {
        Self::new()
    }
}

impl InterruptState {
    pub fn new() -> Self {
        InterruptState {
            armed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    pub fn disarm(&self) {
        self.armed.store(false, Ordering::SeqCst);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }
}

/// Installs the process-wide SIGINT handler. Call once at startup; the
/// handler never terminates the shell.
pub fn install_handler(state: &InterruptState) -> Result<(), ProcessError> {
    let armed = state.clone();
    ctrlc::set_handler(move || {
        if armed.is_armed() {
            println!();
        }
    })
    .map_err(|e| ProcessError::Signal(e.to_string()))
}
