use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::ProcessExecutor;
pub use signal::InterruptState;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    Redirect { path: String, source: std::io::Error },
    Spawn(std::io::Error),
    Wait(std::io::Error),
    Signal(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "command not found: {}", cmd),
            ProcessError::Redirect { path, source } => {
                write!(f, "cannot open '{}': {}", path, source)
            }
            ProcessError::Spawn(e) => write!(f, "failed to create child process: {}", e),
            ProcessError::Wait(e) => write!(f, "failed to wait for child process: {}", e),
            ProcessError::Signal(msg) => write!(f, "signal handler error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}
