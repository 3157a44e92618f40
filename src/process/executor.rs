use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

use super::ProcessError;
use crate::redirect::{OutputMode, Redirections};

/// Launches external commands in a child process, one at a time.
///
/// The parent blocks on `wait()` until the child is gone, so the shell
/// never has more than one outstanding child.
#[derive(Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        ProcessExecutor
    }

    /// Runs `argv[0]` with the remaining arguments, resolved through PATH,
    /// with its standard streams rebound per `redirects`.
    ///
    /// Redirection targets are opened before the child exists; an open
    /// failure means the command is never launched. A consequence is that
    /// open and lookup failures are reported on the shell's own stderr, so
    /// `cmd 2> f` cannot capture its own "command not found" message in
    /// `f`. The wait returns when the child terminates or stops; the
    /// status is collected but not interpreted.
    pub fn spawn(&self, argv: &[String], redirects: &Redirections) -> Result<(), ProcessError> {
        let program = match argv.first() {
            Some(program) => program,
            None => return Ok(()),
        };

        let mut command = Command::new(program);
        command.args(&argv[1..]);

        match &redirects.input {
            Some(path) => {
                let file = File::open(path).map_err(|source| ProcessError::Redirect {
                    path: path.clone(),
                    source,
                })?;
                command.stdin(Stdio::from(file));
            }
            None => {
                command.stdin(Stdio::inherit());
            }
        }

        match &redirects.output {
            Some(path) => {
                let file = open_for_writing(path, redirects.output_mode)?;
                command.stdout(Stdio::from(file));
            }
            None => {
                command.stdout(Stdio::inherit());
            }
        }

        match &redirects.error {
            Some(path) => {
                let file = open_for_writing(path, OutputMode::Truncate)?;
                command.stderr(Stdio::from(file));
            }
            None => {
                command.stderr(Stdio::inherit());
            }
        }

        // The shell swallows SIGINT; the child must not inherit that, or
        // Ctrl-C could no longer stop a foreground program.
        unsafe {
            command.pre_exec(|| {
                libc::signal(libc::SIGINT, libc::SIG_DFL);
                Ok(())
            });
        }

        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProcessError::CommandNotFound(program.clone()));
            }
            Err(e) => return Err(ProcessError::Spawn(e)),
        };

        // WUNTRACED: a child that stops (SIGSTOP/SIGTSTP) also hands
        // control back to the prompt instead of wedging the loop.
        let mut status: libc::c_int = 0;
        let rc = unsafe {
            libc::waitpid(child.id() as libc::pid_t, &mut status, libc::WUNTRACED)
        };
        if rc == -1 {
            return Err(ProcessError::Wait(std::io::Error::last_os_error()));
        }
        Ok(())
    }
}

fn open_for_writing(path: &str, mode: OutputMode) -> Result<File, ProcessError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).mode(0o644);
    match mode {
        OutputMode::Truncate => {
            options.truncate(true);
        }
        OutputMode::Append => {
            options.append(true);
        }
    }
    options.open(path).map_err(|source| ProcessError::Redirect {
        path: path.to_string(),
        source,
    })
}
