use std::env;
use std::path::PathBuf;

use rustyline::DefaultEditor;

use crate::builtins::{self, Builtin};
use crate::error::ShellError;
use crate::flags::Flags;
use crate::lexer;
use crate::process::{signal, InterruptState, ProcessExecutor};
use crate::redirect::Redirections;

#[derive(Debug, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

pub struct Shell {
    editor: DefaultEditor,
    flags: Flags,
    executor: ProcessExecutor,
    interrupts: InterruptState,
    history_path: PathBuf,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mut editor = DefaultEditor::new()?;

        let history_path = dirs::home_dir()
            .ok_or(ShellError::HomeDirNotFound)?
            .join(".limpet_history");
        if history_path.exists() {
            if let Err(e) = editor.load_history(&history_path) {
                if !flags.is_set("quiet") {
                    eprintln!("Warning: Couldn't load history: {}", e);
                }
            }
        }

        let interrupts = InterruptState::new();
        signal::install_handler(&interrupts)?;

        Ok(Shell {
            editor,
            flags,
            executor: ProcessExecutor::new(),
            interrupts,
            history_path,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = self.prompt();

            // Armed only while the read blocks; SIGINT at any other time
            // is left to whoever is in the foreground.
            self.interrupts.arm();
            let line = self.editor.readline(&prompt);
            self.interrupts.disarm();

            match line {
                Ok(line) => {
                    if line.is_empty() {
                        continue;
                    }
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        if !self.flags.is_set("quiet") {
                            eprintln!("Warning: Couldn't add to history: {}", e);
                        }
                    }

                    match self.execute_line(&line) {
                        Ok(LoopControl::Continue) => {}
                        Ok(LoopControl::Exit) => break,
                        Err(e) => eprintln!("{}", e),
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!();
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    continue;
                }
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_path) {
            if !self.flags.is_set("quiet") {
                eprintln!("Warning: Couldn't save history: {}", e);
            }
        }
        Ok(())
    }

    fn execute_line(&mut self, line: &str) -> Result<LoopControl, ShellError> {
        dispatch_line(line, &self.executor)
    }

    fn prompt(&self) -> String {
        match env::current_dir() {
            Ok(dir) => format!("{}> ", dir.display()),
            Err(e) => {
                eprintln!("Warning: Unable to determine current directory: {}", e);
                "???> ".to_string()
            }
        }
    }
}

/// One line from tokens to action: tokenize, strip redirections, then run
/// a builtin in-process or hand the argv to the executor. Builtins discard
/// any redirections found on their line.
fn dispatch_line(line: &str, executor: &ProcessExecutor) -> Result<LoopControl, ShellError> {
    let mut argv = lexer::tokenize(line);
    let redirects = Redirections::extract(&mut argv);

    let command = match argv.first() {
        Some(command) => command.as_str(),
        None => return Ok(LoopControl::Continue),
    };

    match Builtin::lookup(command) {
        Some(Builtin::Exit) => Ok(LoopControl::Exit),
        Some(Builtin::Cd) => {
            builtins::change_directory(&argv[1..])?;
            Ok(LoopControl::Continue)
        }
        None => {
            executor.spawn(&argv, &redirects)?;
            Ok(LoopControl::Continue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::BuiltinError;
    use crate::process::ProcessError;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("limpet_shell_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_exit_ignores_trailing_arguments() {
        let executor = ProcessExecutor::new();
        let control = dispatch_line("exit extra args", &executor).unwrap();
        assert_eq!(control, LoopControl::Exit);
    }

    #[test]
    fn test_blank_line_is_discarded() {
        let executor = ProcessExecutor::new();
        assert_eq!(
            dispatch_line("   ", &executor).unwrap(),
            LoopControl::Continue
        );
    }

    #[test]
    fn test_exit_ignores_redirections() {
        let executor = ProcessExecutor::new();
        let target = temp_path("exit_redirect");

        let line = format!("exit > {}", target.display());
        let control = dispatch_line(&line, &executor).unwrap();

        assert_eq!(control, LoopControl::Exit);
        assert!(!target.exists());
    }

    #[test]
    fn test_cd_ignores_redirections() {
        let executor = ProcessExecutor::new();
        let target = temp_path("cd_redirect");

        // The redirection is stripped before dispatch, so cd sees no
        // operand; the target file must never be created either way.
        let line = format!("cd > {}", target.display());
        let result = dispatch_line(&line, &executor);

        assert!(matches!(
            result,
            Err(ShellError::Builtin(BuiltinError::MissingOperand))
        ));
        assert!(!target.exists());
    }

    #[test]
    fn test_unknown_command_routes_to_executor() {
        let executor = ProcessExecutor::new();
        let result = dispatch_line("definitely_not_a_real_command_xyz", &executor);
        assert!(matches!(
            result,
            Err(ShellError::Process(ProcessError::CommandNotFound(_)))
        ));
    }

    #[test]
    fn test_external_command_dispatch() {
        let executor = ProcessExecutor::new();
        let out = temp_path("dispatch_out");

        let line = format!("sh -c true > {}", out.display());
        assert_eq!(
            dispatch_line(&line, &executor).unwrap(),
            LoopControl::Continue
        );

        // The external path honors redirections: the target exists.
        assert!(out.exists());
        fs::remove_file(out).unwrap();
    }
}
