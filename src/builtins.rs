use std::env;
use std::fmt;
use std::path::Path;

/// Commands that run inside the shell process instead of a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Cd,
    Exit,
}

impl Builtin {
    pub fn lookup(name: &str) -> Option<Builtin> {
        match name {
            "cd" => Some(Builtin::Cd),
            "exit" => Some(Builtin::Exit),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum BuiltinError {
    MissingOperand,
    ChangeDirectory { path: String, source: std::io::Error },
}

impl fmt::Display for BuiltinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuiltinError::MissingOperand => {
                write!(f, "cd: missing operand\nUsage: cd <directory>")
            }
            BuiltinError::ChangeDirectory { path, source } => {
                write!(f, "cd: cannot change directory to '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for BuiltinError {}

/// The `cd` builtin. The working directory is process-global state, so a
/// successful change is visible in the next prompt.
pub fn change_directory(args: &[String]) -> Result<(), BuiltinError> {
    let path = args.first().ok_or(BuiltinError::MissingOperand)?;
    env::set_current_dir(Path::new(path)).map_err(|source| BuiltinError::ChangeDirectory {
        path: path.clone(),
        source,
    })
}
