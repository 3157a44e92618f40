pub mod builtins;
pub mod error;
pub mod flags;
pub mod lexer;
pub mod process;
pub mod redirect;
pub mod shell;
