//! invec-cli: an interactive menu over a small-buffer integer vector.
//!
//! The program speaks a line-oriented protocol on stdin/stdout: it prints a
//! numbered menu, reads one choice line, performs the chosen vector operation,
//! prints a fixed response, and repeats until the user picks `Exit` or the
//! input stream ends.

pub mod menu;
pub mod session;

pub use menu::Choice;
pub use session::{Outcome, run_session};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
