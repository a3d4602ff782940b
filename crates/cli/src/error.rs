//! Errors reported by the command-line front end.

use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug)]
pub enum CliError {
    /// Reading input or writing output failed.
    Io(io::Error),
    /// The input could not be parsed.
    Input { message: String },
    /// An algorithm rejected its arguments.
    Algorithm(classics_core::Error),
}

impl CliError {
    pub fn input(message: impl Into<String>) -> Self {
        CliError::Input {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(err) => write!(f, "I/O error: {}", err),
            CliError::Input { message } => write!(f, "Invalid input: {}", message),
            CliError::Algorithm(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(err) => Some(err),
            CliError::Algorithm(err) => Some(err),
            CliError::Input { .. } => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<classics_core::Error> for CliError {
    fn from(err: classics_core::Error) -> Self {
        CliError::Algorithm(err)
    }
}
