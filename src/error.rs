//! Error handling for the esyt driver.
//! Parsing and validating flags never fail; everything that touches the
//! terminal, the filesystem or child processes reports through [`Error`].

use std::io;
use thiserror::Error;

/// Custom error types for esyt operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors in a preset file (esyt.json, esyt.yml, esyt.yaml)
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents failures of the interactive prompts
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents errors that occur while rendering command or help templates
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur while initializing the git repository
    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    /// A child process exited unsuccessfully
    #[error("Command '{command}' failed: {status}.")]
    CommandError { command: String, status: String },

    /// Represents values that cannot be turned into a project
    #[error("Validation error: {0}.")]
    ValidationError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
