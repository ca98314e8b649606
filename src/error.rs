use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The target is not the kind of entry the operation needs
    /// (a regular file for `open_file`, a directory for `entries`).
    #[error("Cannot proceed: '{path}' does not exist or is not a {expected}.")]
    NotFoundError { path: String, expected: &'static str },

    #[error("Cannot proceed: file '{path}' already exists.")]
    AlreadyExistsError { path: String },

    #[error("Path '{path}' contains invalid Unicode characters.")]
    InvalidUnicodeError { path: String },

    #[error("Invalid glob pattern. Original error: {0}")]
    GlobPatternError(#[from] globset::Error),

    #[error("Failed to read confirmation. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Failed to serialize output. Original error: {0}")]
    SerializeError(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` for [`Error::NotFoundError`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFoundError { .. })
    }

    /// Returns `true` for [`Error::AlreadyExistsError`].
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::AlreadyExistsError { .. })
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(exit_codes::FAILURE);
}
