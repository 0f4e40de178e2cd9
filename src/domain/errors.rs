use std::io;

use thiserror::Error;

/// Errors surfaced to the caller of a prompt.
///
/// Anything the user can fix by typing again is retried inside the prompt
/// and never surfaces here, see [`InputError::is_retryable`].
#[derive(Error, Debug)]
pub enum Errors {
    #[error(transparent)]
    Menu(MenuError),

    #[error("Input stream closed before a valid value was entered")]
    EndOfInput,

    #[error("Input prompt cancelled by user")]
    Cancelled,

    #[error("Failed to access the terminal")]
    Terminal { source: io::Error },

    #[error("No option was selected")]
    NothingSelected,

    #[error("Invalid input {}", .message.to_lowercase())]
    Invalid { message: String },

    #[error("Invalid configuration {}", .message.to_lowercase())]
    Configuration {
        message: String,
        source: anyhow::Error,
    },
}

impl From<io::Error> for Errors {
    fn from(source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::Interrupted => Errors::Cancelled,
            io::ErrorKind::UnexpectedEof => Errors::EndOfInput,
            _ => Errors::Terminal { source },
        }
    }
}

/// Malformed menu, always a programming error.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MenuError {
    #[error("A menu requires at least one option")]
    Empty,

    #[error("Expected {options} option names but found {names}")]
    NameCount { names: usize, options: usize },
}

impl From<MenuError> for Errors {
    fn from(value: MenuError) -> Self {
        Errors::Menu(value)
    }
}

/// Rejection of an already parsed value by a validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        ValidationError {
            message: message.into(),
        }
    }
}

/// Outcome of a single failed prompt attempt.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("{message}")]
    InvalidValue { message: String },

    #[error("Invalid option")]
    InvalidOption,

    #[error(transparent)]
    Validation(ValidationError),

    #[error("Input stream closed")]
    EndOfInput,

    #[error(transparent)]
    Terminal(io::Error),
}

impl InputError {
    pub fn invalid_value<S: Into<String>>(message: S) -> Self {
        InputError::InvalidValue {
            message: message.into(),
        }
    }

    /// Whether the prompt should be shown again instead of giving up.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            InputError::InvalidValue { .. } | InputError::InvalidOption | InputError::Validation(_)
        )
    }
}

impl From<ValidationError> for InputError {
    fn from(value: ValidationError) -> Self {
        InputError::Validation(value)
    }
}

impl From<io::Error> for InputError {
    fn from(value: io::Error) -> Self {
        match value.kind() {
            // Undecodable bytes are a typing mistake, not a broken terminal.
            io::ErrorKind::InvalidData => InputError::invalid_value("You must enter valid text"),
            _ => InputError::Terminal(value),
        }
    }
}

impl From<ValidationError> for Errors {
    fn from(value: ValidationError) -> Self {
        Errors::Invalid {
            message: value.message,
        }
    }
}

impl From<InputError> for Errors {
    fn from(value: InputError) -> Self {
        match value {
            InputError::Terminal(source) => source.into(),
            InputError::EndOfInput => Errors::EndOfInput,
            InputError::Validation(err) => err.into(),
            err @ (InputError::InvalidValue { .. } | InputError::InvalidOption) => {
                Errors::Invalid {
                    message: err.to_string(),
                }
            }
        }
    }
}
