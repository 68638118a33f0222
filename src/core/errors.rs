use std::result::Result as StdResult;

use thiserror::Error;

use crate::finance::ValidationError;

/// Unified error type for the service, storage and configuration layers.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Expense not found: {0}")]
    ExpenseNotFound(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
    #[error("Terminal error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}

impl From<crate::domain::ParseFrequencyError> for BudgetError {
    fn from(err: crate::domain::ParseFrequencyError) -> Self {
        BudgetError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_display_their_message() {
        let err = BudgetError::from(ValidationError::NameRequired);
        assert_eq!(err.to_string(), "Name is required.");
    }

    #[test]
    fn io_errors_become_storage_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(BudgetError::from(io), BudgetError::StorageError(_)));
    }
}
