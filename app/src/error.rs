//! Error handling for the Smooth Business app
//!
//! Two error domains exist and do not overlap: per-field form validation
//! (surfaced inline by the screens, never reaches the store) and store-level
//! errors, which today means lookups by unknown id.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    /// Lookup by an id that is not in the store. Mutations that hit this
    /// leave the collection untouched.
    #[error("{0} not found")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for store and screen operations
pub type AppResult<T> = Result<T, AppError>;
