//! Unified error handling for the namer core.
//!
//! Wraps domain and application errors in one type so callers can match a
//! single enum and ask it for suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NamerError {
    /// Errors from the domain layer (naming rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl NamerError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// See [`ApplicationError::is_root_creation_failure`].
    pub fn is_root_creation_failure(&self) -> bool {
        matches!(self, Self::Application(e) if e.is_root_creation_failure())
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Internal,
}

/// Convenient result type alias.
pub type NamerResult<T> = Result<T, NamerError>;
