// ============================================================================
// domain/error.rs - DOMAIN RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Domain errors carry no I/O context: they describe input that breaks a
/// naming rule before anything touches the filesystem.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Placeholder token must not be empty")]
    EmptyPlaceholder,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, .. } => vec![
                format!("The entered name \"{name}\" must not include special characters or line separators"),
                "Forbidden characters: @ ! \" # $ % ^ & * ( ) < > ? / \\ | } { ~ :".into(),
                "Please choose another name and try again".into(),
            ],
            Self::EmptyPlaceholder => {
                vec!["Use a non-empty token such as the template's name".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::EmptyPlaceholder => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
