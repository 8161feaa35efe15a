//! Application layer errors.
//!
//! These errors represent failures while talking to the filesystem, not
//! naming-rule violations. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during scaffold orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The destination parent does not exist.
    #[error("The specified path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// The destination root is already present.
    #[error("Creation of the directory {path} failed: it already exists")]
    DestinationExists { path: PathBuf },

    /// The destination root could not be created for another reason.
    #[error("Creation of the directory {path} failed: {reason}")]
    DestinationCreateFailed { path: PathBuf, reason: String },

    /// Any other filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PathNotFound { path } => vec![
                format!("'{}' was not found", path.display()),
                "The destination parent directory must exist before running".into(),
            ],
            Self::DestinationExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::DestinationCreateFailed { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the template is intact and readable".into(),
                "Files already written were left in place".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PathNotFound { .. } => ErrorCategory::NotFound,
            Self::DestinationExists { .. } | Self::DestinationCreateFailed { .. } => {
                ErrorCategory::Conflict
            }
            Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` for failures to create the destination root.
    ///
    /// These abort the run before anything else is written.
    pub fn is_root_creation_failure(&self) -> bool {
        matches!(
            self,
            Self::DestinationExists { .. } | Self::DestinationCreateFailed { .. }
        )
    }
}
