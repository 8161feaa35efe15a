//! The placeholder token and the two substitutions built on it.

use std::fmt;

use crate::domain::{error::DomainError, project_name::ProjectName};

/// Token the template uses wherever the project name belongs.
pub const DEFAULT_TOKEN: &str = "UnrealSlateAppTemplate";

/// A literal placeholder recognised in path segments and file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    token: String,
}

impl Placeholder {
    /// Build a placeholder from an arbitrary token.
    ///
    /// An empty token is rejected: it would match between every character.
    pub fn new(token: impl Into<String>) -> Result<Self, DomainError> {
        let token = token.into();
        if token.is_empty() {
            return Err(DomainError::EmptyPlaceholder);
        }
        Ok(Self { token })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn occurs_in(&self, text: &str) -> bool {
        text.contains(self.token.as_str())
    }

    /// Derive a destination base name from a source base name.
    ///
    /// Every occurrence of the token is replaced; names without it come back
    /// unchanged.
    pub fn rename(&self, base_name: &str, name: &ProjectName) -> String {
        if self.occurs_in(base_name) {
            base_name.replace(self.token.as_str(), name.as_str())
        } else {
            base_name.to_owned()
        }
    }

    /// Replace every occurrence of the token in file content.
    pub fn substitute(&self, content: &str, name: &ProjectName) -> String {
        content.replace(self.token.as_str(), name.as_str())
    }
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            token: DEFAULT_TOKEN.to_owned(),
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}
