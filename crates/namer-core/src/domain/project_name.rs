//! Project name value object.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Characters that may never appear in a project name.
pub const FORBIDDEN_CHARS: &[char] = &[
    '@', '!', '"', '#', '$', '%', '^', '&', '*', '(', ')', '<', '>', '?', '/', '\\', '|', '}',
    '{', '~', ':',
];

/// A project name that passed validation.
///
/// The only way to obtain one is [`ProjectName::parse`], so every
/// `ProjectName` in the program is free of forbidden characters and holds at
/// least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate a raw name. The value is accepted unchanged.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        if let Some(c) = raw.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
            return Err(DomainError::InvalidProjectName {
                reason: format!("contains the forbidden character '{c}'"),
                name: raw,
            });
        }

        if raw.trim().is_empty() {
            return Err(DomainError::InvalidProjectName {
                name: raw,
                reason: "name is blank".into(),
            });
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ProjectName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Remove one pair of enclosing double quotes.
///
/// Only applies when the value both starts and ends with `"`. A lone `"`
/// collapses to the empty string.
pub fn strip_quotes(raw: &str) -> &str {
    if raw.starts_with('"') && raw.ends_with('"') {
        raw.get(1..raw.len() - 1).unwrap_or("")
    } else {
        raw
    }
}
