//! Core domain layer.
//!
//! Pure naming rules with no I/O: what a valid project name is, how the
//! placeholder token is substituted, and where the template keeps its parts.

pub mod error;
pub mod layout;
pub mod placeholder;
pub mod project_name;

pub use error::{DomainError, ErrorCategory};
pub use layout::{DESCRIPTOR_EXTENSION, SOURCE_DIR, TemplateLayout};
pub use placeholder::{DEFAULT_TOKEN, Placeholder};
pub use project_name::{FORBIDDEN_CHARS, ProjectName, strip_quotes};
