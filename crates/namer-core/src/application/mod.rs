//! Application layer.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`ScaffoldService`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! Naming rules live in `crate::domain`; this layer only drives the
//! filesystem with them.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ScaffoldEvent, ScaffoldReport, ScaffoldRequest, ScaffoldService};

pub use ports::{DirEntry, Filesystem};

pub use error::ApplicationError;
