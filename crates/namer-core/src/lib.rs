//! Namer Core - ports and adapters for the template namer.
//!
//! This crate holds the rules for turning the Slate UI project template into
//! a freshly named project, plus the use case that drives a filesystem with
//! them.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          namer-cli (template-namer)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      ScaffoldService (application)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Filesystem port (trait)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   namer-adapters (Local / Memory / ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use namer_core::prelude::*;
//!
//! # fn run(filesystem: Box<dyn Filesystem>) -> NamerResult<()> {
//! let service = ScaffoldService::new(filesystem, TemplateLayout::default());
//! let request = ScaffoldRequest {
//!     name: ProjectName::parse("MyApp")?,
//!     target_path: service.validate_target_path("/tmp/out")?,
//!     template_root: PathBuf::from("../.."),
//! };
//! service.scaffold(&request)?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DirEntry, Filesystem, ScaffoldEvent, ScaffoldReport, ScaffoldRequest, ScaffoldService,
    };
    pub use crate::domain::{Placeholder, ProjectName, TemplateLayout, strip_quotes};
    pub use crate::error::{NamerError, NamerResult};
}
