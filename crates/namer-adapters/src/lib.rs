//! Infrastructure adapters for the template namer.
//!
//! This crate implements the ports defined in `namer-core::application::ports`.
//! It contains all real I/O.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem, PreviewFilesystem};
