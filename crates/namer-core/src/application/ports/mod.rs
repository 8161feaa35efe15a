//! Application ports (traits) for external dependencies.
//!
//! - **Driven (Output) Ports**: called by the scaffold service, implemented
//!   by infrastructure
//!   - `Filesystem`: directory listing, file reads and writes

pub mod output;

#[cfg(test)]
pub use output::MockFilesystem;
pub use output::{DirEntry, Filesystem};
