//! Filesystem adapters.

mod local;
mod memory;
mod preview;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
pub use preview::PreviewFilesystem;
