//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the scaffold use case needs from the outside
//! world. The `namer-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::NamerResult;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `namer_adapters::LocalFilesystem` (production)
/// - `namer_adapters::MemoryFilesystem` (testing)
/// - `namer_adapters::PreviewFilesystem` (dry runs)
///
/// All calls are blocking. Implementations must not hold file handles
/// between calls.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a single directory. Fails if it is already present.
    fn create_dir(&self, path: &Path) -> NamerResult<()>;

    /// List the direct children of a directory.
    ///
    /// Order is whatever the backend yields; callers must not rely on it.
    fn list_dir(&self, path: &Path) -> NamerResult<Vec<DirEntry>>;

    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> NamerResult<String>;

    /// Write content to a file, truncating any previous content.
    fn write(&self, path: &Path, content: &str) -> NamerResult<()>;
}
