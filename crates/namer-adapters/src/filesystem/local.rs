//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use namer_core::{
    application::{ApplicationError, DirEntry, Filesystem},
    error::{NamerError, NamerResult},
};
use tracing::trace;
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path) -> NamerResult<()> {
        std::fs::create_dir(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn list_dir(&self, path: &Path) -> NamerResult<Vec<DirEntry>> {
        let mut entries = Vec::new();

        // Unsorted: entries come back in the order the OS lists them.
        for walk_entry in WalkDir::new(path).min_depth(1).max_depth(1) {
            let walk_entry = walk_entry.map_err(|e| ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: format!("Failed to list directory: {e}"),
            })?;

            let entry_path = walk_entry.into_path();
            // `is_dir` follows symlinks, so a linked directory is walked too.
            let is_dir = entry_path.is_dir();
            trace!(path = %entry_path.display(), is_dir, "Listed entry");
            entries.push(DirEntry {
                path: entry_path,
                is_dir,
            });
        }

        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> NamerResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write(&self, path: &Path, content: &str) -> NamerResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> NamerError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
