//! Dry-run adapter: reads hit the disk, writes stay in memory.

use std::path::{Path, PathBuf};

use namer_core::{
    application::{ApplicationError, DirEntry, Filesystem},
    error::NamerResult,
};
use tracing::debug;

use super::{LocalFilesystem, MemoryFilesystem};

/// Filesystem that reads the real template but never mutates the disk.
///
/// Every directory created and file written lands in an in-memory overlay;
/// [`PreviewFilesystem::planned`] lists them afterwards.
#[derive(Debug, Clone, Default)]
pub struct PreviewFilesystem {
    disk: LocalFilesystem,
    overlay: MemoryFilesystem,
}

impl PreviewFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths the run would have created, sorted, directories and files mixed.
    ///
    /// Ancestors the overlay tracks for bookkeeping (the target path and
    /// above) are left out.
    pub fn planned(&self) -> Vec<PathBuf> {
        let mut planned: Vec<PathBuf> = self
            .overlay
            .list_directories()
            .into_iter()
            .filter(|dir| !self.disk.exists(dir))
            .chain(self.overlay.list_files())
            .collect();
        planned.sort();
        planned
    }
}

impl Filesystem for PreviewFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.overlay.exists(path) || self.disk.exists(path)
    }

    fn create_dir(&self, path: &Path) -> NamerResult<()> {
        if self.exists(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "Failed to create directory: already exists".into(),
            }
            .into());
        }
        debug!(dir = %path.display(), "Would create directory");
        self.overlay.add_dir(path);
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> NamerResult<Vec<DirEntry>> {
        self.disk.list_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> NamerResult<String> {
        match self.overlay.read_file(path) {
            Some(content) => Ok(content),
            None => self.disk.read_to_string(path),
        }
    }

    fn write(&self, path: &Path, content: &str) -> NamerResult<()> {
        debug!(file = %path.display(), bytes = content.len(), "Would write file");
        self.overlay.add_file(path, content);
        Ok(())
    }
}
