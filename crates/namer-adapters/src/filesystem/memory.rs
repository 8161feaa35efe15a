//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use namer_core::{
    application::{ApplicationError, DirEntry, Filesystem},
    error::{NamerError, NamerResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree. Listings come back sorted by path, which
/// makes traversal order deterministic in tests.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_ancestors(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Add a directory and all of its parents (seeding helper).
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut inner = self.inner.write().unwrap();
        inner.add_ancestors(path.as_ref());
    }

    /// Add a file, creating its parents (seeding helper).
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            inner.add_ancestors(parent);
        }
        inner.files.insert(path.to_path_buf(), content.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// List all directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.directories.iter().cloned().collect()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn create_dir(&self, path: &Path) -> NamerResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(path))?;

        if inner.files.contains_key(path) || inner.directories.contains(path) {
            return Err(failure(path, "Failed to create directory: already exists"));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(failure(path, "Parent directory does not exist"));
            }
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> NamerResult<Vec<DirEntry>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned(path))?;

        if !inner.directories.contains(path) {
            return Err(failure(path, "Failed to list directory: not found"));
        }

        let dirs = inner
            .directories
            .iter()
            .filter(|p| p.parent() == Some(path))
            .map(DirEntry::dir);
        let files = inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(path))
            .map(DirEntry::file);

        let mut entries: Vec<DirEntry> = dirs.chain(files).collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> NamerResult<String> {
        let inner = self.inner.read().map_err(|_| lock_poisoned(path))?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| failure(path, "Failed to read file: not found"))
    }

    fn write(&self, path: &Path, content: &str) -> NamerResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned(path))?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(failure(path, "Parent directory does not exist"));
            }
        }
        if inner.directories.contains(path) {
            return Err(failure(path, "Failed to write file: is a directory"));
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

fn failure(path: &Path, reason: &str) -> NamerError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

fn lock_poisoned(path: &Path) -> NamerError {
    failure(path, "memory filesystem lock poisoned")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.create_dir(Path::new("/a/b")).is_err());

        fs.add_dir("/a");
        fs.create_dir(Path::new("/a/b")).unwrap();
        assert!(fs.list_directories().contains(&PathBuf::from("/a/b")));
    }

    #[test]
    fn create_dir_rejects_existing() {
        let fs = MemoryFilesystem::new();
        fs.add_dir("/a");
        assert!(fs.create_dir(Path::new("/a")).is_err());
    }

    #[test]
    fn list_dir_is_sorted_and_shallow() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/t/b.txt", "b");
        fs.add_file("/t/a/deep.txt", "deep");
        fs.add_file("/t/c.txt", "c");

        let entries = fs.list_dir(Path::new("/t")).unwrap();
        assert_eq!(
            entries,
            vec![
                DirEntry::dir("/t/a"),
                DirEntry::file("/t/b.txt"),
                DirEntry::file("/t/c.txt"),
            ]
        );
    }

    #[test]
    fn write_overwrites_and_reads_back() {
        let fs = MemoryFilesystem::new();
        fs.add_dir("/o");
        fs.write(Path::new("/o/f"), "1").unwrap();
        fs.write(Path::new("/o/f"), "2").unwrap();
        assert_eq!(fs.read_to_string(Path::new("/o/f")).unwrap(), "2");
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.add_file("/x/y", "z");
        assert_eq!(other.read_file("/x/y").as_deref(), Some("z"));
        assert_eq!(other.list_files(), vec![PathBuf::from("/x/y")]);
    }
}
