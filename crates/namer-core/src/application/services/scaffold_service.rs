//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Create the empty destination root `<target>/<name>`
//! 2. Mirror `<template root>/Source` into it, renaming as it goes
//! 3. Copy the project descriptor next to it
//!
//! The walk is a plain pre-order depth-first recursion. Nothing is rolled
//! back when a step fails.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{DirEntry, Filesystem},
    },
    domain::{ProjectName, TemplateLayout},
    error::{NamerError, NamerResult},
};

/// Everything one scaffold run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub name: ProjectName,
    /// Existing parent directory that receives `<name>/`.
    pub target_path: PathBuf,
    pub template_root: PathBuf,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub template_root: PathBuf,
    /// Directories created by this run, the root included.
    pub directories: usize,
    pub files: usize,
}

/// Progress notifications, emitted in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldEvent<'a> {
    RootCreated(&'a Path),
    TemplateResolved(&'a Path),
    DirectoryCreated(&'a Path),
    FileWritten(&'a Path),
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    layout: TemplateLayout,
}

impl ScaffoldService {
    /// Create a new scaffold service over the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>, layout: TemplateLayout) -> Self {
        Self { filesystem, layout }
    }

    pub fn layout(&self) -> &TemplateLayout {
        &self.layout
    }

    /// Check that the destination parent exists.
    ///
    /// Existence is the only check: neither write permission nor being a
    /// directory is verified.
    pub fn validate_target_path(&self, raw: impl AsRef<Path>) -> NamerResult<PathBuf> {
        let path = raw.as_ref();
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::PathNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(path.to_path_buf())
    }

    /// Destination base name for a source path.
    pub fn derive_destination_name(&self, src: &Path, name: &ProjectName) -> String {
        let base = src
            .components()
            .next_back()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .unwrap_or_default();
        self.layout.placeholder().rename(&base, name)
    }

    /// Copy one file into `dst_dir`, substituting the placeholder in both its
    /// name and its content. An existing destination file is overwritten.
    pub fn copy_file(
        &self,
        src: &Path,
        dst_dir: &Path,
        name: &ProjectName,
    ) -> NamerResult<PathBuf> {
        let dst = dst_dir.join(self.derive_destination_name(src, name));

        let content = self.filesystem.read_to_string(src)?;
        let content = self.layout.placeholder().substitute(&content, name);
        self.filesystem.write(&dst, &content)?;

        debug!(src = %src.display(), dst = %dst.display(), "File copied");
        Ok(dst)
    }

    /// Mirror `src_dir` under `dst_parent`, returning the mirrored directory.
    ///
    /// Safe to call twice on the same destination: existing directories are
    /// reused and contained files overwritten.
    pub fn mirror_dir(
        &self,
        src_dir: &Path,
        dst_parent: &Path,
        name: &ProjectName,
    ) -> NamerResult<PathBuf> {
        let mut report = ScaffoldReport::default();
        self.mirror_into(src_dir, dst_parent, name, &mut report, &mut |_| {})
    }

    /// Create `<target_path>/<name>`.
    ///
    /// Fails if the directory already exists or cannot be created. Nothing is
    /// written in that case.
    pub fn create_root(&self, target_path: &Path, name: &ProjectName) -> NamerResult<PathBuf> {
        let root = target_path.join(name.as_str());

        if let Err(e) = self.filesystem.create_dir(&root) {
            if self.filesystem.exists(&root) {
                return Err(ApplicationError::DestinationExists { path: root }.into());
            }
            let reason = match e {
                NamerError::Application(ApplicationError::Filesystem { reason, .. }) => reason,
                other => other.to_string(),
            };
            return Err(ApplicationError::DestinationCreateFailed { path: root, reason }.into());
        }

        info!(root = %root.display(), "Successfully created the destination root");
        Ok(root)
    }

    /// Scaffold a whole project.
    pub fn scaffold(&self, request: &ScaffoldRequest) -> NamerResult<ScaffoldReport> {
        self.scaffold_with(request, |_| {})
    }

    /// [`Self::scaffold`], reporting progress to `on_event`.
    #[instrument(
        skip_all,
        fields(
            project = %request.name,
            target = %request.target_path.display(),
        )
    )]
    pub fn scaffold_with<F>(
        &self,
        request: &ScaffoldRequest,
        mut on_event: F,
    ) -> NamerResult<ScaffoldReport>
    where
        F: FnMut(ScaffoldEvent<'_>),
    {
        let name = &request.name;

        // 1. Destination root; a conflict here stops the run
        let root = self.create_root(&request.target_path, name)?;
        on_event(ScaffoldEvent::RootCreated(&root));

        let mut report = ScaffoldReport {
            root: root.clone(),
            template_root: request.template_root.clone(),
            directories: 1,
            files: 0,
        };

        info!(template = %request.template_root.display(), "Template resolved");
        on_event(ScaffoldEvent::TemplateResolved(&request.template_root));

        // 2. Source tree
        let source = self.layout.source_path(&request.template_root);
        self.mirror_into(&source, &root, name, &mut report, &mut on_event)?;

        // 3. Project descriptor
        let descriptor = self.layout.descriptor_path(&request.template_root);
        let written = self.copy_file(&descriptor, &root, name)?;
        report.files += 1;
        on_event(ScaffoldEvent::FileWritten(&written));

        info!(
            directories = report.directories,
            files = report.files,
            "Scaffold completed successfully"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn mirror_into(
        &self,
        src_dir: &Path,
        dst_parent: &Path,
        name: &ProjectName,
        report: &mut ScaffoldReport,
        on_event: &mut dyn FnMut(ScaffoldEvent<'_>),
    ) -> NamerResult<PathBuf> {
        let dst = dst_parent.join(self.derive_destination_name(src_dir, name));

        if !self.filesystem.exists(&dst) {
            self.filesystem.create_dir(&dst)?;
            report.directories += 1;
            debug!(dir = %dst.display(), "Directory created");
            on_event(ScaffoldEvent::DirectoryCreated(&dst));
        }

        for DirEntry { path, is_dir } in self.filesystem.list_dir(src_dir)? {
            if is_dir {
                self.mirror_into(&path, &dst, name, report, on_event)?;
            } else {
                let written = self.copy_file(&path, &dst, name)?;
                report.files += 1;
                on_event(ScaffoldEvent::FileWritten(&written));
            }
        }

        Ok(dst)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
