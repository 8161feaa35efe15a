//! Fixed layout of the project template on disk.
//!
//! ```text
//! <template root>/                      two levels above the tool directory
//! ├── UnrealSlateAppTemplate.uproject   project descriptor
//! └── Source/                           mirrored recursively
//! ```
//!
//! The layout is an external contract with the template: nothing here is
//! configurable at runtime.

use std::path::{Path, PathBuf};

use crate::domain::placeholder::Placeholder;

/// Name of the template subdirectory that gets mirrored.
pub const SOURCE_DIR: &str = "Source";

/// Extension of the project descriptor file.
pub const DESCRIPTOR_EXTENSION: &str = "uproject";

/// Where the template lives and what it is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLayout {
    placeholder: Placeholder,
    source_dir: &'static str,
    descriptor_extension: &'static str,
}

impl TemplateLayout {
    pub fn new(placeholder: Placeholder) -> Self {
        Self {
            placeholder,
            source_dir: SOURCE_DIR,
            descriptor_extension: DESCRIPTOR_EXTENSION,
        }
    }

    pub fn placeholder(&self) -> &Placeholder {
        &self.placeholder
    }

    /// Template root for a tool running from `tool_dir`.
    ///
    /// The path is joined, not canonicalised, so a missing template surfaces
    /// as an I/O error on first access.
    pub fn template_root(&self, tool_dir: &Path) -> PathBuf {
        tool_dir.join("..").join("..")
    }

    pub fn source_path(&self, template_root: &Path) -> PathBuf {
        template_root.join(self.source_dir)
    }

    /// `<template root>/<token>.<extension>`.
    pub fn descriptor_path(&self, template_root: &Path) -> PathBuf {
        template_root.join(format!(
            "{}.{}",
            self.placeholder.token(),
            self.descriptor_extension
        ))
    }
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self::new(Placeholder::default())
    }
}
