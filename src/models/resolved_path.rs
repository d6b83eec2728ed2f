//! Resolved paths and their form.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::FolderKind;

/// Whether a composed path names a file or a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathForm {
    /// Bare file path, no trailing separator.
    File,
    /// Directory path ending in exactly one separator.
    Folder,
}

impl PathForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathForm::File => "file",
            PathForm::Folder => "folder",
        }
    }
}

/// A path produced by the resolver together with what it was resolved for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPath {
    pub kind: FolderKind,
    pub form: PathForm,
    pub path: PathBuf,
}

impl ResolvedPath {
    pub fn new(kind: FolderKind, form: PathForm, path: PathBuf) -> Self {
        Self { kind, form, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lossy string form, for display.
    pub fn display_string(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}
