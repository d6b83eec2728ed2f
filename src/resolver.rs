//! The four path operations, built from a base resolver and a directory creator.

use std::path::PathBuf;

use tracing::debug;

use crate::composer::{PathComposer, Trailing};
use crate::error::{ResolveError, Result};
use crate::materializer::{DirCreator, FsDirCreator};
use crate::models::{FolderKind, PathForm, ResolvedPath};
use crate::platform::{BaseResolver, SystemResolver};

/// Resolves per-user paths for an application.
///
/// `B` decides where the base directory lives, `D` creates whatever the
/// composed path added beneath it. [`PathResolver::system`] wires in the
/// current platform and the real filesystem.
#[derive(Debug, Clone, Default)]
pub struct PathResolver<B = SystemResolver, D = FsDirCreator> {
    base: B,
    dirs: D,
}

impl PathResolver {
    /// Resolver for the current platform, creating directories on disk.
    pub fn system() -> Self {
        Self::default()
    }
}

impl<B: BaseResolver, D: DirCreator> PathResolver<B, D> {
    pub fn new(base: B, dirs: D) -> Self {
        Self { base, dirs }
    }

    /// Default capacity used by the owned-path operations.
    pub fn max_path(&self) -> usize {
        self.base.max_path()
    }

    /// Path of the application's single configuration file, e.g. `~/.config/app.conf`.
    pub fn config_file(&self, appname: &str, capacity: usize) -> Result<PathBuf> {
        let ext = self.base.config_extension();
        self.resolve(FolderKind::Config, appname, Trailing::File(ext), capacity)
    }

    /// Configuration folder, e.g. `~/.config/app/`.
    pub fn config_folder(&self, appname: &str, capacity: usize) -> Result<PathBuf> {
        self.resolve(FolderKind::Config, appname, Trailing::Folder, capacity)
    }

    /// Data folder, e.g. `~/.local/share/app/`.
    pub fn data_folder(&self, appname: &str, capacity: usize) -> Result<PathBuf> {
        self.resolve(FolderKind::Data, appname, Trailing::Folder, capacity)
    }

    /// Cache folder, e.g. `~/.cache/app/`.
    pub fn cache_folder(&self, appname: &str, capacity: usize) -> Result<PathBuf> {
        self.resolve(FolderKind::Cache, appname, Trailing::Folder, capacity)
    }

    /// Folder for `kind`, sized to the platform's maximum path.
    pub fn folder_path(&self, kind: FolderKind, appname: &str) -> Result<ResolvedPath> {
        let path = self.resolve(kind, appname, Trailing::Folder, self.max_path())?;
        Ok(ResolvedPath::new(kind, PathForm::Folder, path))
    }

    /// File path for `kind`.
    ///
    /// Config uses the platform's single configuration file and ignores
    /// `filename`; data and cache append `filename` to their folder.
    pub fn file_path(&self, kind: FolderKind, appname: &str, filename: &str) -> Result<ResolvedPath> {
        match kind {
            FolderKind::Config => {
                let path = self.config_file(appname, self.max_path())?;
                Ok(ResolvedPath::new(kind, PathForm::File, path))
            }
            FolderKind::Data | FolderKind::Cache => {
                let folder = self.folder_path(kind, appname)?;
                let mut path = folder.path.into_os_string();
                path.push(filename);
                Ok(ResolvedPath::new(kind, PathForm::File, PathBuf::from(path)))
            }
        }
    }

    /// A capacity under the platform floor fails before any lookup; the
    /// error's `required` is then that floor, not the composed path length.
    fn resolve(&self, kind: FolderKind, appname: &str, trailing: Trailing<'_>, capacity: usize) -> Result<PathBuf> {
        let min = self.base.min_capacity();
        if capacity < min {
            debug!(%kind, capacity, min, "Capacity below platform minimum");
            return Err(ResolveError::BufferTooSmall { required: min, capacity });
        }

        let base = self
            .base
            .resolve_base(kind)
            .ok_or(ResolveError::Unresolvable { kind })?;

        let composed = PathComposer::new(&base, self.base.separator()).compose(appname, trailing, capacity)?;
        self.dirs.create_all(&composed.new_dirs);

        Ok(PathBuf::from(composed.path))
    }
}
