//! Owned-path convenience layer over the system resolver.

use std::path::PathBuf;

use crate::error::Result;
use crate::models::FolderKind;
use crate::resolver::PathResolver;

/// Folder for `kind`, ending in a separator.
pub fn resolve_folder(kind: FolderKind, appname: &str) -> Result<PathBuf> {
    Ok(PathResolver::system().folder_path(kind, appname)?.path)
}

/// File for `kind`.
///
/// For [`FolderKind::Config`] this is the platform's single configuration file
/// and `filename` is not used; otherwise `filename` is appended to the folder.
pub fn resolve_file(kind: FolderKind, appname: &str, filename: &str) -> Result<PathBuf> {
    Ok(PathResolver::system().file_path(kind, appname, filename)?.path)
}

/// Like [`resolve_folder`], taking the kind by name (`"config"`, `"data"`, `"cache"`).
pub fn resolve_folder_named(kind: &str, appname: &str) -> Result<PathBuf> {
    resolve_folder(kind.parse()?, appname)
}

/// Like [`resolve_file`], taking the kind by name.
pub fn resolve_file_named(kind: &str, appname: &str, filename: &str) -> Result<PathBuf> {
    resolve_file(kind.parse()?, appname, filename)
}
