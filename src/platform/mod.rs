//! Platform-specific base directory lookup.
//!
//! Each target gets one [`BaseResolver`]; [`SystemResolver`] names the one for
//! the platform being compiled. The XDG resolver only reads the environment, so
//! it is built everywhere and can be exercised on any host.

use std::ffi::{OsStr, OsString};

use crate::models::FolderKind;

pub mod xdg;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

pub use self::xdg::XdgResolver;

#[cfg(target_os = "macos")]
pub use self::macos::AppSupportResolver;

#[cfg(target_os = "windows")]
pub use self::windows::KnownFolderResolver;

/// Resolver for the current platform.
#[cfg(target_os = "windows")]
pub type SystemResolver = KnownFolderResolver;

#[cfg(target_os = "macos")]
pub type SystemResolver = AppSupportResolver;

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub type SystemResolver = XdgResolver;

/// Longest path, in native units, that callers should size buffers for.
#[cfg(target_os = "windows")]
pub const MAX_PATH: usize = self::windows::MAX_PATH;

#[cfg(target_os = "macos")]
pub const MAX_PATH: usize = self::macos::MAX_PATH;

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const MAX_PATH: usize = self::xdg::MAX_PATH;

/// Separator placed between path components on this platform.
pub const PATH_SEPARATOR: char = std::path::MAIN_SEPARATOR;

/// Root directory plus the conventional segments to append beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDir {
    /// Pre-existing directory; never created by this crate.
    pub root: OsString,
    /// Segments between `root` and the application name, e.g. `[".local", "share"]`.
    pub segments: &'static [&'static str],
}

impl BaseDir {
    pub fn new(root: impl Into<OsString>) -> Self {
        Self {
            root: root.into(),
            segments: &[],
        }
    }

    pub fn with_segments(root: impl Into<OsString>, segments: &'static [&'static str]) -> Self {
        Self {
            root: root.into(),
            segments,
        }
    }
}

/// Finds the base directory for a folder kind on one platform.
pub trait BaseResolver {
    /// Base directory for `kind`, or `None` when the platform can't provide one.
    fn resolve_base(&self, kind: FolderKind) -> Option<BaseDir>;

    /// Extension of the single configuration file (`.conf`, `.ini`).
    fn config_extension(&self) -> &'static str;

    fn separator(&self) -> char {
        PATH_SEPARATOR
    }

    /// Capacity used when the caller doesn't supply one.
    fn max_path(&self) -> usize {
        MAX_PATH
    }

    /// Buffers smaller than this are rejected before any lookup.
    fn min_capacity(&self) -> usize {
        0
    }
}

impl<R: BaseResolver + ?Sized> BaseResolver for &R {
    fn resolve_base(&self, kind: FolderKind) -> Option<BaseDir> {
        (**self).resolve_base(kind)
    }

    fn config_extension(&self) -> &'static str {
        (**self).config_extension()
    }

    fn separator(&self) -> char {
        (**self).separator()
    }

    fn max_path(&self) -> usize {
        (**self).max_path()
    }

    fn min_capacity(&self) -> usize {
        (**self).min_capacity()
    }
}

/// Length of an OS string in native units (UTF-16 units on Windows, bytes elsewhere).
#[cfg(windows)]
pub fn native_len(s: &OsStr) -> usize {
    use std::os::windows::ffi::OsStrExt;
    s.encode_wide().count()
}

/// Length of an OS string in native units (UTF-16 units on Windows, bytes elsewhere).
#[cfg(not(windows))]
pub fn native_len(s: &OsStr) -> usize {
    s.len()
}
