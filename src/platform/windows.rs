//! Windows-specific functionality.

use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;

use tracing::debug;
use windows::core::GUID;
use windows::Win32::Foundation::HANDLE;
use windows::Win32::System::Com::CoTaskMemFree;
use windows::Win32::UI::Shell::{
    FOLDERID_LocalAppData, FOLDERID_RoamingAppData, SHGetKnownFolderPath, KF_FLAG_DEFAULT,
};

use super::{BaseDir, BaseResolver};
use crate::models::FolderKind;

/// Classic Win32 path limit, in UTF-16 units.
pub const MAX_PATH: usize = 260;

/// Resolves bases through the shell's known-folder API.
///
/// Config and data share the roaming AppData folder; cache goes to local AppData.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnownFolderResolver;

impl KnownFolderResolver {
    pub fn new() -> Self {
        Self
    }
}

/// Query a known folder, e.g. `C:\Users\Alice\AppData\Roaming`.
fn known_folder(id: &GUID) -> Option<OsString> {
    unsafe {
        match SHGetKnownFolderPath(id, KF_FLAG_DEFAULT, HANDLE::default()) {
            Ok(path) => {
                let folder = OsString::from_wide(path.as_wide());
                CoTaskMemFree(Some(path.0 as *const _));
                Some(folder)
            }
            Err(e) => {
                debug!(error = %e, "Known folder query failed");
                None
            }
        }
    }
}

impl BaseResolver for KnownFolderResolver {
    fn resolve_base(&self, kind: FolderKind) -> Option<BaseDir> {
        let id = match kind {
            FolderKind::Config | FolderKind::Data => &FOLDERID_RoamingAppData,
            FolderKind::Cache => &FOLDERID_LocalAppData,
        };
        // AppData always exists already, so the root is never created.
        known_folder(id).map(BaseDir::new)
    }

    fn config_extension(&self) -> &'static str {
        ".ini"
    }

    fn separator(&self) -> char {
        '\\'
    }

    fn max_path(&self) -> usize {
        MAX_PATH
    }

    fn min_capacity(&self) -> usize {
        MAX_PATH
    }
}
