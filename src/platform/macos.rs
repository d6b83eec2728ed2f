//! macOS-specific functionality.

use tracing::debug;

use super::{BaseDir, BaseResolver};
use crate::models::FolderKind;

/// `PATH_MAX` on Darwin.
pub const MAX_PATH: usize = 1024;

/// Resolves every kind to `~/Library/Application Support`.
///
/// macOS has no conventional split between config, data and cache here, so
/// all three kinds share one base.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppSupportResolver;

impl AppSupportResolver {
    pub fn new() -> Self {
        Self
    }
}

impl BaseResolver for AppSupportResolver {
    fn resolve_base(&self, kind: FolderKind) -> Option<BaseDir> {
        match dirs::data_dir() {
            Some(dir) => Some(BaseDir::new(dir.into_os_string())),
            None => {
                debug!(%kind, "Application Support folder unavailable");
                None
            }
        }
    }

    fn config_extension(&self) -> &'static str {
        ".conf"
    }

    fn separator(&self) -> char {
        '/'
    }

    fn max_path(&self) -> usize {
        MAX_PATH
    }
}
