use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// Which per-user folder a path is resolved under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderKind {
    /// Configuration files (`$XDG_CONFIG_HOME`, roaming AppData).
    Config,
    /// Persistent application data (`$XDG_DATA_HOME`, roaming AppData).
    Data,
    /// Disposable cached data (`$XDG_CACHE_HOME`, local AppData).
    Cache,
}

impl FolderKind {
    /// Every kind, in declaration order.
    pub const ALL: [FolderKind; 3] = [FolderKind::Config, FolderKind::Data, FolderKind::Cache];

    pub fn as_str(&self) -> &'static str {
        match self {
            FolderKind::Config => "config",
            FolderKind::Data => "data",
            FolderKind::Cache => "cache",
        }
    }

    /// XDG variable that overrides the base directory for this kind.
    pub fn xdg_var(&self) -> &'static str {
        match self {
            FolderKind::Config => "XDG_CONFIG_HOME",
            FolderKind::Data => "XDG_DATA_HOME",
            FolderKind::Cache => "XDG_CACHE_HOME",
        }
    }

    /// Segments appended beneath `$HOME` when the XDG variable is unset.
    pub fn home_segments(&self) -> &'static [&'static str] {
        match self {
            FolderKind::Config => &[".config"],
            FolderKind::Data => &[".local", "share"],
            FolderKind::Cache => &[".cache"],
        }
    }
}

impl fmt::Display for FolderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FolderKind {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "config" => Ok(FolderKind::Config),
            "data" => Ok(FolderKind::Data),
            "cache" => Ok(FolderKind::Cache),
            _ => Err(ResolveError::UnknownKind(s.to_string())),
        }
    }
}

/// Numeric discriminants as exchanged with callers that store the kind as an integer.
impl TryFrom<u8> for FolderKind {
    type Error = ResolveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FolderKind::Config),
            1 => Ok(FolderKind::Data),
            2 => Ok(FolderKind::Cache),
            other => Err(ResolveError::UnknownKind(other.to_string())),
        }
    }
}
