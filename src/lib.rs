//! cfgpath
//!
//! Per-user configuration, data and cache locations following each platform's
//! conventions: XDG Base Directory on Linux, roaming/local AppData on Windows,
//! `Application Support` on macOS.

pub mod models;
pub mod error;
pub mod env;
pub mod platform;
pub mod composer;
pub mod materializer;
pub mod resolver;
pub mod buffer;
pub mod known_folder;
#[cfg(test)]
mod test_support;

pub use buffer::{resolve_cache_folder, resolve_config_file, resolve_config_folder, resolve_data_folder};
pub use error::ResolveError;
pub use known_folder::{resolve_file, resolve_folder};
pub use models::FolderKind;
pub use platform::{MAX_PATH, PATH_SEPARATOR};
pub use resolver::PathResolver;
