//! Buffer-based operations.
//!
//! Each function writes the resolved path into `out`, or leaves `out` empty
//! when the path can't be resolved or would need more than `maxlen` units
//! (terminator included). A truncated path is never written.
//!
//! ```no_run
//! use std::ffi::OsString;
//!
//! let mut cfg = OsString::new();
//! cfgpath::buffer::resolve_config_file(&mut cfg, cfgpath::MAX_PATH, "myapp");
//! if cfg.is_empty() {
//!     eprintln!("Unable to find home directory.");
//! }
//! ```

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::Result;
use crate::materializer::DirCreator;
use crate::platform::BaseResolver;
use crate::resolver::PathResolver;

/// Replace `out` with the resolved path, or clear it on any failure.
pub fn write_result(out: &mut OsString, result: Result<PathBuf>) {
    out.clear();
    if let Ok(path) = result {
        out.push(path.as_os_str());
    }
}

impl<B: BaseResolver, D: DirCreator> PathResolver<B, D> {
    pub fn write_config_file(&self, out: &mut OsString, maxlen: usize, appname: &str) {
        write_result(out, self.config_file(appname, maxlen));
    }

    pub fn write_config_folder(&self, out: &mut OsString, maxlen: usize, appname: &str) {
        write_result(out, self.config_folder(appname, maxlen));
    }

    pub fn write_data_folder(&self, out: &mut OsString, maxlen: usize, appname: &str) {
        write_result(out, self.data_folder(appname, maxlen));
    }

    pub fn write_cache_folder(&self, out: &mut OsString, maxlen: usize, appname: &str) {
        write_result(out, self.cache_folder(appname, maxlen));
    }
}

/// Configuration file for `appname`, e.g. `~/.config/appname.conf`.
pub fn resolve_config_file(out: &mut OsString, maxlen: usize, appname: &str) {
    PathResolver::system().write_config_file(out, maxlen, appname);
}

/// Configuration folder for `appname`, with a trailing separator.
pub fn resolve_config_folder(out: &mut OsString, maxlen: usize, appname: &str) {
    PathResolver::system().write_config_folder(out, maxlen, appname);
}

/// Data folder for `appname`, with a trailing separator.
pub fn resolve_data_folder(out: &mut OsString, maxlen: usize, appname: &str) {
    PathResolver::system().write_data_folder(out, maxlen, appname);
}

/// Cache folder for `appname`, with a trailing separator.
pub fn resolve_cache_folder(out: &mut OsString, maxlen: usize, appname: &str) {
    PathResolver::system().write_cache_folder(out, maxlen, appname);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use crate::models::FolderKind;

    #[test]
    fn test_write_result_clears_previous_contents() {
        let mut out = OsString::from("/stale/path/");
        write_result(&mut out, Err(ResolveError::Unresolvable { kind: FolderKind::Cache }));
        assert!(out.is_empty());

        let mut out = OsString::from("/stale/path/");
        write_result(&mut out, Ok(PathBuf::from("/home/test/.cache/app/")));
        assert_eq!(out, OsString::from("/home/test/.cache/app/"));
    }

    // Drives the process environment through the system resolver.
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    mod system {
        use super::*;
        use crate::test_support::{ScopedEnvVar, ENV_LOCK};

        type Op = fn(&mut OsString, usize, &str);

        const OPS: [(Op, &str); 4] = [
            (resolve_config_file, "test-linux.conf"),
            (resolve_config_folder, "test-linux/"),
            (resolve_data_folder, "test-linux/"),
            (resolve_cache_folder, "test-linux/"),
        ];

        #[test]
        fn test_empty_when_buffer_too_small() {
            let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp = tempfile::tempdir().unwrap();
            let _home = ScopedEnvVar::set("HOME", temp.path());

            for (op, _) in OPS {
                let mut out = OsString::from("garbage");
                op(&mut out, 5, "test-linux");
                assert!(out.is_empty());
            }
        }

        #[test]
        fn test_empty_without_home() {
            let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let _home = ScopedEnvVar::remove("HOME");
            let _config = ScopedEnvVar::remove("XDG_CONFIG_HOME");
            let _data = ScopedEnvVar::remove("XDG_DATA_HOME");
            let _cache = ScopedEnvVar::remove("XDG_CACHE_HOME");

            for (op, _) in OPS {
                let mut out = OsString::new();
                op(&mut out, 512, "test-linux");
                assert!(out.is_empty());
            }
        }

        #[test]
        fn test_xdg_overrides_in_process_env() {
            let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp = tempfile::tempdir().unwrap();
            let root = temp.path().to_string_lossy().to_string();
            let _config = ScopedEnvVar::set("XDG_CONFIG_HOME", &root);
            let _data = ScopedEnvVar::set("XDG_DATA_HOME", &root);
            let _cache = ScopedEnvVar::set("XDG_CACHE_HOME", &root);

            for (op, tail) in OPS {
                let mut out = OsString::new();
                op(&mut out, 512, "test-linux");
                assert_eq!(out, OsString::from(format!("{}/{}", root, tail)));
            }
            assert!(temp.path().join("test-linux").is_dir());
        }
    }
}
