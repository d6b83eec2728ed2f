//! Helpers for tests that mutate the process environment.

use std::ffi::{OsStr, OsString};
use std::sync::Mutex;

/// Serializes tests that touch `HOME` or the `XDG_*_HOME` variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets or removes a variable for the guard's lifetime, restoring it on drop.
///
/// Hold `ENV_LOCK` while any of these are alive.
pub struct ScopedEnvVar {
    key: String,
    old: Option<OsString>,
}

impl ScopedEnvVar {
    pub fn set(key: &str, value: impl AsRef<OsStr>) -> Self {
        let old = std::env::var_os(key);
        std::env::set_var(key, value);
        Self {
            key: key.to_string(),
            old,
        }
    }

    pub fn remove(key: &str) -> Self {
        let old = std::env::var_os(key);
        std::env::remove_var(key);
        Self {
            key: key.to_string(),
            old,
        }
    }
}

impl Drop for ScopedEnvVar {
    fn drop(&mut self) {
        match &self.old {
            Some(v) => std::env::set_var(&self.key, v),
            None => std::env::remove_var(&self.key),
        }
    }
}
