//! Environment lookup used by the XDG resolver.

use std::ffi::OsString;

/// Read-only view of environment variables.
///
/// Closures of the shape `Fn(&str) -> Option<OsString>` implement this, which
/// lets callers resolve against a fixed set of variables.
pub trait Environment {
    fn var_os(&self, key: &str) -> Option<OsString>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

impl<F> Environment for F
where
    F: Fn(&str) -> Option<OsString>,
{
    fn var_os(&self, key: &str) -> Option<OsString> {
        self(key)
    }
}
