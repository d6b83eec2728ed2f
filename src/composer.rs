//! Builds the final path string and checks it against the caller's capacity.

use std::ffi::{OsStr, OsString};

use tracing::trace;

use crate::error::{ResolveError, Result};
use crate::platform::{native_len, BaseDir};

/// How a composed path ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trailing<'a> {
    /// `appname` followed by this extension, no trailing separator.
    File(&'a str),
    /// `appname` followed by one separator.
    Folder,
}

/// A path that fits, plus the directories it introduced beneath the base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPath {
    pub path: OsString,
    /// Prefixes of `path` to create, shortest first. Never includes the base root.
    pub new_dirs: Vec<OsString>,
}

/// Concatenates `base + sep + [segment + sep]* + appname + (ext | sep)`.
///
/// No normalization happens: a base that already ends in a separator yields a
/// doubled separator, exactly as the pieces were given.
#[derive(Debug, Clone, Copy)]
pub struct PathComposer<'a> {
    base: &'a BaseDir,
    separator: char,
}

impl<'a> PathComposer<'a> {
    pub fn new(base: &'a BaseDir, separator: char) -> Self {
        Self { base, separator }
    }

    /// Units needed for the full path including one terminator.
    pub fn required_len(&self, appname: &str, trailing: Trailing<'_>) -> usize {
        let mut sep = [0u8; 4];
        let sep_len = native_len(OsStr::new(self.separator.encode_utf8(&mut sep)));
        let segments: usize = self
            .base
            .segments
            .iter()
            .map(|s| native_len(OsStr::new(s)) + sep_len)
            .sum();
        let tail = match trailing {
            Trailing::File(ext) => native_len(OsStr::new(ext)),
            Trailing::Folder => sep_len,
        };

        native_len(&self.base.root) + sep_len + segments + native_len(OsStr::new(appname)) + tail + 1
    }

    /// Compose the path, or fail if it would not fit in `capacity` units.
    pub fn compose(&self, appname: &str, trailing: Trailing<'_>, capacity: usize) -> Result<ComposedPath> {
        let required = self.required_len(appname, trailing);
        if required > capacity {
            trace!(required, capacity, "Composed path does not fit");
            return Err(ResolveError::BufferTooSmall { required, capacity });
        }

        let mut sep = [0u8; 4];
        let sep: &str = self.separator.encode_utf8(&mut sep);

        let mut path = OsString::with_capacity(required);
        let mut new_dirs = Vec::new();

        path.push(&self.base.root);
        path.push(sep);
        for segment in self.base.segments {
            path.push(segment);
            new_dirs.push(path.clone());
            path.push(sep);
        }
        path.push(appname);
        match trailing {
            Trailing::File(ext) => path.push(ext),
            Trailing::Folder => {
                new_dirs.push(path.clone());
                path.push(sep);
            }
        }

        trace!(path = %path.to_string_lossy(), "Composed path");
        Ok(ComposedPath { path, new_dirs })
    }
}
