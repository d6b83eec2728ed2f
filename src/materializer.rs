//! Best-effort creation of the directories a composed path introduced.

use std::ffi::OsStr;
use std::path::Path;

use tracing::debug;

/// Creates a single directory level.
///
/// Failures are not reported: an existing directory and a directory that could
/// not be made look the same to the caller, whose next open or write on the
/// path will surface any real problem.
pub trait DirCreator {
    fn create_dir(&self, path: &Path);

    /// Create each directory in order, shortest first.
    fn create_all<I, S>(&self, dirs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for dir in dirs {
            self.create_dir(Path::new(dir.as_ref()));
        }
    }
}

impl<D: DirCreator + ?Sized> DirCreator for &D {
    fn create_dir(&self, path: &Path) {
        (**self).create_dir(path)
    }
}

/// Creates directories on the real filesystem, mode `0755` on Unix.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirCreator;

impl FsDirCreator {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
impl DirCreator for FsDirCreator {
    fn create_dir(&self, path: &Path) {
        use nix::sys::stat::Mode;

        let mode = Mode::S_IRWXU | Mode::S_IRGRP | Mode::S_IXGRP | Mode::S_IROTH | Mode::S_IXOTH;
        if let Err(errno) = nix::unistd::mkdir(path, mode) {
            debug!(path = %path.display(), %errno, "mkdir skipped");
        }
    }
}

#[cfg(not(unix))]
impl DirCreator for FsDirCreator {
    fn create_dir(&self, path: &Path) {
        if let Err(e) = std::fs::create_dir(path) {
            debug!(path = %path.display(), error = %e, "mkdir skipped");
        }
    }
}
