//! XDG Base Directory lookup (Linux and other non-Apple Unix).

use tracing::debug;

use super::{BaseDir, BaseResolver};
use crate::env::{Environment, ProcessEnvironment};
use crate::models::FolderKind;

/// No real limit on Linux; large enough for any sane home directory.
pub const MAX_PATH: usize = 512;

/// Resolves bases from `$XDG_*_HOME`, falling back to `$HOME`.
#[derive(Debug, Clone, Default)]
pub struct XdgResolver<E = ProcessEnvironment> {
    env: E,
}

impl XdgResolver {
    /// Resolver reading the process environment.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Environment> XdgResolver<E> {
    /// Resolver reading variables from `env`.
    pub fn with_env(env: E) -> Self {
        Self { env }
    }
}

impl<E: Environment> BaseResolver for XdgResolver<E> {
    fn resolve_base(&self, kind: FolderKind) -> Option<BaseDir> {
        // Set-but-empty overrides are used as-is, same as a non-empty value.
        if let Some(root) = self.env.var_os(kind.xdg_var()) {
            return Some(BaseDir::new(root));
        }

        match self.env.var_os("HOME") {
            Some(home) => {
                debug!(var = kind.xdg_var(), "Override unset, falling back to $HOME");
                Some(BaseDir::with_segments(home, kind.home_segments()))
            }
            None => {
                debug!(var = kind.xdg_var(), "Neither override nor $HOME is set");
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
