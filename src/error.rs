//! Errors produced while resolving per-user paths.

use thiserror::Error;

use crate::models::FolderKind;

/// Why a path could not be produced.
///
/// The buffer-based functions collapse every variant into an empty buffer;
/// the typed layer hands them back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Neither the override variable, `HOME`, nor the OS folder query gave a base.
    #[error("no base directory available for {kind} paths")]
    Unresolvable { kind: FolderKind },

    /// The composed path plus terminator does not fit the caller's capacity.
    ///
    /// When the capacity is below the platform floor (`MAX_PATH` on Windows),
    /// `required` is that floor rather than the length of the path.
    #[error("path needs {required} units but the buffer holds {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },

    #[error("unknown folder kind: {0}")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
