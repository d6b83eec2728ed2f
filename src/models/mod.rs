//! Value types returned by the resolver.

mod folder_kind;
mod resolved_path;

pub use folder_kind::*;
pub use resolved_path::*;
