//! Error types.

use thiserror::Error;

use crate::surface::Handle;

/// Failures reported by a drawing surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The handle does not name a live placement.
    #[error("unknown placement {0}")]
    UnknownHandle(Handle),
}

/// Errors returned by list operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DndError {
    /// A widget (or one of its descendants) has an empty id.
    #[error("widget id must not be empty")]
    EmptyId,

    /// A widget id is already bound to an item in this list.
    #[error("widget id '{0}' is already in the list")]
    DuplicateId(String),

    /// A surface primitive failed.
    #[error("surface error: {0}")]
    Surface(#[from] SurfaceError),
}

pub type Result<T> = std::result::Result<T, DndError>;
