//! Hierarchy error types.

use crate::{BodyId, BodyKind};

/// Errors raised when constructing a body.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BodyError {
    /// A numeric attribute is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// A length attribute is negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// `does_revolve` is set but no body to orbit was given.
    #[error("body {name:?} revolves but has no orbit parent")]
    MissingOrbitParent { name: String },

    /// The handle does not belong to this system.
    #[error("unknown body {0}")]
    UnknownBody(BodyId),

    /// Every system has exactly one root, created with it.
    #[error("a system has exactly one root")]
    DuplicateRoot,
}

/// Errors raised when attaching a descendant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AttachError {
    /// The parent kind does not accept the child kind.
    #[error("a {parent} cannot hold a {child} as a descendant")]
    Rejected { parent: BodyKind, child: BodyKind },

    /// The child already has a parent; reparenting is unsupported.
    #[error("body {0} is already attached")]
    AlreadyAttached(BodyId),

    /// The child orbits a body that would not be one of its ancestors.
    #[error("body {child} orbits {around}, which is not an ancestor")]
    OrbitNotAncestor { child: BodyId, around: BodyId },

    /// A handle does not belong to this system.
    #[error("unknown body {0}")]
    UnknownBody(BodyId),
}
