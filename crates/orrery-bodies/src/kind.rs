//! Body kinds and the attachment table between them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The role a body plays in the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    /// Synthetic "center of universe". Never rendered.
    Root,
    Star,
    Planet,
    Moon,
}

impl BodyKind {
    /// All kinds, in hierarchy order.
    pub const ALL: [BodyKind; 4] = [
        BodyKind::Root,
        BodyKind::Star,
        BodyKind::Planet,
        BodyKind::Moon,
    ];

    /// The only kind this kind accepts as a descendant, if any.
    pub const fn allowed_child(self) -> Option<BodyKind> {
        match self {
            BodyKind::Root => Some(BodyKind::Star),
            BodyKind::Star => Some(BodyKind::Planet),
            BodyKind::Planet => Some(BodyKind::Moon),
            BodyKind::Moon => None,
        }
    }

    /// Whether a body of this kind may hold `child` as a direct descendant.
    pub fn accepts(self, child: BodyKind) -> bool {
        self.allowed_child() == Some(child)
    }

    /// Prefix used for `self_id` labels.
    pub const fn tag(self) -> &'static str {
        match self {
            BodyKind::Root => "root",
            BodyKind::Star => "star",
            BodyKind::Planet => "planet",
            BodyKind::Moon => "moon",
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}
