//! Celestial body hierarchy: a single-rooted tree of stars, planets and moons.
//!
//! Bodies live in an arena owned by [`CelestialSystem`] and are addressed by
//! copyable [`BodyId`] handles. Attachment is gated by [`BodyKind`]: the root
//! holds stars, stars hold planets, planets hold moons, moons hold nothing.

mod body;
mod error;
mod id;
mod kind;
mod system;

pub use body::{BodyAttributes, CelestialBody, Revolution};
pub use error::{AttachError, BodyError};
pub use id::{BodyId, generate_self_id};
pub use kind::BodyKind;
pub use system::{CelestialSystem, PreOrder, ROOT_NAME};
