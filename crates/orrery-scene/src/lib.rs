//! Scene context binding a celestial system to its renderer-facing state.
//!
//! A [`SceneContext`] owns the body tree, the tick parameters and the display
//! toggles, and is passed explicitly to whoever drives or draws the scene.
//! Scenes come from RON [`SceneDescription`]s or the built-in [`demo`].

mod context;
pub mod demo;
mod description;
mod properties;
mod visual;

pub use context::{AXIS_LENGTH, DEFAULT_TRACE_SEGMENTS, SceneContext};
pub use description::{BodyDescription, SceneDescription, SceneError};
pub use properties::SceneProperties;
pub use visual::{AxisLine, BodyVisual, OrbitTrace};
