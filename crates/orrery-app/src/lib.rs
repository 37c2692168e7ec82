//! Host side of the orrery: platform directories, the tick loop, and the
//! headless runner that drives a scene and reports its renderables.

pub mod error;
pub mod platform;
pub mod runner;
pub mod tick_loop;

pub use error::AppError;
