//! Application-level errors.

use orrery_config::ConfigError;
use orrery_kinematics::KinematicsError;
use orrery_scene::SceneError;

use crate::platform::PlatformError;

/// Anything that stops the app before or while setting up a scene.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error("invalid simulation settings: {0}")]
    Kinematics(#[from] KinematicsError),
}
