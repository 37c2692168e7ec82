//! RON scene descriptions.

use std::path::Path;

use orrery_bodies::{AttachError, BodyAttributes, BodyError, BodyId, BodyKind, CelestialSystem};
use serde::{Deserialize, Serialize};

/// Errors that can occur when loading or building a scene description.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// Failed to read the scene file from disk.
    #[error("failed to read scene: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse scene: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// A body's attributes did not validate.
    #[error("invalid body {name:?}: {source}")]
    Body {
        name: String,
        #[source]
        source: BodyError,
    },

    /// A body could not be attached to its parent.
    #[error("cannot attach body {name:?}: {source}")]
    Attach {
        name: String,
        #[source]
        source: AttachError,
    },
}

/// A body and the bodies attached to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyDescription {
    pub kind: BodyKind,
    #[serde(default)]
    pub attributes: BodyAttributes,
    #[serde(default)]
    pub descendants: Vec<BodyDescription>,
}

/// Serialized form of a whole scene: the bodies attached to the root.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub bodies: Vec<BodyDescription>,
}

impl SceneDescription {
    /// Load a description from a `.ron` file.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let contents = std::fs::read_to_string(path).map_err(SceneError::Read)?;
        let description = Self::from_ron(&contents)?;
        log::info!("Loaded scene from {}", path.display());
        Ok(description)
    }

    pub fn from_ron(contents: &str) -> Result<Self, SceneError> {
        ron::from_str(contents).map_err(SceneError::Parse)
    }

    /// Construct and attach every described body, parents before children.
    ///
    /// A revolving body without an explicit orbit parent orbits the body it is
    /// described under.
    pub fn build(&self) -> Result<CelestialSystem, SceneError> {
        let mut system = CelestialSystem::new();
        let root = system.root();
        for body in &self.bodies {
            build_body(&mut system, root, body)?;
        }
        log::debug!("built scene with {} bodies", system.len() - 1);
        Ok(system)
    }
}

fn build_body(
    system: &mut CelestialSystem,
    parent: BodyId,
    description: &BodyDescription,
) -> Result<BodyId, SceneError> {
    let mut attrs = description.attributes.clone();
    if attrs.revolution.does_revolve && attrs.revolution.around.is_none() {
        attrs.revolution.around = Some(parent);
    }
    let name = attrs.name.clone();

    let id = system
        .create(description.kind, attrs)
        .map_err(|source| SceneError::Body {
            name: name.clone(),
            source,
        })?;
    system
        .add_descendant(parent, id)
        .map_err(|source| SceneError::Attach { name, source })?;

    for child in &description.descendants {
        build_body(system, id, child)?;
    }
    Ok(id)
}
