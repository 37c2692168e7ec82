//! Display toggles.

use serde::{Deserialize, Serialize};

/// What the renderer should draw besides the bodies themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneProperties {
    /// Draw orbit trace lines.
    pub show_orbits: bool,
    /// Draw body meshes.
    pub show_mesh: bool,
    /// Draw the X/Y/Z reference axes.
    pub show_axes: bool,
}

impl Default for SceneProperties {
    fn default() -> Self {
        Self {
            show_orbits: true,
            show_mesh: true,
            show_axes: true,
        }
    }
}

impl SceneProperties {
    pub fn show_orbits(&mut self) {
        self.show_orbits = true;
    }

    pub fn hide_orbits(&mut self) {
        self.show_orbits = false;
    }

    pub fn show_mesh(&mut self) {
        self.show_mesh = true;
    }

    pub fn hide_mesh(&mut self) {
        self.show_mesh = false;
    }

    pub fn show_axes(&mut self) {
        self.show_axes = true;
    }

    pub fn hide_axes(&mut self) {
        self.show_axes = false;
    }
}
