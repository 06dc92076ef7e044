use bevy::prelude::*;
use fixture_editor::FixtureDefaults;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Fixture Sandbox".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Screen pixels per simulation meter; fixture shapes are authored in meters.
    pub pixels_per_meter: f32,
    pub gravity_y: f32,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: 50.0,
            gravity_y: -9.81,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    pub add_title: String,
    pub edit_title: String,
    /// Glyph shown in front of the add dialog title.
    pub icon: Option<String>,
    /// Starting properties of every new fixture.
    pub defaults: FixtureDefaults,
}
impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            add_title: "Add Fixture".into(),
            edit_title: "Edit Fixture".into(),
            icon: None,
            defaults: FixtureDefaults::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Meters.
    pub ground_width: f32,
    /// Meters; radius of the body's initial circle fixture.
    pub body_radius: f32,
    /// Meters above the ground where the body starts.
    pub body_height: f32,
}
impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ground_width: 20.0,
            body_radius: 0.5,
            body_height: 4.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SandboxConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub editor: EditorConfig,
    pub scene: SceneConfig,
}

impl SandboxConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Validate the configuration returning a list of human-readable warning strings.
    /// None of these are fatal; call at startup and log each with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.physics.pixels_per_meter <= 0.0 {
            w.push(format!(
                "physics.pixels_per_meter {} must be > 0",
                self.physics.pixels_per_meter
            ));
        }
        if self.physics.gravity_y > 0.0 {
            w.push(format!(
                "physics.gravity_y is positive ({}); bodies will fall upwards",
                self.physics.gravity_y
            ));
        }
        let defaults = &self.editor.defaults;
        if defaults.density <= 0.0 {
            w.push(format!(
                "editor.defaults.density {} <= 0; new fixtures start at the minimum density",
                defaults.density
            ));
        }
        for (name, value) in [("friction", defaults.friction), ("restitution", defaults.restitution)] {
            if !(0.0..=1.0).contains(&value) {
                w.push(format!(
                    "editor.defaults.{name} {value} outside 0..=1; the slider cannot show it"
                ));
            }
        }
        if self.editor.add_title.trim().is_empty() {
            w.push("editor.add_title is empty".into());
        }
        if self.scene.body_radius <= 0.0 {
            w.push(format!("scene.body_radius {} must be > 0", self.scene.body_radius));
        }
        if self.scene.ground_width <= 0.0 {
            w.push(format!("scene.ground_width {} must be > 0", self.scene.ground_width));
        }
        w
    }
}
