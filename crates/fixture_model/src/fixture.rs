use bevy::prelude::*;

use crate::{CollisionFilter, ConvexShape};

/// Lower bound applied to non-positive density input.
pub const MIN_DENSITY: f32 = 0.01;

pub const DEFAULT_FIXTURE_NAME: &str = "Fixture";
pub const DEFAULT_DENSITY: f32 = 1.0;
pub const DEFAULT_FRICTION: f32 = 0.2;
pub const DEFAULT_RESTITUTION: f32 = 0.0;

/// A shape attached to a rigid body together with its material and filter.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Fixture {
    /// User data shown as the fixture name.
    pub name: String,
    pub shape: ConvexShape,
    /// Kilograms per square meter.
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
    pub filter: CollisionFilter,
    pub sensor: bool,
}

impl Fixture {
    pub fn new(shape: ConvexShape) -> Self {
        Self {
            name: DEFAULT_FIXTURE_NAME.to_string(),
            shape,
            density: DEFAULT_DENSITY,
            friction: DEFAULT_FRICTION,
            restitution: DEFAULT_RESTITUTION,
            filter: CollisionFilter::Default,
            sensor: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn set_density(&mut self, density: f32) {
        self.density = clamp_density(density);
    }
}

/// Non-positive (or NaN) densities become [`MIN_DENSITY`].
pub fn clamp_density(density: f32) -> f32 {
    if density > 0.0 {
        density
    } else {
        MIN_DENSITY
    }
}
