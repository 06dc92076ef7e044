use bevy::prelude::*;
use fixture_model::{
    clamp_density, CollisionFilter, ConvexShape, Fixture, DEFAULT_DENSITY, DEFAULT_FIXTURE_NAME,
    DEFAULT_FRICTION, DEFAULT_RESTITUTION,
};
use serde::Deserialize;

/// In-progress fixture properties edited by the fixture panel.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureDraft {
    pub name: String,
    pub density: f32,
    pub restitution: f32,
    pub friction: f32,
    pub filter: CollisionFilter,
    pub sensor: bool,
}

impl FixtureDraft {
    pub fn from_fixture(fixture: &Fixture) -> Self {
        Self {
            name: fixture.name.clone(),
            density: fixture.density,
            restitution: fixture.restitution,
            friction: fixture.friction,
            filter: fixture.filter,
            sensor: fixture.sensor,
        }
    }

    /// New fixture around `shape` carrying the draft's properties. The filter is moved over as is.
    pub fn into_fixture(self, shape: ConvexShape) -> Fixture {
        let mut fixture = Fixture::new(shape);
        self.apply_to(&mut fixture);
        fixture
    }

    /// Overwrites every property of `fixture` except its shape.
    pub fn apply_to(self, fixture: &mut Fixture) {
        fixture.name = self.name;
        fixture.density = self.density;
        fixture.filter = self.filter;
        fixture.friction = self.friction;
        fixture.restitution = self.restitution;
        fixture.sensor = self.sensor;
    }
}

/// Properties a freshly opened add-fixture dialog starts from.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FixtureDefaults {
    pub name: String,
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
    pub sensor: bool,
    pub filter: CollisionFilter,
}

impl Default for FixtureDefaults {
    fn default() -> Self {
        Self {
            name: DEFAULT_FIXTURE_NAME.to_string(),
            density: DEFAULT_DENSITY,
            friction: DEFAULT_FRICTION,
            restitution: DEFAULT_RESTITUTION,
            sensor: false,
            filter: CollisionFilter::Default,
        }
    }
}

impl FixtureDefaults {
    pub fn draft(&self) -> FixtureDraft {
        FixtureDraft {
            name: self.name.clone(),
            density: clamp_density(self.density),
            restitution: self.restitution,
            friction: self.friction,
            filter: self.filter,
            sensor: self.sensor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_shape() {
        let shape = ConvexShape::circle(2.0).unwrap();
        let mut fixture = Fixture::new(shape.clone());
        let mut draft = FixtureDraft::from_fixture(&fixture);
        draft.name = "wheel".into();
        draft.sensor = true;
        draft.filter = CollisionFilter::category_filter(1, 2);
        draft.apply_to(&mut fixture);
        assert_eq!(fixture.shape, shape);
        assert_eq!(fixture.name, "wheel");
        assert!(fixture.sensor);
        assert_eq!(fixture.filter, CollisionFilter::category_filter(1, 2));
    }

    #[test]
    fn defaults_clamp_density() {
        let defaults = FixtureDefaults { density: -1.0, ..Default::default() };
        assert_eq!(defaults.draft().density, fixture_model::MIN_DENSITY);
    }
}
