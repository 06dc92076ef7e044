//! Rapier components for a [`Fixture`].

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::{fixture_hooks, ConvexShape, Fixture, FixtureError};

#[derive(Bundle, Clone)]
pub struct FixtureColliderBundle {
    pub name: Name,
    pub collider: Collider,
    pub mass: ColliderMassProperties,
    pub friction: Friction,
    pub restitution: Restitution,
    /// Collision filtering runs in [`FixtureFilterHook`](crate::FixtureFilterHook).
    pub hooks: ActiveHooks,
}

impl FixtureColliderBundle {
    /// `pixels_per_meter` must match the value the rapier plugin was installed with.
    pub fn from_fixture(fixture: &Fixture, pixels_per_meter: f32) -> Result<Self, FixtureError> {
        Ok(Self {
            name: Name::new(fixture.name.clone()),
            collider: shape_collider(&fixture.shape, pixels_per_meter)?,
            mass: ColliderMassProperties::Density(fixture.density),
            friction: Friction::coefficient(fixture.friction),
            restitution: Restitution::coefficient(fixture.restitution),
            hooks: fixture_hooks(),
        })
    }
}

pub fn shape_collider(shape: &ConvexShape, pixels_per_meter: f32) -> Result<Collider, FixtureError> {
    if !(pixels_per_meter.is_finite() && pixels_per_meter > 0.0) {
        return Err(FixtureError::InvalidScale(pixels_per_meter));
    }
    match shape {
        ConvexShape::Circle { center, radius } => {
            let ball = Collider::ball(radius * pixels_per_meter);
            if *center == Vec2::ZERO {
                Ok(ball)
            } else {
                Ok(Collider::compound(vec![(*center * pixels_per_meter, 0.0, ball)]))
            }
        }
        ConvexShape::Polygon { vertices } => {
            let points: Vec<Vec2> = vertices.iter().map(|v| *v * pixels_per_meter).collect();
            Collider::convex_hull(&points).ok_or(FixtureError::DegenerateHull(points.len()))
        }
    }
}

/// Writes the fixture and its collider components onto `entity`, replacing previous values.
pub fn insert_fixture(
    entity: &mut EntityCommands,
    fixture: &Fixture,
    pixels_per_meter: f32,
) -> Result<(), FixtureError> {
    let bundle = FixtureColliderBundle::from_fixture(fixture, pixels_per_meter)?;
    entity.insert((bundle, fixture.clone()));
    if fixture.sensor {
        entity.insert(Sensor);
    } else {
        entity.remove::<Sensor>();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CollisionFilter, ConvexShape};

    #[test]
    fn bundle_copies_material() {
        let mut f = Fixture::new(ConvexShape::rectangle(1.0, 1.0).unwrap()).with_name("plank");
        f.density = 3.0;
        f.friction = 0.4;
        f.restitution = 0.6;
        f.filter = CollisionFilter::category_filter(2, 5);
        let b = FixtureColliderBundle::from_fixture(&f, 50.0).unwrap();
        assert_eq!(b.name.as_str(), "plank");
        assert_eq!(b.friction.coefficient, 0.4);
        assert_eq!(b.restitution.coefficient, 0.6);
        assert!(matches!(b.mass, ColliderMassProperties::Density(d) if d == 3.0));
        assert_eq!(b.hooks, fixture_hooks());
        assert!(b.collider.as_convex_polygon().is_some());
    }

    #[test]
    fn offset_circle_becomes_compound() {
        let mut shape = ConvexShape::circle(1.0).unwrap();
        assert!(shape_collider(&shape, 10.0).unwrap().as_ball().is_some());
        shape.translate(Vec2::new(2.0, 0.0));
        assert!(shape_collider(&shape, 10.0).unwrap().as_compound().is_some());
    }

    #[test]
    fn rejects_bad_scale() {
        let shape = ConvexShape::circle(1.0).unwrap();
        assert!(matches!(shape_collider(&shape, 0.0), Err(FixtureError::InvalidScale(_))));
    }
}
