//! Rapier pair filter that applies [`CollisionFilter::allows`] to fixture colliders.
//!
//! Fixture colliders keep rapier's default all/all collision groups and carry
//! [`ActiveHooks`]; the hook makes the actual decision, so a `Default` filter
//! still meets a category filter with no bits set.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::{CollisionFilter, Fixture};

/// Hooks a fixture collider enables: solid contacts and sensor intersections.
pub fn fixture_hooks() -> ActiveHooks {
    ActiveHooks::FILTER_CONTACT_PAIRS | ActiveHooks::FILTER_INTERSECTION_PAIR
}

/// Physics hooks for `RapierPhysicsPlugin::<FixtureFilterHook>`.
#[derive(SystemParam)]
pub struct FixtureFilterHook<'w, 's> {
    fixtures: Query<'w, 's, &'static Fixture>,
}

impl FixtureFilterHook<'_, '_> {
    /// Colliders without a [`Fixture`] behave like the default filter.
    pub fn allows_pair(&self, a: Entity, b: Entity) -> bool {
        let filter = |e: Entity| -> CollisionFilter {
            self.fixtures.get(e).map(|f| f.filter).unwrap_or_default()
        };
        filter(a).allows(&filter(b))
    }
}

impl BevyPhysicsHooks for FixtureFilterHook<'_, '_> {
    fn filter_contact_pair(&self, context: PairFilterContextView) -> Option<SolverFlags> {
        self.allows_pair(context.collider1(), context.collider2())
            .then_some(SolverFlags::COMPUTE_IMPULSES)
    }

    fn filter_intersection_pair(&self, context: PairFilterContextView) -> bool {
        self.allows_pair(context.collider1(), context.collider2())
    }
}
