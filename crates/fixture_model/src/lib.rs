//! fixture_model: the record the fixture editors operate on.
//!
//! Responsibilities:
//! * Static category table backing the collision filter lists.
//! * `CollisionFilter` (default vs. category/mask) and the rapier pair hook
//!   that enforces it.
//! * `ConvexShape` geometry with the translate / rotate operations used when
//!   a local transform is baked into a new fixture.
//! * `Fixture` component plus conversion into rapier collider components.

pub mod category;
pub mod collider;
pub mod filter;
pub mod fixture;
pub mod hooks;
pub mod shape;

pub use category::*;
pub use collider::*;
pub use filter::*;
pub use fixture::*;
pub use hooks::*;
pub use shape::*;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FixtureError {
    #[error("invalid shape: {0}")]
    Shape(#[from] ShapeError),
    #[error("could not build a convex hull from {0} vertices")]
    DegenerateHull(usize),
    #[error("pixels per meter must be positive, got {0}")]
    InvalidScale(f32),
}
