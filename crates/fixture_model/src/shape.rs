use bevy::prelude::*;
use thiserror::Error;

const EPSILON: f32 = 1.0e-6;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("width and height must be positive and finite, got {0} x {1}")]
    InvalidExtents(f32, f32),
    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("vertex {0} is not a finite point")]
    NonFiniteVertex(usize),
    #[error("vertices {0} and {1} coincide")]
    CoincidentVertices(usize, usize),
    #[error("polygon has zero area")]
    ZeroArea,
    #[error("polygon is not convex at vertex {0}")]
    NotConvex(usize),
}

/// Convex geometry in body-local coordinates (meters).
#[derive(Debug, Clone, PartialEq)]
pub enum ConvexShape {
    Circle { center: Vec2, radius: f32 },
    /// Counter-clockwise, strictly convex, at least three vertices.
    Polygon { vertices: Vec<Vec2> },
}

impl ConvexShape {
    pub fn circle(radius: f32) -> Result<Self, ShapeError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ShapeError::InvalidRadius(radius));
        }
        Ok(Self::Circle { center: Vec2::ZERO, radius })
    }

    /// Axis-aligned rectangle centered on the origin.
    pub fn rectangle(width: f32, height: f32) -> Result<Self, ShapeError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !(valid(width) && valid(height)) {
            return Err(ShapeError::InvalidExtents(width, height));
        }
        let (hw, hh) = (width * 0.5, height * 0.5);
        Ok(Self::Polygon {
            vertices: vec![
                Vec2::new(-hw, -hh),
                Vec2::new(hw, -hh),
                Vec2::new(hw, hh),
                Vec2::new(-hw, hh),
            ],
        })
    }

    /// Validates a vertex loop and normalizes it to counter-clockwise winding.
    pub fn polygon(mut vertices: Vec<Vec2>) -> Result<Self, ShapeError> {
        let n = vertices.len();
        if n < 3 {
            return Err(ShapeError::TooFewVertices(n));
        }
        if let Some(i) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(ShapeError::NonFiniteVertex(i));
        }
        for i in 0..n {
            let j = (i + 1) % n;
            if vertices[i].distance_squared(vertices[j]) <= EPSILON * EPSILON {
                return Err(ShapeError::CoincidentVertices(i, j));
            }
        }
        let area = signed_area(&vertices);
        if area.abs() <= EPSILON {
            return Err(ShapeError::ZeroArea);
        }
        if area < 0.0 {
            vertices.reverse();
        }
        for i in 0..n {
            let prev = vertices[(i + n - 1) % n];
            let cur = vertices[i];
            let next = vertices[(i + 1) % n];
            if (cur - prev).perp_dot(next - cur) < -EPSILON {
                return Err(ShapeError::NotConvex(i));
            }
        }
        Ok(Self::Polygon { vertices })
    }

    pub fn translate(&mut self, offset: Vec2) {
        match self {
            Self::Circle { center, .. } => *center += offset,
            Self::Polygon { vertices } => vertices.iter_mut().for_each(|v| *v += offset),
        }
    }

    /// Rotates about the local origin by `angle` radians.
    pub fn rotate(&mut self, angle: f32) {
        let rot = Vec2::from_angle(angle);
        match self {
            Self::Circle { center, .. } => *center = rot.rotate(*center),
            Self::Polygon { vertices } => vertices.iter_mut().for_each(|v| *v = rot.rotate(*v)),
        }
    }

    pub fn centroid(&self) -> Vec2 {
        match self {
            Self::Circle { center, .. } => *center,
            Self::Polygon { vertices } => polygon_centroid(vertices),
        }
    }

    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Circle { .. } => 0,
            Self::Polygon { vertices } => vertices.len(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "Circle",
            Self::Polygon { .. } => "Polygon",
        }
    }
}

fn signed_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].perp_dot(vertices[(i + 1) % n]))
        .sum::<f32>()
        * 0.5
}

fn polygon_centroid(vertices: &[Vec2]) -> Vec2 {
    let n = vertices.len();
    let area = signed_area(vertices);
    if area.abs() <= EPSILON {
        return vertices.iter().copied().sum::<Vec2>() / n.max(1) as f32;
    }
    let mut c = Vec2::ZERO;
    for i in 0..n {
        let (a, b) = (vertices[i], vertices[(i + 1) % n]);
        c += (a + b) * a.perp_dot(b);
    }
    c / (6.0 * area)
}
