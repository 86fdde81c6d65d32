use crate::geometry::alias::{Point, Vector};
use cgmath::InnerSpace;

/// A half-line in world space. The direction is expected to be of unit
/// length; it is the caller's contract and is never renormalized here.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Vector,
}

impl Ray {
    #[must_use]
    pub fn new(origin: Point, direction: Vector) -> Self {
        debug_assert!(
            (direction.magnitude2() - 1.0).abs() < 1e-4,
            "ray direction must have unit length"
        );
        Ray { origin, direction }
    }

    #[must_use]
    pub fn at(&self, t: f32) -> Point {
        self.origin + self.direction * t
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[must_use]
    pub fn direction(&self) -> Vector {
        self.direction
    }
}
