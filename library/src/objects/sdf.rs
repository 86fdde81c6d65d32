use crate::geometry::alias::Point;

/// Signed distance to an implicit surface: negative inside the solid,
/// zero on the boundary, positive outside. The magnitude must be a
/// conservative lower bound on the true distance to the surface, or the
/// marching step can overshoot and tunnel through geometry.
pub trait Sdf {
    #[must_use]
    fn sdf(&self, position: Point) -> f32;
}
