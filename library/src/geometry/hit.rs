use crate::geometry::alias::Vector;
use cgmath::Zero;

/// Outcome of marching one ray: parametric distance to the converged
/// surface and the estimated normal there. A non-converged ray is not an
/// error; it is encoded as an infinite distance with a zero normal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    distance: f32,
    normal: Vector,
}

impl Hit {
    #[must_use]
    pub(crate) fn new(distance: f32, normal: Vector) -> Self {
        Hit { distance, normal }
    }

    #[must_use]
    pub fn miss() -> Self {
        Hit { distance: f32::INFINITY, normal: Vector::zero() }
    }

    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    #[must_use]
    pub fn normal(&self) -> Vector {
        self.normal
    }

    #[must_use]
    pub fn is_miss(&self) -> bool {
        self.distance.is_infinite()
    }
}
