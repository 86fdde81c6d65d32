use crate::geometry::alias::{Point, Vector};
use crate::objects::material_tag::MaterialTag;
use crate::objects::sdf::Sdf;
use cgmath::{EuclideanSpace, InnerSpace};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PlaneIndex(pub(crate) usize);
impl From<usize> for PlaneIndex {
    fn from(value: usize) -> Self {
        PlaneIndex(value)
    }
}

/// Half-space boundary: all points with `dot(p, normal) == offset`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    normal: Vector,
    offset: f32,
    material: MaterialTag,
}

impl Plane {
    #[must_use]
    pub(crate) fn new(normal: Vector, offset: f32, material: MaterialTag) -> Self {
        assert!((normal.magnitude2() - 1.0).abs() < 1e-4, "normal must have unit length");
        Plane { normal, offset, material }
    }

    #[must_use]
    pub fn normal(&self) -> Vector {
        self.normal
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn material(&self) -> MaterialTag {
        self.material
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }
}

impl Sdf for Plane {
    fn sdf(&self, position: Point) -> f32 {
        position.to_vec().dot(self.normal) - self.offset
    }
}
