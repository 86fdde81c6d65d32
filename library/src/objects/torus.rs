use crate::geometry::alias::{Point, Vector};
use crate::objects::material_tag::MaterialTag;
use crate::objects::sdf::Sdf;
use cgmath::InnerSpace;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TorusIndex(pub(crate) usize);
impl From<usize> for TorusIndex {
    fn from(value: usize) -> Self {
        TorusIndex(value)
    }
}

const CANONICAL_UP: Vector = Vector::new(0.0, 1.0, 0.0);

/// The ring lies in the plane through `center` orthogonal to `normal`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Torus {
    center: Point,
    normal: Vector,
    major_radius: f32,
    minor_radius: f32,
    material: MaterialTag,
}

impl Torus {
    #[must_use]
    pub(crate) fn new(center: Point, normal: Vector, major_radius: f32, minor_radius: f32, material: MaterialTag) -> Self {
        assert!((normal.magnitude2() - 1.0).abs() < 1e-4, "normal must have unit length");
        assert!(minor_radius > 0.0, "minor radius must be positive");
        assert!(major_radius > minor_radius, "major radius must exceed minor radius");
        Torus { center, normal, major_radius, minor_radius, material }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn major_radius(&self) -> f32 {
        self.major_radius
    }

    #[must_use]
    pub fn minor_radius(&self) -> f32 {
        self.minor_radius
    }

    #[must_use]
    pub fn material(&self) -> MaterialTag {
        self.material
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn set_radii(&mut self, major_radius: f32, minor_radius: f32) {
        assert!(minor_radius > 0.0, "minor radius must be positive");
        assert!(major_radius > minor_radius, "major radius must exceed minor radius");
        self.major_radius = major_radius;
        self.minor_radius = minor_radius;
    }

    /// Rodrigues rotation taking the ring normal onto the canonical up
    /// axis, applied to a center-relative point. The `1/(1+c)` correction
    /// blows up when the normal is anti-parallel to up; that case is an
    /// exact half-turn about the x axis.
    fn into_ring_frame(&self, local: Vector) -> Vector {
        let cosine = self.normal.dot(CANONICAL_UP);
        if 1.0 + cosine < 1e-6 {
            return Vector::new(local.x, -local.y, -local.z);
        }
        let axis = self.normal.cross(CANONICAL_UP);
        local + axis.cross(local) + axis.cross(axis.cross(local)) / (1.0 + cosine)
    }
}

impl Sdf for Torus {
    fn sdf(&self, position: Point) -> f32 {
        let local = self.into_ring_frame(position - self.center);
        let ring_distance = (local.x * local.x + local.z * local.z).sqrt() - self.major_radius;
        (ring_distance * ring_distance + local.y * local.y).sqrt() - self.minor_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use more_asserts::assert_lt;

    const MAJOR: f32 = 0.3;
    const MINOR: f32 = 0.05;

    fn make_canonical_torus() -> Torus {
        Torus::new(Point::new(0.0, 0.0, 0.0), Vector::new(0.0, 1.0, 0.0), MAJOR, MINOR, MaterialTag::NORMAL_VISUALIZATION)
    }

    #[test]
    fn test_sdf_on_the_ring_spine_is_minus_minor_radius() {
        let system_under_test = make_canonical_torus();

        assert_approx_eq!(f32, system_under_test.sdf(Point::new(MAJOR, 0.0, 0.0)), -MINOR, epsilon = 1e-6);
    }

    #[test]
    fn test_sdf_is_zero_on_the_outer_equator() {
        let system_under_test = make_canonical_torus();

        assert_approx_eq!(f32, system_under_test.sdf(Point::new(MAJOR + MINOR, 0.0, 0.0)), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sdf_at_the_center_is_distance_to_the_tube() {
        let system_under_test = make_canonical_torus();

        assert_approx_eq!(f32, system_under_test.sdf(Point::new(0.0, 0.0, 0.0)), MAJOR - MINOR, epsilon = 1e-6);
    }

    #[test]
    fn test_tilted_ring_plane_moves_the_surface() {
        let system_under_test =
            Torus::new(Point::new(0.0, 0.0, 0.0), Vector::new(1.0, 0.0, 0.0), MAJOR, MINOR, MaterialTag::NORMAL_VISUALIZATION);

        // ring now lies in the y-z plane
        assert_approx_eq!(f32, system_under_test.sdf(Point::new(0.0, MAJOR + MINOR, 0.0)), 0.0, epsilon = 1e-5);
        assert_lt!(system_under_test.sdf(Point::new(0.0, 0.0, MAJOR)), 0.0);
    }

    #[test]
    fn test_anti_parallel_normal_keeps_the_same_shape() {
        let flipped =
            Torus::new(Point::new(0.0, 0.0, 0.0), Vector::new(0.0, -1.0, 0.0), MAJOR, MINOR, MaterialTag::NORMAL_VISUALIZATION);
        let canonical = make_canonical_torus();

        let probe = Point::new(0.21, 0.04, -0.17);

        assert_approx_eq!(f32, flipped.sdf(probe), canonical.sdf(probe), epsilon = 1e-6);
    }

    #[test]
    fn test_offset_center() {
        let system_under_test =
            Torus::new(Point::new(-1.0, 0.0, -1.0), Vector::new(0.0, 1.0, 0.0), MAJOR, MINOR, MaterialTag::NORMAL_VISUALIZATION);

        assert_approx_eq!(f32, system_under_test.sdf(Point::new(-1.0 + MAJOR, 0.0, -1.0)), -MINOR, epsilon = 1e-6);
    }

    #[test]
    #[should_panic(expected = "major radius must exceed minor radius")]
    fn test_new_with_swapped_radii() {
        let _system_under_test =
            Torus::new(Point::new(0.0, 0.0, 0.0), Vector::new(0.0, 1.0, 0.0), MINOR, MAJOR, MaterialTag::NORMAL_VISUALIZATION);
    }
}
