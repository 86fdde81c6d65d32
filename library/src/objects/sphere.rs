use crate::geometry::alias::Point;
use crate::objects::material_tag::MaterialTag;
use crate::objects::sdf::Sdf;
use cgmath::InnerSpace;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SphereIndex(pub(crate) usize);
impl From<usize> for SphereIndex {
    fn from(value: usize) -> Self {
        SphereIndex(value)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f32,
    material: MaterialTag,
}

impl Sphere {
    #[must_use]
    pub(crate) fn new(center: Point, radius: f32, material: MaterialTag) -> Self {
        assert!(radius > 0.0, "radius must be positive");
        Sphere { center, radius, material }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[must_use]
    pub fn material(&self) -> MaterialTag {
        self.material
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn set_radius(&mut self, radius: f32) {
        assert!(radius > 0.0, "radius must be positive");
        self.radius = radius;
    }
}

impl Sdf for Sphere {
    fn sdf(&self, position: Point) -> f32 {
        (position - self.center).magnitude() - self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use more_asserts::{assert_gt, assert_lt};

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn test_new_with_negative_radius() {
        let _system_under_test = Sphere::new(Point::new(0.0, 0.0, 0.0), -1.0, MaterialTag::NORMAL_VISUALIZATION);
    }

    #[test]
    fn test_sdf_is_negative_inside() {
        let system_under_test = Sphere::new(Point::new(1.0, 2.0, 3.0), 2.0, MaterialTag::NORMAL_VISUALIZATION);

        assert_lt!(system_under_test.sdf(Point::new(1.0, 2.0, 3.0)), 0.0);
        assert_lt!(system_under_test.sdf(Point::new(2.0, 2.0, 3.0)), 0.0);
    }

    #[test]
    fn test_sdf_is_zero_on_the_boundary() {
        let system_under_test = Sphere::new(Point::new(1.0, 2.0, 3.0), 2.0, MaterialTag::NORMAL_VISUALIZATION);

        let actual_distance = system_under_test.sdf(Point::new(3.0, 2.0, 3.0));

        assert_approx_eq!(f32, actual_distance, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sdf_is_positive_outside() {
        let system_under_test = Sphere::new(Point::new(0.0, 0.0, 0.0), 1.0, MaterialTag::NORMAL_VISUALIZATION);

        assert_gt!(system_under_test.sdf(Point::new(0.0, 3.0, 0.0)), 0.0);
    }

    #[test]
    fn test_sdf_equals_euclidean_distance_minus_radius() {
        let system_under_test = Sphere::new(Point::new(0.0, 0.0, 0.0), 0.5, MaterialTag::NORMAL_VISUALIZATION);

        let actual_distance = system_under_test.sdf(Point::new(0.0, 0.0, 3.0));

        assert_approx_eq!(f32, actual_distance, 2.5, epsilon = 1e-6);
    }
}
