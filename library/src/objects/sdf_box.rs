use crate::geometry::alias::{Point, Vector};
use crate::objects::material_tag::MaterialTag;
use crate::objects::sdf::Sdf;
use cgmath::InnerSpace;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BoxIndex(pub(crate) usize);
impl From<usize> for BoxIndex {
    fn from(value: usize) -> Self {
        BoxIndex(value)
    }
}

/// Axis-aligned box given by its center and per-axis half extents.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SdfBox {
    center: Point,
    half_size: Vector,
    material: MaterialTag,
}

impl SdfBox {
    #[must_use]
    pub(crate) fn new(center: Point, half_size: Vector, material: MaterialTag) -> Self {
        assert!(
            half_size.x > 0.0 && half_size.y > 0.0 && half_size.z > 0.0,
            "half extents must be positive on every axis"
        );
        SdfBox { center, half_size, material }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn half_size(&self) -> Vector {
        self.half_size
    }

    #[must_use]
    pub fn material(&self) -> MaterialTag {
        self.material
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn set_half_size(&mut self, half_size: Vector) {
        assert!(
            half_size.x > 0.0 && half_size.y > 0.0 && half_size.z > 0.0,
            "half extents must be positive on every axis"
        );
        self.half_size = half_size;
    }
}

impl Sdf for SdfBox {
    fn sdf(&self, position: Point) -> f32 {
        let q = (position - self.center).map(f32::abs) - self.half_size;
        let outside = q.map(|component| component.max(0.0)).magnitude();
        let inside = q.x.max(q.y.max(q.z)).min(0.0);
        outside + inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use more_asserts::assert_lt;
    use rstest::rstest;

    fn make_unit_box() -> SdfBox {
        SdfBox::new(Point::new(0.0, 0.0, 0.0), Vector::new(0.5, 0.5, 0.5), MaterialTag::NORMAL_VISUALIZATION)
    }

    #[test]
    fn test_sdf_is_negative_at_the_center() {
        let system_under_test = make_unit_box();

        assert_approx_eq!(f32, system_under_test.sdf(Point::new(0.0, 0.0, 0.0)), -0.5, epsilon = 1e-6);
    }

    #[rstest]
    #[case(Point::new(0.5, 0.0, 0.0))]
    #[case(Point::new(0.0, -0.5, 0.0))]
    #[case(Point::new(0.5, 0.5, 0.5))]
    fn test_sdf_is_zero_on_the_boundary(#[case] position: Point) {
        let system_under_test = make_unit_box();

        assert_approx_eq!(f32, system_under_test.sdf(position), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sdf_outside_a_face_is_the_axis_excess() {
        let system_under_test = make_unit_box();

        assert_approx_eq!(f32, system_under_test.sdf(Point::new(2.0, 0.0, 0.0)), 1.5, epsilon = 1e-6);
    }

    #[test]
    fn test_sdf_outside_a_corner_is_the_diagonal_excess() {
        let system_under_test = make_unit_box();

        let actual_distance = system_under_test.sdf(Point::new(1.5, 1.5, 1.5));

        assert_approx_eq!(f32, actual_distance, 3.0_f32.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn test_sdf_respects_offset_center() {
        let system_under_test =
            SdfBox::new(Point::new(0.0, 0.0, -1.0), Vector::new(0.5, 0.5, 0.5), MaterialTag::NORMAL_VISUALIZATION);

        assert_lt!(system_under_test.sdf(Point::new(0.0, 0.0, -1.0)), 0.0);
        assert_approx_eq!(f32, system_under_test.sdf(Point::new(0.0, 0.0, 0.5)), 1.0, epsilon = 1e-6);
    }

    #[test]
    #[should_panic(expected = "half extents must be positive")]
    fn test_new_with_flat_extent() {
        let _system_under_test =
            SdfBox::new(Point::new(0.0, 0.0, 0.0), Vector::new(1.0, 0.0, 1.0), MaterialTag::NORMAL_VISUALIZATION);
    }
}
