use crate::geometry::hit::Hit;
use crate::geometry::ray::Ray;
use crate::objects::material_tag::MaterialTag;
use palette::LinSrgb;

pub(crate) const BLACK: LinSrgb = LinSrgb::new(0.0, 0.0, 0.0);
const WHITE: LinSrgb = LinSrgb::new(1.0, 1.0, 1.0);

/// Closed dispatch over the material tag. Background and unknown tags
/// shade to black; no lighting model is applied.
pub(crate) fn shade(ray: &Ray, hit: &Hit, material: MaterialTag) -> LinSrgb {
    match material {
        MaterialTag::NORMAL_VISUALIZATION => normal_shade(hit),
        MaterialTag::CHECKERBOARD => checkerboard_shade(ray, hit),
        _ => BLACK,
    }
}

fn normal_shade(hit: &Hit) -> LinSrgb {
    let normal = hit.normal();
    LinSrgb::new(normal.x.abs(), normal.y.abs(), normal.z.abs())
}

fn checkerboard_shade(ray: &Ray, hit: &Hit) -> LinSrgb {
    let position = ray.at(hit.distance());
    let dark = (position.x.rem_euclid(1.0) > 0.5) ^ (position.z.rem_euclid(1.0) > 0.5);
    if dark { BLACK } else { WHITE }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::alias::{Point, Vector};
    use rstest::rstest;

    fn make_downward_ray(origin: Point) -> Ray {
        Ray::new(origin, Vector::new(0.0, -1.0, 0.0))
    }

    #[test]
    fn test_normal_shade_is_component_wise_absolute_value() {
        let ray = make_downward_ray(Point::new(0.0, 1.0, 0.0));
        let hit = Hit::new(1.0, Vector::new(-1.0, 0.0, 0.0));

        let actual_color = shade(&ray, &hit, MaterialTag::NORMAL_VISUALIZATION);

        assert_eq!(actual_color, LinSrgb::new(1.0, 0.0, 0.0));
    }

    #[rstest]
    #[case(Point::new(0.25, 1.0, 0.25), WHITE)]
    #[case(Point::new(0.75, 1.0, 0.25), BLACK)]
    #[case(Point::new(0.25, 1.0, 0.75), BLACK)]
    #[case(Point::new(0.75, 1.0, 0.75), WHITE)]
    fn test_checkerboard_parity(#[case] origin: Point, #[case] expected_color: LinSrgb) {
        let ray = make_downward_ray(origin);
        let hit = Hit::new(1.0, Vector::new(0.0, 1.0, 0.0));

        assert_eq!(shade(&ray, &hit, MaterialTag::CHECKERBOARD), expected_color);
    }

    #[test]
    fn test_checkerboard_is_stable_on_negative_coordinates() {
        let ray = make_downward_ray(Point::new(-0.75, 1.0, -0.75));
        let hit = Hit::new(1.0, Vector::new(0.0, 1.0, 0.0));

        // (-0.75).rem_euclid(1.0) == 0.25 on both axes
        assert_eq!(shade(&ray, &hit, MaterialTag::CHECKERBOARD), WHITE);
    }

    #[rstest]
    #[case(MaterialTag::BACKGROUND)]
    #[case(MaterialTag(17))]
    fn test_unknown_tags_shade_to_black(#[case] material: MaterialTag) {
        let ray = make_downward_ray(Point::new(0.0, 1.0, 0.0));
        let hit = Hit::new(1.0, Vector::new(0.0, 1.0, 0.0));

        assert_eq!(shade(&ray, &hit, material), BLACK);
    }
}
