use crate::geometry::alias::{Point, Vector};
use crate::geometry::ray::Ray;
use cgmath::{Deg, InnerSpace, Rad, Vector2};
use thiserror::Error;

const FOCAL_LENGTH: f32 = 1.0;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum CameraError {
    #[error("camera position coincides with the look-at target")]
    EyeCoincidesWithTarget,
    #[error("look direction is parallel to the up vector")]
    LookDirectionParallelToUp,
}

/// Pinhole camera rebuilt once per frame from a live pose. The
/// orthonormal basis (u right, v up, w back) is derived eagerly so that
/// a degenerate pose is rejected before any ray is shot.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    position: Point,
    u: Vector,
    v: Vector,
    w: Vector,
    film: Vector2<f32>,
    resolution: Vector2<f32>,
}

impl Camera {
    pub fn new(
        position: Point,
        look_at: Point,
        up: Vector,
        film: Vector2<f32>,
        resolution: Vector2<f32>,
    ) -> Result<Camera, CameraError> {
        assert!(film.x > 0.0 && film.y > 0.0);
        assert!(resolution.x > 0.0 && resolution.y > 0.0);

        let backward = position - look_at;
        if backward.magnitude2() < 1e-12 {
            return Err(CameraError::EyeCoincidesWithTarget);
        }
        let w = backward.normalize();

        let right = up.cross(w);
        if right.magnitude2() < 1e-12 {
            return Err(CameraError::LookDirectionParallelToUp);
        }
        let u = right.normalize();
        let v = w.cross(u).normalize();

        Ok(Camera { position, u, v, w, film, resolution })
    }

    /// Film rectangle matching a diagonal field of view and an aspect
    /// ratio: `diagonal = 2 tan(fov / 2)`, split between height and
    /// width so that `width = height * aspect_ratio`.
    #[must_use]
    pub fn film_for_fov(field_of_view: Deg<f32>, aspect_ratio: f32) -> Vector2<f32> {
        assert!(aspect_ratio > 0.0, "aspect ratio must be positive");
        let film_diagonal = 2.0 * (Rad::from(field_of_view).0 / 2.0).tan();
        let film_height = film_diagonal / (1.0 + aspect_ratio * aspect_ratio).sqrt();
        Vector2::new(film_height * aspect_ratio, film_height)
    }

    /// Pixel (0, 0) is the top-left corner of the screen; the mapping
    /// flips and centers both axes onto the film rectangle, and the
    /// direction through the film point is negated into world space
    /// (the basis stores the backward axis).
    #[must_use]
    pub fn shoot_ray_from_screen(&self, pixel: Vector2<f32>) -> Ray {
        let x = self.film.x * (1.0 - 2.0 * (pixel.x + 0.5) / self.resolution.x);
        let y = self.film.y * (1.0 - 2.0 * (pixel.y + 0.5) / self.resolution.y);
        let direction = self.u * x + self.v * y + self.w * FOCAL_LENGTH;
        Ray::new(self.position, -direction.normalize())
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }
}
