use crate::geometry::alias::{Point, Vector};
use crate::rendering::frame_buffer::{FrameBuffer, FrameBufferSize};
use crate::rendering::shading::{shade, BLACK};
use crate::scene::camera::{Camera, CameraError};
use crate::scene::container::Container;
use cgmath::{Deg, Vector2};
use log::debug;
use more_asserts::{assert_gt, assert_lt};
use rayon::prelude::*;
use std::time::Instant;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RenderError {
    #[error(transparent)]
    Camera(#[from] CameraError),
    #[error("frame buffer is {actual:?}, the renderer expects {expected:?}")]
    FrameBufferSizeMismatch { expected: FrameBufferSize, actual: FrameBufferSize },
}

/// Orchestrates one frame: a ray per pixel, nearest hit across the
/// scene, one shading rule per material. Pixels are independent, so rows
/// are dealt out to the rayon pool; the scene is borrowed immutably for
/// the whole pass and the frame buffer is fully overwritten.
pub struct Renderer {
    resolution: FrameBufferSize,
    field_of_view: Deg<f32>,
}

impl Renderer {
    #[must_use]
    pub fn new(resolution: FrameBufferSize, field_of_view: Deg<f32>) -> Self {
        assert_gt!(field_of_view.0, 0.0);
        assert_lt!(field_of_view.0, 180.0);
        Self { resolution, field_of_view }
    }

    #[must_use]
    pub fn resolution(&self) -> FrameBufferSize {
        self.resolution
    }

    pub fn render(
        &self,
        scene: &Container,
        camera_position: Point,
        camera_look_at: Point,
        camera_up: Vector,
        frame: &mut FrameBuffer,
    ) -> Result<(), RenderError> {
        if frame.size() != self.resolution {
            return Err(RenderError::FrameBufferSizeMismatch { expected: self.resolution, actual: frame.size() });
        }

        let film = Camera::film_for_fov(self.field_of_view, self.resolution.aspect_ratio());
        let resolution = Vector2::new(self.resolution.width() as f32, self.resolution.height() as f32);
        let camera = Camera::new(camera_position, camera_look_at, camera_up, film, resolution)?;

        let frame_start = Instant::now();
        let width = self.resolution.width() as usize;
        frame.pixels_mut().par_chunks_mut(width).enumerate().for_each(|(row, pixels)| {
            for (column, pixel) in pixels.iter_mut().enumerate() {
                let ray = camera.shoot_ray_from_screen(Vector2::new(column as f32, row as f32));
                let (hit, material) = scene.intersect(&ray);
                *pixel = if hit.is_miss() { BLACK } else { shade(&ray, &hit, material) };
            }
        });
        debug!("frame {}x{} rendered in {:?}", self.resolution.width(), self.resolution.height(), frame_start.elapsed());

        Ok(())
    }
}
