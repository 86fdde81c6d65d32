use anyhow::Context;
use cgmath::Deg;
use image::RgbImage;
use library::geometry::alias::{Point, Vector};
use library::objects::material_tag::MaterialTag;
use library::rendering::frame_buffer::{FrameBuffer, FrameBufferSize};
use library::rendering::renderer::Renderer;
use library::scene::container::Container;
use log::info;
use palette::Srgb;
use std::env;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const FIELD_OF_VIEW: Deg<f32> = Deg(60.0);
const DEFAULT_SCREENSHOT_PATH: &str = "screenshot.png";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let screenshot_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_SCREENSHOT_PATH.to_string());

    let mut scene = Container::new();
    scene.add_sphere(Point::new(1.0, 0.0, -1.0), 0.5, MaterialTag::NORMAL_VISUALIZATION)?;
    scene.add_plane(Vector::new(0.0, 1.0, 0.0), 0.0, MaterialTag::CHECKERBOARD)?;
    scene.add_box(Point::new(0.0, 0.0, -1.0), Vector::new(0.5, 0.5, 0.5), MaterialTag::NORMAL_VISUALIZATION)?;
    scene.add_torus(Point::new(-1.0, 0.0, -1.0), Vector::new(0.0, 1.0, 0.0), 0.3, 0.05, MaterialTag::NORMAL_VISUALIZATION)?;

    let size = FrameBufferSize::new(WIDTH, HEIGHT);
    let renderer = Renderer::new(size, FIELD_OF_VIEW);
    let mut frame = FrameBuffer::new(size);

    info!("rendering {WIDTH}x{HEIGHT} frame");
    renderer.render(
        &scene,
        Point::new(0.0, 1.0, 1.0),
        Point::new(0.0, 0.0, 0.0),
        Vector::new(0.0, 1.0, 0.0),
        &mut frame,
    )?;

    save_screenshot(&frame, &screenshot_path)?;
    info!("screenshot saved to {screenshot_path}");

    Ok(())
}

fn save_screenshot(frame: &FrameBuffer, path: &str) -> anyhow::Result<()> {
    let size = frame.size();
    let mut image = RgbImage::new(size.width(), size.height());
    for (index, pixel) in frame.pixels().iter().enumerate() {
        let x = index as u32 % size.width();
        let y = index as u32 / size.width();
        let encoded: Srgb<u8> = Srgb::from_linear(*pixel);
        image.put_pixel(x, y, image::Rgb([encoded.red, encoded.green, encoded.blue]));
    }
    image.save(path).with_context(|| format!("failed to write screenshot to {path}"))?;
    Ok(())
}
