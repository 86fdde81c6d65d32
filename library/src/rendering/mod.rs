pub mod frame_buffer;
pub mod renderer;
pub(crate) mod ray_marcher;
pub(crate) mod shading;
