pub mod camera;
pub mod container;
