pub mod sdf;
pub mod material_tag;
pub mod sphere;
pub mod plane;
pub mod sdf_box;
pub mod torus;
