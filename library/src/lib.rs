#![allow(clippy::bool_assert_comparison)]
#![allow(clippy::bool_comparison)]

pub mod geometry;
pub mod objects;
pub mod rendering;
pub mod scene;

pub use crate::geometry::fundamental_constants::MAX_PRIMITIVES_PER_KIND;
