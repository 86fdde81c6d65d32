pub mod alias;
pub mod ray;
pub mod hit;
pub(crate) mod fundamental_constants;
