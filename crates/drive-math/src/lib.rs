pub mod angle;
pub mod bounds;

pub use glam::{dvec3, DMat4, DVec3};
pub use angle::{heading, wrap_parameter, Side};
pub use bounds::Bounds;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
