//! Glint math - double precision vectors, rays and sampling helpers.

// Re-export glam for convenience
pub use glam;
pub use glam::DVec3;

mod interval;
mod ray;
pub mod random;
mod vec;

pub use interval::Interval;
pub use ray::Ray;
pub use vec::{reflect, refract, Vec3Ext};

/// 3-component double precision vector used for points, directions and colors.
pub type Vec3 = DVec3;

/// A position in world space.
pub type Point3 = Vec3;

/// Linear RGB radiance, unbounded above during shading.
pub type Color = Vec3;
