//! Glint renderer - CPU path tracing of sphere scenes.
//!
//! A Monte Carlo path tracer for diffuse, metallic and dielectric spheres.
//! Rendering is single threaded and every random draw comes from a caller
//! supplied stream.

mod camera;
mod config;
mod hittable;
mod material;
mod output;
mod renderer;
mod scene;
mod sphere;

pub use camera::Camera;
pub use config::{ConfigError, ConfigResult, RenderConfig};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use output::{save_png, save_ppm, write_png, write_ppm, OutputError, OutputResult};
pub use renderer::{
    color_to_rgb, linear_to_gamma, ray_color, render, render_pixel, sky_color, ImageBuffer, T_MIN,
};
pub use scene::{Scene, UnknownScene};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Color, Interval, Point3, Ray, Vec3};
