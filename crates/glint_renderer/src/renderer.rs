//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Bounce-limited radiance estimation
//! - Gamma correction
//! - Anti-aliasing via multi-sampling

use std::time::Instant;

use crate::{Camera, Hittable, RenderConfig, ScatterResult};
use glint_math::random::random_f64;
use glint_math::{Color, Interval, Ray};
use log::{debug, info};
use rand::RngCore;

/// Lower bound on hit distance, keeps scattered rays from re-hitting their
/// own origin surface.
pub const T_MIN: f64 = 0.001;

/// Log progress every this many scanlines.
const PROGRESS_INTERVAL: u32 = 20;

/// Compute the color seen by a ray.
///
/// Follows the path through at most `depth` surface interactions, carrying
/// the product of attenuations. Returns black once the bounce budget is spent.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    let mut throughput = Color::ONE;
    let mut ray = *ray;

    for _ in 0..depth {
        let Some(rec) = world.hit(&ray, Interval::new(T_MIN, f64::INFINITY)) else {
            return throughput * sky_color(&ray);
        };

        match rec.material.scatter(&ray, &rec, rng) {
            Some(ScatterResult {
                attenuation,
                scattered,
            }) => {
                throughput *= attenuation;
                ray = scattered;
            }
            // Ray was absorbed
            None => return Color::ZERO,
        }
    }

    Color::ZERO
}

/// Compute sky gradient background.
pub fn sky_color(ray: &Ray) -> Color {
    let unit_direction = ray.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - a) * white + a * blue
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Channel range before quantization; keeps 1.0 from rounding up to 256.
const INTENSITY: Interval = Interval {
    min: 0.0,
    max: 0.999,
};

/// Convert an averaged linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let quantize = |c: f64| (256.0 * INTENSITY.clamp(linear_to_gamma(c))) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Render a single pixel with multi-sampling.
///
/// `(i, j)` are viewport coordinates with `j = 0` at the bottom row.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let width = config.image_width;
    let height = config.image_height();
    // A single row or column has no extent to interpolate across
    let u_span = (width.max(2) - 1) as f64;
    let v_span = (height.max(2) - 1) as f64;

    let mut pixel_color = Color::ZERO;
    for _ in 0..config.samples_per_pixel {
        let u = (i as f64 + random_f64(rng)) / u_span;
        let v = (j as f64 + random_f64(rng)) / v_span;

        let ray = camera.get_ray(u, v);
        pixel_color += ray_color(&ray, world, config.max_depth, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f64
}

/// Averaged linear colors, row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y), y counted from the top.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y), y counted from the top.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Gamma-corrected RGB bytes, 3 per pixel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// Single threaded; every random draw comes from `rng`, so a seeded stream
/// reproduces the image exactly.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let width = config.image_width;
    let height = config.image_height();
    let mut image = ImageBuffer::new(width, height);

    info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        width, height, config.samples_per_pixel, config.max_depth
    );
    let start = Instant::now();

    for j in (0..height).rev() {
        if j % PROGRESS_INTERVAL == 0 {
            info!("Scanlines remaining: {}", j);
        }

        let row = height - 1 - j;
        for i in 0..width {
            let color = render_pixel(camera, world, i, j, config, rng);
            image.set(i, row, color);
        }
    }

    let elapsed = start.elapsed();
    debug!(
        "{} samples traced",
        width as u64 * height as u64 * config.samples_per_pixel as u64
    );
    info!("Rendered in {:.2?}", elapsed);

    image
}
