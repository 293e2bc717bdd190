//! Camera for ray generation.

use glint_math::{Point3, Ray, Vec3};

/// Pinhole camera generating rays through a viewport one unit in front of it.
#[derive(Debug, Clone)]
pub struct Camera {
    // Camera positioning
    look_from: Point3,
    look_at: Point3,
    vup: Vec3,

    // Lens settings
    vfov: f64, // Vertical field of view in degrees
    aspect_ratio: f64,

    // Cached computed values (set by initialize())
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera at `look_from` aimed at `look_at`.
    pub fn new(look_from: Point3, look_at: Point3, vup: Vec3, vfov: f64, aspect_ratio: f64) -> Self {
        let mut camera = Self {
            look_from,
            look_at,
            vup,
            vfov,
            aspect_ratio,
            origin: Point3::ZERO,
            lower_left_corner: Point3::ZERO,
            horizontal: Vec3::ZERO,
            vertical: Vec3::ZERO,
        };
        camera.initialize();
        camera
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Point3, look_at: Point3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self.initialize();
        self
    }

    /// Set vertical field of view in degrees.
    pub fn with_vfov(mut self, vfov: f64) -> Self {
        self.vfov = vfov;
        self.initialize();
        self
    }

    /// Set viewport width / height.
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self.initialize();
        self
    }

    fn initialize(&mut self) {
        self.origin = self.look_from;

        // Calculate viewport dimensions
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = self.aspect_ratio * viewport_height;

        // Calculate camera basis vectors
        let w = (self.look_from - self.look_at).normalize();
        let u = self.vup.cross(w).normalize();
        let v = w.cross(u);

        self.horizontal = viewport_width * u;
        self.vertical = viewport_height * v;
        self.lower_left_corner =
            self.origin - self.horizontal / 2.0 - self.vertical / 2.0 - w;
    }

    /// Ray through viewport coordinates `(s, t)`, where (0, 0) is the lower
    /// left corner and (1, 1) the upper right.
    ///
    /// The direction is left unnormalized.
    pub fn get_ray(&self, s: f64, t: f64) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin,
        )
    }

    /// Get the camera position.
    pub fn origin(&self) -> Point3 {
        self.origin
    }
}

impl Default for Camera {
    /// Camera at the origin looking down -z with a 90 degree field of view
    /// and a 16:9 viewport.
    fn default() -> Self {
        Self::new(Point3::ZERO, Point3::NEG_Z, Vec3::Y, 90.0, 16.0 / 9.0)
    }
}
