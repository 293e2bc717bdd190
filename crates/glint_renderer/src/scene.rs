//! Built-in scenes.
//!
//! Scenes are assembled in code; each material is created once and shared
//! between the spheres that use it.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use glint_math::{Color, Point3};
use log::debug;
use thiserror::Error;

use crate::{Dielectric, HittableList, Lambertian, Material, Metal, Sphere};

/// Returned when a scene name does not match any built-in scene.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown scene '{0}' (expected one of: demo, simple, metal, materials)")]
pub struct UnknownScene(pub String);

/// The built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    /// Diffuse, glass and mirror spheres on a grey ground
    #[default]
    Demo,
    /// One diffuse sphere on a yellow ground, cheap to render
    Simple,
    /// Three metals of increasing roughness
    Metal,
    /// Diffuse, fuzzy metal and glass spheres on a yellow ground
    Materials,
}

impl Scene {
    pub const ALL: [Scene; 4] = [Scene::Demo, Scene::Simple, Scene::Metal, Scene::Materials];

    pub fn name(&self) -> &'static str {
        match self {
            Scene::Demo => "demo",
            Scene::Simple => "simple",
            Scene::Metal => "metal",
            Scene::Materials => "materials",
        }
    }

    /// Build the scene's object list.
    pub fn build(&self) -> HittableList {
        let mut world = HittableList::new();

        match self {
            Scene::Demo => {
                add_ground(&mut world, Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))));
                add_row(
                    &mut world,
                    Arc::new(Dielectric::new(1.5)),
                    Arc::new(Lambertian::new(Color::new(0.7, 0.3, 0.3))),
                    Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0)),
                );
            }
            Scene::Simple => {
                add_ground(&mut world, Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0))));
                world.add(Box::new(Sphere::new(
                    Point3::new(0.0, 0.0, -1.0),
                    0.5,
                    Arc::new(Lambertian::new(Color::new(0.7, 0.3, 0.3))),
                )));
            }
            Scene::Metal => {
                add_ground(&mut world, Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.8))));
                add_row(
                    &mut world,
                    Arc::new(Metal::new(Color::new(0.8, 0.8, 0.8), 0.3)),
                    Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0)),
                    Arc::new(Metal::new(Color::new(0.8, 0.8, 0.8), 1.0)),
                );
            }
            Scene::Materials => {
                add_ground(&mut world, Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0))));
                add_row(
                    &mut world,
                    Arc::new(Metal::new(Color::new(0.8, 0.8, 0.8), 0.3)),
                    Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5))),
                    Arc::new(Dielectric::new(1.5)),
                );
            }
        }

        debug!("Built scene '{}' with {} spheres", self.name(), world.len());
        world
    }
}

/// Large sphere below the row acting as a floor.
fn add_ground(world: &mut HittableList, material: Arc<dyn Material>) {
    world.add(Box::new(Sphere::new(
        Point3::new(0.0, -100.5, -1.0),
        100.0,
        material,
    )));
}

/// Three unit-diameter spheres at x = -1, 0, 1 one unit in front of the camera.
fn add_row(
    world: &mut HittableList,
    left: Arc<dyn Material>,
    center: Arc<dyn Material>,
    right: Arc<dyn Material>,
) {
    for (x, material) in [(-1.0, left), (0.0, center), (1.0, right)] {
        world.add(Box::new(Sphere::new(Point3::new(x, 0.0, -1.0), 0.5, material)));
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scene {
    type Err = UnknownScene;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scene::ALL
            .into_iter()
            .find(|scene| scene.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownScene(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hittable;
    use glint_math::{Interval, Ray, Vec3};

    #[test]
    fn test_scene_names_roundtrip() {
        for scene in Scene::ALL {
            assert_eq!(scene.name().parse::<Scene>(), Ok(scene));
            assert_eq!(scene.to_string(), scene.name());
        }
        assert_eq!(" Metal ".parse::<Scene>(), Ok(Scene::Metal));
    }

    #[test]
    fn test_unknown_scene() {
        let err = "cornell".parse::<Scene>().unwrap_err();
        assert_eq!(err, UnknownScene("cornell".into()));
        assert!(err.to_string().contains("cornell"));
    }

    #[test]
    fn test_scene_sizes() {
        assert_eq!(Scene::Demo.build().len(), 4);
        assert_eq!(Scene::Simple.build().len(), 2);
        assert_eq!(Scene::Metal.build().len(), 4);
        assert_eq!(Scene::Materials.build().len(), 4);
    }

    #[test]
    fn test_center_sphere_is_first_hit() {
        for scene in Scene::ALL {
            let world = scene.build();
            let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
            let rec = world
                .hit(&ray, Interval::new(0.001, f64::INFINITY))
                .expect("every scene has a sphere straight ahead");
            assert!((rec.t - 0.5).abs() < 1e-12, "{scene}: t = {}", rec.t);
        }
    }

    #[test]
    fn test_ground_below_camera() {
        let world = Scene::Simple.build();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Y);
        let rec = world
            .hit(&ray, Interval::new(0.001, f64::INFINITY))
            .expect("ground is hit");
        assert!(rec.t < 0.6);
        assert!(rec.normal.y > 0.99);
    }
}
