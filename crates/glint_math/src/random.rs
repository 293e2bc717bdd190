//! Random sampling helpers.
//!
//! Every helper draws from an explicitly passed random stream so renders and
//! tests can be made reproducible by seeding that stream.

use rand::{Rng, RngCore};

use crate::Vec3;

/// Uniform f64 in [0, 1).
#[inline]
pub fn random_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Uniform f64 in [min, max).
#[inline]
pub fn random_f64_range(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64(rng)
}

/// Vector with each component uniform in [0, 1).
pub fn random_vec3(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(random_f64(rng), random_f64(rng), random_f64(rng))
}

/// Vector with each component uniform in [min, max).
pub fn random_vec3_range(rng: &mut dyn RngCore, min: f64, max: f64) -> Vec3 {
    Vec3::new(
        random_f64_range(rng, min, max),
        random_f64_range(rng, min, max),
        random_f64_range(rng, min, max),
    )
}

/// Uniform point strictly inside the unit ball.
///
/// Rejection sampling from the [-1, 1]^3 cube; about 1.9 draws per sample.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_vec3_range(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Uniform direction on the unit sphere.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    random_in_unit_sphere(rng).normalize()
}

/// Point in the unit ball flipped into the hemisphere around `normal`.
pub fn random_in_hemisphere(rng: &mut dyn RngCore, normal: Vec3) -> Vec3 {
    let in_unit_sphere = random_in_unit_sphere(rng);
    if in_unit_sphere.dot(normal) > 0.0 {
        in_unit_sphere
    } else {
        -in_unit_sphere
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_f64_range_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10_000 {
            let x = random_f64_range(&mut rng, -2.0, 3.0);
            assert!((-2.0..3.0).contains(&x));
        }
    }

    #[test]
    fn test_unit_sphere_samples_are_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            assert!(random_in_unit_sphere(&mut rng).length_squared() < 1.0);
        }
    }

    #[test]
    fn test_unit_sphere_distribution_is_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 200_000;
        let mut inner = 0usize;
        let mut mean = Vec3::ZERO;
        let mut octants = [0usize; 8];

        for _ in 0..n {
            let p = random_in_unit_sphere(&mut rng);
            // A ball of radius 0.5 holds 1/8 of the volume
            if p.length_squared() < 0.25 {
                inner += 1;
            }
            mean += p;
            let idx = (p.x > 0.0) as usize | ((p.y > 0.0) as usize) << 1 | ((p.z > 0.0) as usize) << 2;
            octants[idx] += 1;
        }

        let inner_fraction = inner as f64 / n as f64;
        assert!((inner_fraction - 0.125).abs() < 0.005, "inner fraction {inner_fraction}");

        mean /= n as f64;
        assert!(mean.length() < 0.01, "mean {mean:?}");

        for count in octants {
            let fraction = count as f64 / n as f64;
            assert!((fraction - 0.125).abs() < 0.005, "octant fraction {fraction}");
        }
    }

    #[test]
    fn test_unit_vector_has_unit_length() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1_000 {
            let v = random_unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_hemisphere_follows_normal() {
        let mut rng = StdRng::seed_from_u64(5);
        let normal = Vec3::new(0.0, 1.0, 0.0);
        for _ in 0..1_000 {
            assert!(random_in_hemisphere(&mut rng, normal).dot(normal) >= 0.0);
        }
    }
}
