//! Vector operations glam does not provide.

use crate::Vec3;

/// Below this magnitude a component counts as zero.
const NEAR_ZERO_EPSILON: f64 = 1e-8;

/// Extra queries on [`Vec3`].
pub trait Vec3Ext {
    /// True if every component is within `1e-8` of zero.
    fn near_zero(&self) -> bool;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn near_zero(&self) -> bool {
        self.abs().cmplt(Vec3::splat(NEAR_ZERO_EPSILON)).all()
    }
}

/// Reflect `v` about the surface normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit vector `uv` through a surface with normal `n`.
///
/// `etai_over_etat` is the ratio of refractive indices across the boundary.
/// The cosine is capped at 1 so rounding cannot push it out of range.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_zero() {
        assert!(Vec3::ZERO.near_zero());
        assert!(Vec3::new(1e-9, -1e-9, 0.0).near_zero());
        assert!(!Vec3::new(1e-9, 2e-8, 0.0).near_zero());
        assert!(!Vec3::new(0.0, 0.0, -1.0).near_zero());
    }

    #[test]
    fn test_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(v, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_refract_straight_through() {
        // Normal incidence is not bent regardless of ratio
        let uv = Vec3::new(0.0, 0.0, -1.0);
        let out = refract(uv, Vec3::Z, 1.0 / 1.5);
        assert!((out - uv).length() < 1e-12);
    }

    #[test]
    fn test_refract_obeys_snell() {
        let ratio = 1.0 / 1.5;
        let uv = Vec3::new(1.0, -1.0, 0.0).normalize();
        let out = refract(uv, Vec3::Y, ratio);

        let sin_in = uv.x.abs();
        let sin_out = out.x.abs() / out.length();
        assert!((sin_out - ratio * sin_in).abs() < 1e-12);
        assert!((out.length() - 1.0).abs() < 1e-12);
        assert!(out.y < 0.0);
    }
}
