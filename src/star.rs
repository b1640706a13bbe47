//! Per-star orbital descriptor and ellipse sampling.
//!
//! A [`Star`] is immutable once generated: it carries the shape of its orbit
//! (semi-axes) and three fixed tilt angles that lift the planar ellipse into
//! 3D. Animation never mutates a star, it only samples it at a different
//! angle.

use glam::Vec3;

/// Maximum orbit radius; the outermost band sits just inside this.
pub const MAX_DISTANCE: f32 = 50.0;

/// Immutable orbital descriptor for a single star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Ellipse semi-major axis, already divided by the config's ellipse
    /// scale factor.
    pub ellipse_major: f32,
    /// Ellipse semi-minor axis (unscaled).
    pub ellipse_minor: f32,
    /// Fixed tilt around the X axis, radians.
    pub x_rot: f32,
    /// Fixed tilt around the Y axis, radians.
    pub y_rot: f32,
    /// Fixed tilt around the Z axis, radians.
    pub z_rot: f32,
}

impl Star {
    /// Sample the orbit at the given angle in degrees.
    ///
    /// The base point lies on the planar ellipse; the stored tilts are then
    /// applied as axis rotations in the fixed order Z, Y, X. The order is a
    /// behavioral contract: swapping it produces a visibly different field.
    pub fn sample(&self, degrees: f32) -> Vec3 {
        let rad = degrees.to_radians();
        let x = self.ellipse_major * rad.cos();
        let y = self.ellipse_minor * rad.sin();
        let z = 0.0_f32;

        // Rotate about Z
        let (sin_z, cos_z) = self.z_rot.sin_cos();
        let x1 = x * cos_z - y * sin_z;
        let y1 = x * sin_z + y * cos_z;

        // Rotate about Y
        let (sin_y, cos_y) = self.y_rot.sin_cos();
        let z1 = z * cos_y - x1 * sin_y;
        let x2 = x1 * cos_y + z * sin_y;

        // Rotate about X
        let (sin_x, cos_x) = self.x_rot.sin_cos();
        let y2 = y1 * cos_x - z1 * sin_x;
        let z2 = y1 * sin_x + z1 * cos_x;

        Vec3::new(x2, y2, z2)
    }

    /// Per-star angular speed in revolutions per second.
    ///
    /// Stars on larger orbits advance more slowly; `speed_factor` slows the
    /// whole field uniformly.
    pub fn angular_speed(&self, speed_factor: f32) -> f32 {
        (1.0 - self.ellipse_major / MAX_DISTANCE) / speed_factor
    }

    /// Position at wall-clock time `t` seconds.
    ///
    /// Pure in `(self, t)`: the result never depends on how many frames were
    /// sampled before. The speed is negated in the angle argument so the
    /// whole field turns in one consistent sense.
    pub fn position_at(&self, t: f32, speed_factor: f32) -> Vec3 {
        self.sample(t * 360.0 * -self.angular_speed(speed_factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tilted_star() -> Star {
        Star {
            ellipse_major: 10.0,
            ellipse_minor: 6.0,
            x_rot: 0.3,
            y_rot: -0.2,
            z_rot: 1.1,
        }
    }

    #[test]
    fn test_sample_periodic_in_360() {
        let star = tilted_star();
        for &deg in &[0.0, 17.5, 90.0, 214.2, 359.0] {
            let a = star.sample(deg);
            let b = star.sample(deg + 360.0);
            assert!((a - b).length() < 1e-3, "sample not periodic at {deg}");
        }
    }

    #[test]
    fn test_untilted_star_stays_planar() {
        let star = Star {
            ellipse_major: 5.0,
            ellipse_minor: 3.0,
            x_rot: 0.0,
            y_rot: 0.0,
            z_rot: 0.0,
        };
        let p = star.sample(30.0);
        assert!((p.x - 5.0 * 30.0_f32.to_radians().cos()).abs() < 1e-5);
        assert!((p.y - 3.0 * 30.0_f32.to_radians().sin()).abs() < 1e-5);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_rotation_order_matters() {
        // Applying the same tilts in X, Y, Z order instead of Z, Y, X must
        // land somewhere else for a star with non-zero tilts.
        let star = tilted_star();
        let p = star.sample(45.0);

        let rad = 45.0_f32.to_radians();
        let x = star.ellipse_major * rad.cos();
        let y = star.ellipse_minor * rad.sin();
        let z = 0.0_f32;

        let (sin_x, cos_x) = star.x_rot.sin_cos();
        let y1 = y * cos_x - z * sin_x;
        let z1 = y * sin_x + z * cos_x;

        let (sin_y, cos_y) = star.y_rot.sin_cos();
        let z2 = z1 * cos_y - x * sin_y;
        let x1 = x * cos_y + z1 * sin_y;

        let (sin_z, cos_z) = star.z_rot.sin_cos();
        let x2 = x1 * cos_z - y1 * sin_z;
        let y2 = x1 * sin_z + y1 * cos_z;

        let swapped = Vec3::new(x2, y2, z2);
        assert!(
            (p - swapped).length() > 1e-3,
            "swapped rotation order unexpectedly agreed: {p:?} vs {swapped:?}"
        );
    }

    #[test]
    fn test_rotation_preserves_radius() {
        // Tilts are pure rotations, so distance from origin matches the
        // planar ellipse point.
        let star = tilted_star();
        let rad = 72.0_f32.to_radians();
        let planar = Vec3::new(
            star.ellipse_major * rad.cos(),
            star.ellipse_minor * rad.sin(),
            0.0,
        );
        let p = star.sample(72.0);
        assert!((p.length() - planar.length()).abs() < 1e-4);
    }

    #[test]
    fn test_angular_speed_slows_with_radius() {
        let inner = Star { ellipse_major: 1.0, ..tilted_star() };
        let outer = Star { ellipse_major: 40.0, ..tilted_star() };
        assert!(inner.angular_speed(1.7) > outer.angular_speed(1.7));
    }

    #[test]
    fn test_position_at_is_pure() {
        let star = tilted_star();
        let a = star.position_at(12.34, 1.7);
        // Sampling other times in between must not affect the result.
        let _ = star.position_at(1.0, 1.7);
        let _ = star.position_at(7.7, 1.7);
        let b = star.position_at(12.34, 1.7);
        assert_eq!(a, b);
    }
}
