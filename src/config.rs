//! Galaxy configuration.
//!
//! A [`GalaxyConfig`] is a plain value object: changing any parameter means
//! regenerating the whole star field from it (see
//! [`StarField::generate`](crate::field::StarField::generate)). Nothing here
//! is mutated in place behind the generator's back.

use glam::Vec3;

use crate::error::ConfigError;

/// Parameters describing a star field.
///
/// All randomized quantities during generation draw from a single RNG seeded
/// by [`seed`](GalaxyConfig::seed), so two generations from an identical
/// config with a fixed seed produce identical fields.
#[derive(Debug, Clone, PartialEq)]
pub struct GalaxyConfig {
    /// Upper bound on the number of stars. The density curve usually places
    /// fewer; generation never places more.
    pub num_particles: u32,
    /// Number of concentric orbit bands the stars are partitioned into.
    pub num_orbits: u32,
    /// Divisor applied to the ellipse major axis. Values above 1 flatten the
    /// orbits; the minor axis is deliberately left unscaled.
    pub ellipse_scale: f32,
    /// Divisor for per-star angular speed. Larger values slow the whole field.
    pub speed_factor: f32,
    /// Scales how much larger inner stars render than outer ones.
    pub size_scale: f32,
    /// Color of the innermost orbit band (RGB, 0.0-1.0).
    pub start_color: Vec3,
    /// Color of the outermost orbit band (RGB, 0.0-1.0).
    pub end_color: Vec3,
    /// RNG seed for generation. `None` seeds from entropy, so every
    /// regeneration looks slightly different.
    pub seed: Option<u64>,
}

impl GalaxyConfig {
    /// Ceiling of particles per orbit band, before the density curve cuts it
    /// down.
    pub fn max_stars_per_orbit(&self) -> u32 {
        self.num_particles.div_ceil(self.num_orbits.max(1))
    }

    /// Reject degenerate parameter combinations.
    ///
    /// Called at the boundary (builder / UI panel) so the generator can
    /// assume a well-formed config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_orbits == 0 {
            return Err(ConfigError::NoOrbits);
        }
        if self.num_particles == 0 {
            return Err(ConfigError::NoParticles);
        }
        if self.ellipse_scale <= 0.0 {
            return Err(ConfigError::NonPositiveEllipseScale);
        }
        if self.speed_factor <= 0.0 {
            return Err(ConfigError::NonPositiveSpeedFactor);
        }
        if self.size_scale < 0.0 {
            return Err(ConfigError::NegativeSizeScale);
        }
        Ok(())
    }
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            num_particles: 100_000,
            num_orbits: 60,
            ellipse_scale: 3.0,
            speed_factor: 1.7,
            size_scale: 0.2,
            start_color: hex_color("#ff5cab").unwrap_or(Vec3::ONE),
            end_color: hex_color("#2974ff").unwrap_or(Vec3::ONE),
            seed: None,
        }
    }
}

/// Parse a `#rrggbb` hex string into an RGB color with 0.0-1.0 channels.
///
/// Returns `None` for anything that is not exactly `#` plus six hex digits.
pub fn hex_color(s: &str) -> Option<Vec3> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Vec3::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GalaxyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_max_stars_per_orbit_rounds_up() {
        let config = GalaxyConfig {
            num_particles: 100_000,
            num_orbits: 60,
            ..GalaxyConfig::default()
        };
        assert_eq!(config.max_stars_per_orbit(), 1667);
    }

    #[test]
    fn test_validate_rejects_degenerate() {
        let base = GalaxyConfig::default();

        let config = GalaxyConfig { num_orbits: 0, ..base.clone() };
        assert_eq!(config.validate(), Err(ConfigError::NoOrbits));

        let config = GalaxyConfig { num_particles: 0, ..base.clone() };
        assert_eq!(config.validate(), Err(ConfigError::NoParticles));

        let config = GalaxyConfig { ellipse_scale: 0.0, ..base.clone() };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveEllipseScale));

        let config = GalaxyConfig { speed_factor: -1.0, ..base.clone() };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveSpeedFactor));

        let config = GalaxyConfig { size_scale: -0.1, ..base };
        assert_eq!(config.validate(), Err(ConfigError::NegativeSizeScale));
    }

    #[test]
    fn test_hex_color() {
        let white = hex_color("#ffffff").unwrap();
        assert!((white - Vec3::ONE).length() < 1e-6);

        let pink = hex_color("#ff5cab").unwrap();
        assert!((pink.x - 1.0).abs() < 1e-6);
        assert!((pink.y - 92.0 / 255.0).abs() < 1e-6);
        assert!((pink.z - 171.0 / 255.0).abs() < 1e-6);

        assert!(hex_color("ff5cab").is_none());
        assert!(hex_color("#ff5ca").is_none());
        assert!(hex_color("#ff5cag").is_none());
    }
}
