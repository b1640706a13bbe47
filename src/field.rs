//! Star field generation and the per-frame animation pass.
//!
//! [`StarField::generate`] partitions stars into concentric orbit bands and
//! fills the parallel color/size buffers; [`StarField::update`] recomputes
//! every star's position for a given wall-clock time and writes it into the
//! flat position buffer the renderer consumes.

use std::f32::consts::PI;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::GalaxyConfig;
use crate::error::ConfigError;
use crate::star::{Star, MAX_DISTANCE};

/// A fully generated star field plus the flat buffers the render surface
/// consumes.
///
/// Invariant: `stars`, `positions` (3 floats/star), `colors` (3 floats/star)
/// and `sizes` (1 float/star) always index the same star at the same flat
/// index. Generation builds all four together; nothing mutates them except
/// [`update`](StarField::update), which only rewrites positions.
#[derive(Debug, Clone, PartialEq)]
pub struct StarField {
    config: GalaxyConfig,
    stars: Vec<Star>,
    positions: Vec<f32>,
    colors: Vec<f32>,
    sizes: Vec<f32>,
}

impl StarField {
    /// Generate a star field from a configuration.
    ///
    /// Orbit band `o` of `num_orbits` sits at `distance = o/num_orbits * 50`
    /// and receives `floor(density * max_stars_per_orbit * density)` stars,
    /// where `density = sin(o/num_orbits * PI)`. The density weight is
    /// applied twice on purpose; together with the unscaled minor axis this
    /// is a behavioral contract inherited from the original visual, not a
    /// bug to fix. Generation stops the moment the global star index reaches
    /// `num_particles`, even mid-orbit.
    pub fn generate(config: &GalaxyConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let max_stars_per_orbit = config.max_stars_per_orbit();
        let num_particles = config.num_particles as usize;

        let mut stars = Vec::new();
        let mut colors = Vec::new();
        let mut sizes = Vec::new();

        'orbits: for orbit in 0..config.num_orbits {
            let f = orbit as f32 / config.num_orbits as f32;
            let distance = f * MAX_DISTANCE;
            let density = (f * PI).sin();
            let orbit_z_rot = orbit as f32 * 0.1;

            let stars_in_orbit = (density * max_stars_per_orbit as f32 * density) as u32;

            for _ in 0..stars_in_orbit {
                if stars.len() >= num_particles {
                    break 'orbits;
                }

                // Tilt band widens toward mid-radius along with density.
                let angle_variation = density * 20.0;
                let half = angle_variation / 2.0;
                let x_rot = rng.gen_range(-half..half).to_radians();
                let y_rot = rng.gen_range(-half..half).to_radians();
                let z_rot = orbit_z_rot + rng.gen_range(-0.1..0.1);

                let ellipse_major =
                    (distance + rng.gen_range(-0.25..0.25)) / config.ellipse_scale;
                let ellipse_minor = distance * 0.6 + rng.gen_range(-0.15..0.15);

                stars.push(Star {
                    ellipse_major,
                    ellipse_minor,
                    x_rot,
                    y_rot,
                    z_rot,
                });

                let t = distance / MAX_DISTANCE;
                let color = config.start_color.lerp(config.end_color, t);
                colors.extend_from_slice(&[color.x, color.y, color.z]);

                // Inner stars render larger.
                sizes.push(0.1 + (1.0 - t) * config.size_scale);
            }
        }

        let positions = vec![0.0; stars.len() * 3];

        Ok(Self {
            config: config.clone(),
            stars,
            positions,
            colors,
            sizes,
        })
    }

    /// Recompute every star's position for wall-clock time `t` seconds.
    ///
    /// One full pass, no star skipped. The written layout is 3 consecutive
    /// floats per star in generation order, exactly what the render surface
    /// expects. The result depends only on `t` and the static descriptors,
    /// never on prior frames.
    pub fn update(&mut self, t: f32) {
        let speed_factor = self.config.speed_factor;
        for (i, star) in self.stars.iter().enumerate() {
            let pos = star.position_at(t, speed_factor);
            self.positions[i * 3] = pos.x;
            self.positions[i * 3 + 1] = pos.y;
            self.positions[i * 3 + 2] = pos.z;
        }
    }

    /// Number of stars actually placed (≤ configured `num_particles`).
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// True when the density curve placed no stars at all.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// The configuration this field was generated from.
    pub fn config(&self) -> &GalaxyConfig {
        &self.config
    }

    /// The star descriptors, in generation order.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Flat position buffer, 3 floats per star. Rewritten every frame.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat color buffer, 3 floats per star. Written once at generation.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Flat render-size buffer, 1 float per star. Written once at generation.
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }
}
