//! # orbitfield
//!
//! An animated star field of up to 100k particles distributed over
//! concentric elliptical orbits, each star turning at a speed tied to its
//! distance from center, colored by a radial gradient, and rendered as
//! additive point sprites behind an orbit camera.
//!
//! ## Quick Start
//!
//! ```ignore
//! use orbitfield::prelude::*;
//!
//! fn main() -> Result<(), orbitfield::RunError> {
//!     Galaxy::new()
//!         .with_config(GalaxyConfig {
//!             num_particles: 50_000,
//!             start_color: hex_color("#ffd27d").unwrap(),
//!             end_color: hex_color("#6a8dff").unwrap(),
//!             ..GalaxyConfig::default()
//!         })
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Orbit bands
//!
//! Stars are partitioned into `num_orbits` concentric bands. A band's
//! normalized index `f` fixes its radius (`f * 50`) and its density weight
//! `sin(f * PI)`, a bell curve that thins the innermost and outermost rings.
//! The weight is applied twice in the per-band star count, a deliberate
//! density-squared falloff.
//!
//! ### Stars
//!
//! Each [`Star`] is an immutable ellipse: jittered semi-axes plus three
//! fixed tilt angles applied in Z, Y, X order. Animation is pure sampling —
//! the position at time `t` depends only on the star and `t`, never on
//! earlier frames.
//!
//! ### Flat buffers
//!
//! [`StarField`] keeps positions (3 floats/star), colors (3 floats/star) and
//! sizes (1 float/star) as flat arrays the GPU consumes directly. Positions
//! are rewritten and re-uploaded every frame; colors and sizes only change
//! when the configuration changes, which regenerates the whole field and
//! swaps it in atomically.
//!
//! ## Feature flags
//!
//! - `egui` — in-window parameter panel (`egui`, `egui-wgpu`, `egui-winit`).

mod app;
pub mod camera;
pub mod config;
pub mod error;
pub mod field;
mod gpu;
pub mod star;
pub mod time;
#[cfg(feature = "egui")]
pub mod ui;

pub use app::Galaxy;
pub use config::{hex_color, GalaxyConfig};
pub use error::{ConfigError, GpuError, RunError};
pub use field::StarField;
pub use glam::Vec3;
pub use star::{Star, MAX_DISTANCE};

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::camera::Camera;
    pub use crate::config::{hex_color, GalaxyConfig};
    pub use crate::error::{ConfigError, GpuError, RunError};
    pub use crate::field::StarField;
    pub use crate::star::{Star, MAX_DISTANCE};
    pub use crate::time::Time;
    pub use crate::Galaxy;
    pub use crate::Vec3;
    #[cfg(feature = "egui")]
    pub use egui;
}
