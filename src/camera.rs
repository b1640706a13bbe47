//! Orbit camera for viewing the star field.

use glam::{Mat4, Vec3};

/// Camera that orbits a target point under mouse control.
pub struct Camera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
}

impl Camera {
    /// Default view: pulled back far enough to frame the whole 50-unit field.
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.4,
            distance: 80.0,
            target: Vec3::ZERO,
        }
    }

    /// Apply a mouse drag in screen pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * 0.005;
        self.pitch = (self.pitch + dy * 0.005).clamp(-1.5, 1.5);
    }

    /// Apply scroll wheel input, keeping the field in front of the near plane.
    pub fn zoom(&mut self, scroll: f32) {
        self.distance = (self.distance - scroll * 4.0).clamp(5.0, 300.0);
    }

    /// The camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// View matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_on_view_axis() {
        let camera = Camera {
            yaw: 0.0,
            pitch: 0.0,
            distance: 10.0,
            target: Vec3::ZERO,
        };
        assert!((camera.position() - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-5);
    }

    #[test]
    fn test_pitch_clamped_by_orbit() {
        let mut camera = Camera::new();
        camera.orbit(0.0, 1e6);
        assert!(camera.pitch <= 1.5);
        camera.orbit(0.0, -1e7);
        assert!(camera.pitch >= -1.5);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = Camera::new();
        camera.zoom(1e6);
        assert!(camera.distance >= 5.0);
        camera.zoom(-1e7);
        assert!(camera.distance <= 300.0);
    }
}
