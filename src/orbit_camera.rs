use glam::Vec3;
use winit::event::MouseButton;

use crate::camera::Camera;
use crate::input::Input;

const MAX_ELEVATION: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// A camera controller that orbits around a target point.
///
/// The demo uses one of these for every scene so switching scenes keeps the
/// viewpoint.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    /// Horizontal angle in radians.
    pub azimuth: f32,
    /// Vertical angle in radians, kept away from the poles.
    pub elevation: f32,
    /// Field of view in radians.
    pub fov: f32,
    pub sensitivity: f32,
    pub zoom_sensitivity: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Same viewpoint as `Camera::default()`: (10, 10, 10) looking at the origin.
        Self {
            target: Vec3::ZERO,
            distance: 300f32.sqrt(),
            azimuth: std::f32::consts::FRAC_PI_4,
            elevation: (1.0 / 2f32.sqrt()).atan(),
            fov: 45f32.to_radians(),
            sensitivity: 0.005,
            zoom_sensitivity: 0.5,
            min_distance: 2.0,
            max_distance: 100.0,
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mouse drag with the left button orbits, the scroll wheel zooms.
    pub fn update(&mut self, input: &Input) {
        if input.mouse_down(MouseButton::Left) {
            let delta = input.mouse_delta();
            self.azimuth -= delta.x * self.sensitivity;
            self.elevation =
                (self.elevation + delta.y * self.sensitivity).clamp(-MAX_ELEVATION, MAX_ELEVATION);
        }

        let scroll = input.scroll_delta();
        if scroll.y.abs() > 0.0 {
            self.distance = (self.distance - scroll.y * self.zoom_sensitivity)
                .clamp(self.min_distance, self.max_distance);
        }
    }

    /// Get the current camera state.
    pub fn camera(&self) -> Camera {
        let offset = Vec3::new(
            self.distance * self.elevation.cos() * self.azimuth.sin(),
            self.distance * self.elevation.sin(),
            self.distance * self.elevation.cos() * self.azimuth.cos(),
        );

        Camera {
            position: self.target + offset,
            target: self.target,
            up: Vec3::Y,
            fov: self.fov,
        }
    }
}
