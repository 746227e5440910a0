//! Build-time configuration.
//!
//! The demo takes no command-line flags; everything it needs is fixed here.
//! Log verbosity is the only runtime knob, through `RUST_LOG`.

use crate::color::Color;
use glam::Vec3;

pub const WINDOW_WIDTH: u32 = 400;
pub const WINDOW_HEIGHT: u32 = 224;
pub const WINDOW_TITLE: &str = "Tableau";

/// Model loaded once at startup, relative to the working directory.
pub const MODEL_ASSET_PATH: &str = "assets/model.stl";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Fixed physics sub-step, in seconds.
pub const FIXED_TIME_STEP: f32 = 1.0 / 60.0;
/// Sub-steps allowed per frame before excess time is dropped.
pub const MAX_SUB_STEPS: u32 = 10;

pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.8, 0.0);
pub const BOX_COUNT: usize = 10;
pub const BOX_HALF_SIZE: f32 = 0.5;
pub const BOX_MASS: f32 = 1.0;
pub const BOX_START_HEIGHT: f32 = 5.0;
pub const BOX_SPACING: f32 = 2.0;
pub const GROUND_HALF_EXTENTS: Vec3 = Vec3::new(20.0, 0.5, 20.0);
pub const GROUND_Y: f32 = -0.5;

/// Configuration for the app window.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            clear_color: Color::RAY_WHITE,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }
}

/// Tunables for the physics demo scene.
#[derive(Clone, Debug)]
pub struct PhysicsConfig {
    pub gravity: Vec3,
    pub fixed_time_step: f32,
    pub max_sub_steps: u32,
    /// Requested box count. Boxes are laid out on a square grid, so only
    /// `floor(sqrt(box_count))²` of them are created.
    pub box_count: usize,
    pub box_half_size: f32,
    pub box_mass: f32,
    pub start_height: f32,
    pub spacing: f32,
    pub ground_half_extents: Vec3,
    pub ground_y: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            fixed_time_step: FIXED_TIME_STEP,
            max_sub_steps: MAX_SUB_STEPS,
            box_count: BOX_COUNT,
            box_half_size: BOX_HALF_SIZE,
            box_mass: BOX_MASS,
            start_height: BOX_START_HEIGHT,
            spacing: BOX_SPACING,
            ground_half_extents: GROUND_HALF_EXTENTS,
            ground_y: GROUND_Y,
        }
    }
}

impl PhysicsConfig {
    /// Side length of the box grid.
    pub fn grid_size(&self) -> usize {
        (self.box_count as f32).sqrt() as usize
    }

    /// Number of boxes actually spawned.
    pub fn spawned_boxes(&self) -> usize {
        let grid = self.grid_size();
        (grid * grid).min(self.box_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_drops_the_tenth_box() {
        let config = PhysicsConfig::default();
        assert_eq!(config.grid_size(), 3);
        assert_eq!(config.spawned_boxes(), 9);
    }

    #[test]
    fn app_config_builder() {
        let config = AppConfig::new().title("Demo").size(1280, 720);
        assert_eq!(config.title, "Demo");
        assert_eq!((config.width, config.height), (1280, 720));
        assert_eq!(config.clear_color, Color::RAY_WHITE);
    }
}
