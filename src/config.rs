use glam::Vec2;
use sfml::graphics::Color;

use crate::{
    error::{Error, Result},
    geometry::Bounds,
};

pub const DEFAULT_FRAME_RATE: u32 = 60;
pub const DEFAULT_WIDTH: f32 = 1024.0;
pub const DEFAULT_HEIGHT: f32 = 1080.0;

/// Everything needed to create a [`World`](crate::World).
#[derive(Clone, Debug, PartialEq)]
pub struct WorldOptions {
    /// Window title
    pub name: String,
    /// Visible area, one pixel per world unit
    pub bounds: Bounds,
    /// Physics steps and redraws per second
    pub frame_rate: u32,
    pub gravity: Vec2,
    /// Typical object size in world units, tunes the solver's tolerances
    pub length_unit: f32,
    pub background: Color,
    pub antialiasing_level: u32,
    /// Start with the info overlay open (toggle with F1)
    pub show_info: bool,
}

impl Default for WorldOptions {
    fn default() -> Self {
        Self {
            name: String::from("rigid-sfml"),
            bounds: Bounds::new(0.0, 0.0, DEFAULT_WIDTH, DEFAULT_HEIGHT),
            frame_rate: DEFAULT_FRAME_RATE,
            gravity: Vec2::ZERO,
            length_unit: 100.0,
            background: Color::BLACK,
            antialiasing_level: 2,
            show_info: false,
        }
    }
}

impl WorldOptions {
    pub fn new(name: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            name: name.into(),
            bounds,
            ..Default::default()
        }
    }

    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_info(mut self, show_info: bool) -> Self {
        self.show_info = show_info;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_rate == 0 {
            return Err(Error::InvalidFrameRate);
        }
        Ok(())
    }

    /// Duration of one simulation step in seconds.
    pub fn time_step(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = WorldOptions::default();
        assert_eq!(options.frame_rate, 60);
        assert_eq!(options.gravity, Vec2::ZERO);
        assert_eq!(options.bounds.window_size(), (1024, 1080));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn builder() {
        let options = WorldOptions::new("pendulum", Bounds::new(0.0, 0.0, 800.0, 600.0))
            .with_frame_rate(120)
            .with_gravity(Vec2::new(0.0, -981.0));
        assert_eq!(options.name, "pendulum");
        assert!((options.time_step() - 1.0 / 120.0).abs() < f32::EPSILON);
        assert_eq!(options.gravity.y, -981.0);
    }

    #[test]
    fn zero_frame_rate_is_invalid() {
        let options = WorldOptions::default().with_frame_rate(0);
        assert!(matches!(options.validate(), Err(Error::InvalidFrameRate)));
    }
}
