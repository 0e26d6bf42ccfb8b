//! Immediate mode batch of primitives in world coordinates.
//!
//! Objects and joints push commands into a [`DrawList`] every frame, the
//! renderer turns them into SFML shapes afterwards.

use glam::Vec2;
use sfml::graphics::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A circle. Zero thickness means filled.
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        thickness: f32,
    },
    /// A closed polygon. Zero thickness means filled.
    Polygon {
        points: Vec<Vec2>,
        color: Color,
        thickness: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        thickness: f32,
    },
}

#[derive(Default, Debug)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color, thickness: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            thickness,
        });
    }

    pub fn polygon(&mut self, points: impl Into<Vec<Vec2>>, color: Color, thickness: f32) {
        self.commands.push(DrawCommand::Polygon {
            points: points.into(),
            color,
            thickness,
        });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, color: Color, thickness: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            thickness,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drops all commands but keeps the allocation for the next frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}
