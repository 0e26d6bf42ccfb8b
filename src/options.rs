use glam::Vec2;
use rapier2d::prelude::RigidBody;
use sfml::graphics::Color;

use crate::{draw::DrawList, object::Object};

/// Called after an object's shapes were drawn.
pub type CustomDrawFn = fn(&Object, &RigidBody, &mut DrawList);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyKind {
    #[default]
    Dynamic,
    /// Never moves.
    Static,
    /// Moved by setting its next position, not affected by forces.
    Kinematic,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Box { width: f32, height: f32 },
    Circle { radius: f32 },
}

/// One collision shape of a body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeOptions {
    pub kind: ShapeKind,
    /// Position of the shape's center relative to the body origin
    pub offset: Vec2,
    /// Overrides [`BodyOptions::elasticity`] for this shape
    pub elasticity: Option<f32>,
    /// Overrides [`BodyOptions::friction`] for this shape
    pub friction: Option<f32>,
}

impl ShapeOptions {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            offset: Vec2::ZERO,
            elasticity: None,
            friction: None,
        }
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_elasticity(mut self, elasticity: f32) -> Self {
        self.elasticity = Some(elasticity);
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = Some(friction);
        self
    }
}

/// Physical attributes of an object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyOptions {
    pub kind: BodyKind,
    pub position: Vec2,
    /// Radians, counter-clockwise
    pub angle: f32,
    /// Total mass, split evenly across the body's shapes.
    /// Ignored for static and kinematic bodies.
    pub mass: f32,
    pub velocity: Vec2,
    pub elasticity: f32,
    pub friction: f32,
    pub gravity_scale: f32,
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self {
            kind: BodyKind::Dynamic,
            position: Vec2::ZERO,
            angle: 0.0,
            mass: 1.0,
            velocity: Vec2::ZERO,
            elasticity: 0.0,
            friction: 0.0,
            gravity_scale: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DrawOptions {
    pub color: Color,
    /// Outline thickness, zero draws filled shapes
    pub thickness: f32,
    pub custom_draw: Vec<CustomDrawFn>,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            thickness: 0.0,
            custom_draw: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ObjectOptions {
    pub draw: DrawOptions,
    pub body: BodyOptions,
}

impl ObjectOptions {
    pub fn new(color: Color, body: BodyOptions) -> Self {
        Self {
            draw: DrawOptions {
                color,
                ..Default::default()
            },
            body,
        }
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.draw.thickness = thickness;
        self
    }

    pub fn with_custom_draw(mut self, custom_draw: CustomDrawFn) -> Self {
        self.draw.custom_draw.push(custom_draw);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointOptions {
    pub color: Color,
    pub thickness: f32,
    /// Joints are invisible unless this is set
    pub draw: bool,
    /// Whether the two joined bodies still collide with each other
    pub collide_connected: bool,
}

impl Default for JointOptions {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            thickness: 1.0,
            draw: false,
            collide_connected: true,
        }
    }
}

impl JointOptions {
    pub fn visible(color: Color, thickness: f32) -> Self {
        Self {
            color,
            thickness,
            draw: true,
            ..Default::default()
        }
    }

    pub fn hidden() -> Self {
        Self::default()
    }
}
