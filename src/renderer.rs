//! Turns a [`DrawList`] into SFML shapes.

use glam::Vec2;
use sfml::{graphics::*, system::Vector2f};

use crate::{
    draw::{DrawCommand, DrawList},
    geometry::Bounds,
};

const CIRCLE_POINTS: usize = 48;

/// Shapes are reused between commands and frames, only their geometry and
/// colors change.
pub struct Renderer {
    bounds: Bounds,
    circle: CircleShape<'static>,
    polygon: ConvexShape<'static>,
    line: RectangleShape<'static>,
}

impl Renderer {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            circle: CircleShape::new(0.0, CIRCLE_POINTS),
            polygon: ConvexShape::new(4),
            line: RectangleShape::new(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn screen(&self, point: Vec2) -> Vector2f {
        let Vec2 { x, y } = self.bounds.to_screen(point);
        Vector2f::new(x, y)
    }

    pub fn render(&mut self, list: &DrawList, target: &mut impl RenderTarget) {
        for command in list.commands() {
            match command {
                &DrawCommand::Circle {
                    center,
                    radius,
                    color,
                    thickness,
                } => {
                    let position = self.screen(center);
                    self.circle.set_radius(radius);
                    self.circle.set_origin((radius, radius));
                    self.circle.set_position(position);
                    paint(&mut self.circle, color, thickness);
                    target.draw(&self.circle);
                }
                DrawCommand::Polygon {
                    points,
                    color,
                    thickness,
                } => {
                    self.polygon.set_point_count(points.len());
                    for (index, &point) in points.iter().enumerate() {
                        let point = self.screen(point);
                        self.polygon.set_point(index, point);
                    }
                    paint(&mut self.polygon, *color, *thickness);
                    target.draw(&self.polygon);
                }
                &DrawCommand::Line {
                    from,
                    to,
                    color,
                    thickness,
                } => {
                    let from = self.screen(from);
                    let delta = self.screen(to) - from;
                    let thickness = thickness.max(1.0);
                    self.line
                        .set_size((delta.x.hypot(delta.y), thickness));
                    self.line.set_origin((0.0, thickness / 2.0));
                    self.line.set_position(from);
                    self.line
                        .set_rotation(delta.y.atan2(delta.x).to_degrees());
                    self.line.set_fill_color(color);
                    self.line.set_outline_thickness(0.0);
                    target.draw(&self.line);
                }
            }
        }
    }
}

/// Zero thickness fills the shape, anything else only outlines it.
fn paint<'s>(shape: &mut impl Shape<'s>, color: Color, thickness: f32) {
    if thickness > 0.0 {
        shape.set_fill_color(Color::TRANSPARENT);
        shape.set_outline_color(color);
        // negative thickness grows the outline inwards
        shape.set_outline_thickness(-thickness);
    } else {
        shape.set_fill_color(color);
        shape.set_outline_thickness(0.0);
    }
}
