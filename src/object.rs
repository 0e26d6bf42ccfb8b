use rapier2d::prelude::*;

use crate::{
    draw::DrawList,
    error::{Error, Result},
    geometry::{box_corners, from_vector, to_vector},
    options::{BodyKind, ObjectOptions, ShapeKind, ShapeOptions},
};

/// Description of a rigid body and its shapes, ready to be added to a
/// [`World`](crate::World).
#[derive(Clone, Debug)]
pub struct Object {
    options: ObjectOptions,
    shapes: Vec<ShapeOptions>,
}

impl Object {
    /// A rectangle centered on the body origin.
    pub fn new_box(options: ObjectOptions, width: f32, height: f32) -> Result<Self> {
        Self::with_shapes(
            options,
            vec![ShapeOptions::new(ShapeKind::Box { width, height })],
        )
    }

    /// A circle / disc / ball centered on the body origin.
    pub fn new_circle(options: ObjectOptions, radius: f32) -> Result<Self> {
        Self::with_shapes(options, vec![ShapeOptions::new(ShapeKind::Circle { radius })])
    }

    /// A body made of several shapes. A dynamic body's mass is split evenly
    /// across them.
    pub fn with_shapes(options: ObjectOptions, shapes: Vec<ShapeOptions>) -> Result<Self> {
        if shapes.is_empty() {
            return Err(Error::NoShapes);
        }
        let mass = options.body.mass;
        if options.body.kind == BodyKind::Dynamic && !(mass.is_finite() && mass > 0.0) {
            return Err(Error::InvalidMass(mass));
        }
        for shape in &shapes {
            let (width, height) = match shape.kind {
                ShapeKind::Box { width, height } => (width, height),
                ShapeKind::Circle { radius } => (radius * 2.0, radius * 2.0),
            };
            if !(width > 0.0 && height > 0.0) {
                return Err(Error::InvalidDimensions { width, height });
            }
        }
        Ok(Self { options, shapes })
    }

    pub fn options(&self) -> &ObjectOptions {
        &self.options
    }

    pub fn shapes(&self) -> &[ShapeOptions] {
        &self.shapes
    }

    /// Radius of the first circle among the shapes.
    pub fn radius(&self) -> Option<f32> {
        self.shapes.iter().find_map(|shape| match shape.kind {
            ShapeKind::Circle { radius } => Some(radius),
            ShapeKind::Box { .. } => None,
        })
    }

    pub(crate) fn build_body(&self) -> RigidBody {
        let body = &self.options.body;
        let builder = match body.kind {
            BodyKind::Dynamic => RigidBodyBuilder::dynamic(),
            BodyKind::Static => RigidBodyBuilder::fixed(),
            BodyKind::Kinematic => RigidBodyBuilder::kinematic_position_based(),
        };
        builder
            .translation(to_vector(body.position))
            .rotation(body.angle)
            .linvel(to_vector(body.velocity))
            .gravity_scale(body.gravity_scale)
            .build()
    }

    pub(crate) fn build_colliders(&self) -> Vec<Collider> {
        let body = &self.options.body;
        let mass = body.mass / self.shapes.len() as f32;
        self.shapes
            .iter()
            .map(|shape| {
                let builder = match shape.kind {
                    ShapeKind::Box { width, height } => {
                        ColliderBuilder::cuboid(width / 2.0, height / 2.0)
                    }
                    ShapeKind::Circle { radius } => ColliderBuilder::ball(radius),
                }
                .translation(to_vector(shape.offset))
                .restitution(shape.elasticity.unwrap_or(body.elasticity))
                .friction(shape.friction.unwrap_or(body.friction))
                .restitution_combine_rule(CoefficientCombineRule::Multiply)
                .friction_combine_rule(CoefficientCombineRule::Multiply);
                match body.kind {
                    BodyKind::Dynamic => builder.mass(mass),
                    BodyKind::Static | BodyKind::Kinematic => builder,
                }
                .build()
            })
            .collect()
    }

    /// Draws every collider attached to `body`, then runs the custom draw
    /// callbacks.
    pub fn draw(
        &self,
        body: &RigidBody,
        colliders: &ColliderSet,
        list: &mut DrawList,
    ) -> Result<()> {
        let color = self.options.draw.color;
        let thickness = self.options.draw.thickness;
        let attached = body.colliders().iter().filter_map(|&handle| colliders.get(handle));
        for collider in attached {
            let position = match collider.position_wrt_parent() {
                Some(local) => body.position() * local,
                None => *collider.position(),
            };
            let center = from_vector(&position.translation.vector);
            let shape = collider.shape();
            if let Some(ball) = shape.as_ball() {
                list.circle(center, ball.radius, color, thickness);
            } else if let Some(cuboid) = shape.as_cuboid() {
                let corners = box_corners(
                    center,
                    from_vector(&cuboid.half_extents),
                    position.rotation.angle(),
                );
                list.polygon(corners, color, thickness);
            } else {
                return Err(Error::UnsupportedShape(shape.shape_type()));
            }
        }
        for custom_draw in &self.options.draw.custom_draw {
            custom_draw(self, body, list);
        }
        Ok(())
    }
}
