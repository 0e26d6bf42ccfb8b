use rigid_sfml::{
    BodyKind, BodyOptions, Object, ObjectHandle, ObjectOptions, ShapeKind, ShapeOptions, World,
    geometry::Bounds,
    glam::Vec2,
    sfml::graphics::Color,
};

/// The cup the tennis balls should be caught in. Moves sideways on its own,
/// the arrow keys only pick the direction.
pub struct Cup {
    handle: ObjectHandle,
    direction: f32,
}

impl Cup {
    pub fn new(
        world: &mut World,
        position: Vec2,
        width: f32,
        height: f32,
        color: Color,
    ) -> rigid_sfml::Result<Self> {
        let shapes = cup_boxes(width, height)
            .into_iter()
            .map(|rect| {
                ShapeOptions::new(ShapeKind::Box {
                    width: rect.width(),
                    height: rect.height(),
                })
                .with_offset(rect.center())
            })
            .collect();
        let object = Object::with_shapes(
            ObjectOptions::new(
                color,
                BodyOptions {
                    kind: BodyKind::Kinematic,
                    position,
                    elasticity: 0.4,
                    friction: 2.0,
                    ..Default::default()
                },
            ),
            shapes,
        )?;
        Ok(Self {
            handle: world.add_object(object),
            direction: 1.0,
        })
    }

    pub fn set_direction(&mut self, direction: f32) {
        self.direction = direction;
    }

    pub fn advance(&self, world: &mut World) {
        if let Some(body) = world.body_mut(self.handle) {
            let mut position = *body.translation();
            position.x += self.direction;
            body.set_next_kinematic_translation(position);
        }
    }
}

/// Left wall, bottom and right wall, relative to the cup's center.
fn cup_boxes(width: f32, height: f32) -> [Bounds; 3] {
    let delta = width * 0.1;
    let hw = width / 2.0;
    let hh = height / 2.0;
    [
        Bounds::new(-hw, -hh, -hw + delta, hh),
        Bounds::new(-hw + delta, -hh, hw - delta, -hh + delta),
        Bounds::new(hw - delta, -hh, hw, hh),
    ]
}
