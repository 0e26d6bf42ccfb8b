use rand::Rng;
use rigid_sfml::{
    BodyOptions, DrawList, Object, ObjectOptions, geometry::from_vector, glam::Vec2,
    rapier2d::prelude::RigidBody, sfml::graphics::Color,
};

/// A tennis ball with a seam line so it can be seen spinning.
pub fn new_ball(position: Vec2, radius: f32, color: Color) -> rigid_sfml::Result<Object> {
    Object::new_circle(
        ObjectOptions::new(
            color,
            BodyOptions {
                position,
                angle: rand::thread_rng().gen_range(0.0..1.0),
                mass: 1.0,
                elasticity: 0.9,
                friction: 2.0,
                ..Default::default()
            },
        )
        .with_custom_draw(draw_seam),
        radius,
    )
}

fn draw_seam(object: &Object, body: &RigidBody, list: &mut DrawList) {
    let position = from_vector(body.translation());
    let radius = object.radius().unwrap_or_default();
    let offset = Vec2::from_angle(body.rotation().angle()) * radius;
    list.line(position + offset, position - offset, Color::rgb(211, 211, 211), 1.0);
}
