//! A box and a ball dropping onto a plank and the floor. Red lines show each
//! body's velocity.

use std::f32::consts::PI;

use rigid_sfml::{
    BodyKind, BodyOptions, DrawList, Object, ObjectOptions, World, WorldOptions,
    geometry::from_vector, glam::Vec2, rapier2d::prelude::RigidBody, sfml::graphics::Color,
};

const WIDTH: f32 = 1024.0;
const HEIGHT: f32 = 1080.0;

fn main() -> anyhow::Result<()> {
    let _logger = rigid_sfml::logging::setup()?;

    let bounds = rigid_sfml::Bounds::new(0.0, 0.0, WIDTH, HEIGHT);
    let options =
        WorldOptions::new("falling block", bounds).with_gravity(Vec2::new(0.0, -981.0));
    let mut world = World::with_options(options)?;

    // Floor
    world.add_object(Object::new_box(
        ObjectOptions::new(
            Color::BLUE,
            BodyOptions {
                kind: BodyKind::Static,
                position: Vec2::new(WIDTH / 2.0, 20.0),
                elasticity: 0.1,
                friction: 1.0,
                ..Default::default()
            },
        ),
        WIDTH,
        40.0,
    )?);

    // Flat plank
    world.add_object(Object::new_box(
        ObjectOptions::new(
            Color::GREEN,
            BodyOptions {
                position: Vec2::new(500.0, 200.0),
                mass: 1e4,
                elasticity: 0.2,
                friction: 1.0,
                ..Default::default()
            },
        )
        .with_custom_draw(draw_velocity),
        500.0,
        10.0,
    )?);

    world.add_object(Object::new_box(
        ObjectOptions::new(
            Color::RED,
            BodyOptions {
                position: Vec2::new(600.0, 1000.0),
                angle: PI * 4.0 / 3.0,
                mass: 1e3,
                elasticity: 0.2,
                friction: 1.0,
                ..Default::default()
            },
        )
        .with_custom_draw(draw_velocity),
        50.0,
        100.0,
    )?);

    world.add_object(Object::new_circle(
        ObjectOptions::new(
            Color::rgb(128, 0, 128),
            BodyOptions {
                position: Vec2::new(600.0, 3000.0),
                angle: PI * 4.0 / 3.0,
                mass: 1e3,
                elasticity: 0.9,
                friction: 1.0,
                ..Default::default()
            },
        )
        .with_custom_draw(draw_velocity),
        25.0,
    )?);

    world.run()?;
    Ok(())
}

fn draw_velocity(_object: &Object, body: &RigidBody, list: &mut DrawList) {
    let position = from_vector(body.translation());
    let velocity = from_vector(body.linvel());
    list.line(position, position + velocity, Color::RED, 1.0);
}
