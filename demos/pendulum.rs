//! A ball swinging from a fixed anchor and bouncing off a wall.

use rigid_sfml::{
    BodyKind, BodyOptions, JointOptions, Joint, Object, ObjectOptions, World, glam::Vec2,
    sfml::graphics::Color,
};

const ANCHOR_RADIUS: f32 = 20.0;

fn main() -> anyhow::Result<()> {
    let _logger = rigid_sfml::logging::setup()?;
    let mut world = create_world(1024.0, 1080.0)?;
    world.run()?;
    Ok(())
}

fn create_world(width: f32, height: f32) -> anyhow::Result<World> {
    let mut world = World::new("pendulum", 0.0, 0.0, width, height);
    world.set_gravity(Vec2::new(0.0, -981.0));

    let mid_x = width / 3.0;
    let start_y = height * 2.0 / 3.0;

    let anchor_position = Vec2::new(mid_x, start_y);
    let anchor = world.add_object(Object::new_circle(
        ObjectOptions::new(
            Color::RED,
            BodyOptions {
                kind: BodyKind::Static,
                position: anchor_position,
                ..Default::default()
            },
        ),
        ANCHOR_RADIUS,
    )?);

    let ball_position = Vec2::new(mid_x + 400.0, start_y + 200.0);
    let ball = world.add_object(Object::new_circle(
        ObjectOptions::new(
            Color::rgb(255, 165, 0),
            BodyOptions {
                position: ball_position,
                mass: 1e3,
                elasticity: 0.99,
                friction: 5.0,
                ..Default::default()
            },
        ),
        50.0,
    )?);

    // hang the ball from the bottom of the anchor
    let anchor_offset = Vec2::new(0.0, -ANCHOR_RADIUS);
    let ball_offset = anchor_position + anchor_offset - ball_position;
    world.add_joint(Joint::pivot(
        anchor,
        ball,
        anchor_offset,
        ball_offset,
        JointOptions::visible(Color::rgb(169, 169, 169), 1.0),
    ))?;

    // Wall
    world.add_object(Object::new_box(
        ObjectOptions::new(
            Color::BLUE,
            BodyOptions {
                kind: BodyKind::Static,
                position: Vec2::new(20.0, height / 2.0),
                elasticity: 0.99,
                ..Default::default()
            },
        ),
        40.0,
        height,
    )?);

    Ok(world)
}
