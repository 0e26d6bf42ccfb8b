//! A ragdoll dropping onto a bouncy floor.

use rigid_sfml::{
    BodyKind, BodyOptions, Joint, JointHandle, JointOptions, Object, ObjectHandle, ObjectOptions,
    World, glam::Vec2, sfml::graphics::Color,
};

const ORANGE: Color = Color::rgb(255, 165, 0);

fn main() -> anyhow::Result<()> {
    let _logger = rigid_sfml::logging::setup()?;
    let mut world = create_world(1024.0, 1080.0)?;
    world.run()?;
    Ok(())
}

fn create_world(width: f32, height: f32) -> anyhow::Result<World> {
    let mut world = World::new("ragdoll", 0.0, 0.0, width, height);
    world.set_gravity(Vec2::new(0.0, -981.0));
    world.set_frame_rate(120)?;

    // Floor
    world.add_object(Object::new_box(
        ObjectOptions::new(
            Color::BLUE,
            BodyOptions {
                kind: BodyKind::Static,
                position: Vec2::new(width / 2.0, 20.0),
                elasticity: 1.2,
                friction: 1.0,
                ..Default::default()
            },
        ),
        width - 200.0,
        40.0,
    )?);

    add_ragdoll(&mut world, Vec2::new(width / 2.0, height * 0.9))?;
    Ok(world)
}

fn limb(
    world: &mut World,
    color: Color,
    position: Vec2,
    mass: f32,
    size: Vec2,
) -> anyhow::Result<ObjectHandle> {
    Ok(world.add_object(Object::new_box(
        ObjectOptions::new(
            color,
            BodyOptions {
                position,
                mass,
                elasticity: 0.8,
                friction: 1.0,
                ..Default::default()
            },
        ),
        size.x,
        size.y,
    )?))
}

fn pin(
    world: &mut World,
    a: ObjectHandle,
    b: ObjectHandle,
    offset_a: Vec2,
    offset_b: Vec2,
) -> anyhow::Result<JointHandle> {
    let options = JointOptions {
        collide_connected: false,
        ..JointOptions::hidden()
    };
    Ok(world.add_joint(Joint::pivot(a, b, offset_a, offset_b, options))?)
}

/// Head, torso, two arms and two legs, pinned together without showing the joints.
fn add_ragdoll(world: &mut World, start: Vec2) -> anyhow::Result<()> {
    let head = world.add_object(Object::new_circle(
        ObjectOptions::new(
            ORANGE,
            BodyOptions {
                position: start,
                mass: 1e2,
                elasticity: 0.2,
                friction: 1.0,
                ..Default::default()
            },
        ),
        15.0,
    )?);

    let torso = world.add_object(Object::new_box(
        ObjectOptions::new(
            Color::BLUE,
            BodyOptions {
                position: start - Vec2::new(0.0, 15.0 + 30.0),
                mass: 1e3,
                elasticity: 0.5,
                friction: 1.0,
                ..Default::default()
            },
        ),
        40.0,
        60.0,
    )?);
    pin(world, head, torso, Vec2::new(0.0, -15.0), Vec2::new(0.0, 30.0))?;

    let arm_size = Vec2::new(40.0, 10.0);
    for side in [-1.0, 1.0] {
        let arm = limb(world, ORANGE, start + Vec2::new(side * 40.0, -20.0), 1e2, arm_size)?;
        pin(world, torso, arm, Vec2::new(side * 20.0, 25.0), Vec2::new(-side * 20.0, 0.0))?;
    }

    let leg_size = Vec2::new(10.0, 40.0);
    for side in [-1.0, 1.0] {
        let leg = limb(world, Color::BLUE, start + Vec2::new(side * 15.0, -95.0), 5e2, leg_size)?;
        pin(world, torso, leg, Vec2::new(side * 15.0, -30.0), Vec2::new(0.0, 20.0))?;
    }
    Ok(())
}
