use std::f32::consts::FRAC_PI_4;

use rigid_sfml::{
    BodyKind, BodyOptions, DrawCommand, DrawList, Drawable, DrawableId, Error, Joint,
    JointOptions, Object, ObjectHandle, ObjectOptions, ShapeKind, ShapeOptions, World,
    WorldOptions, geometry::to_vector, glam::Vec2, sfml::graphics::Color,
};

fn world() -> World {
    let mut world = World::new("test", 0.0, 0.0, 1024.0, 1080.0);
    world.set_gravity(Vec2::new(0.0, -981.0));
    world
}

fn ball(world: &mut World, kind: BodyKind, position: Vec2) -> ObjectHandle {
    world.add_object(
        Object::new_circle(
            ObjectOptions::new(
                Color::YELLOW,
                BodyOptions {
                    kind,
                    position,
                    mass: 10.0,
                    ..Default::default()
                },
            ),
            20.0,
        )
        .unwrap(),
    )
}

#[test]
fn objects_start_where_they_were_placed() {
    let mut world = world();
    let handle = world.add_object(
        Object::new_box(
            ObjectOptions::new(
                Color::RED,
                BodyOptions {
                    position: Vec2::new(600.0, 1000.0),
                    angle: FRAC_PI_4,
                    mass: 250.0,
                    velocity: Vec2::new(5.0, 0.0),
                    ..Default::default()
                },
            ),
            50.0,
            100.0,
        )
        .unwrap(),
    );

    assert_eq!(world.position(handle), Some(Vec2::new(600.0, 1000.0)));
    assert!((world.angle(handle).unwrap() - FRAC_PI_4).abs() < 1e-5);
    assert_eq!(world.velocity(handle), Some(Vec2::new(5.0, 0.0)));
    let mass = world.body(handle).unwrap().mass();
    assert!((mass - 250.0).abs() < 1e-2, "mass {mass}");
}

#[test]
fn dynamic_bodies_fall_static_ones_stay() {
    let mut world = world();
    let falling = ball(&mut world, BodyKind::Dynamic, Vec2::new(100.0, 500.0));
    let anchored = ball(&mut world, BodyKind::Static, Vec2::new(500.0, 500.0));

    for _ in 0..30 {
        world.step();
    }

    assert!(world.position(falling).unwrap().y < 500.0);
    assert_eq!(world.position(anchored), Some(Vec2::new(500.0, 500.0)));
}

#[test]
fn added_drawables_are_in_the_space() {
    let mut world = world();
    let a = ball(&mut world, BodyKind::Static, Vec2::new(100.0, 500.0));
    let b = ball(&mut world, BodyKind::Dynamic, Vec2::new(200.0, 500.0));
    let joint = world
        .add_joint(Joint::pivot(
            a,
            b,
            Vec2::ZERO,
            Vec2::new(-100.0, 0.0),
            JointOptions::hidden(),
        ))
        .unwrap();

    assert_eq!(world.object_count(), 2);
    assert_eq!(world.joint_count(), 1);
    assert_eq!(world.space().body_count(), 2);
    assert_eq!(world.space().joint_count(), 1);
    assert!(world.joint(joint).is_some());
    assert_eq!(
        world.drawables().iter().map(Drawable::id).collect::<Vec<_>>(),
        vec![DrawableId::Object(a), DrawableId::Object(b), DrawableId::Joint(joint)]
    );
}

#[test]
fn removing_an_object_takes_its_joints_along() {
    let mut world = world();
    let a = ball(&mut world, BodyKind::Static, Vec2::new(100.0, 500.0));
    let b = ball(&mut world, BodyKind::Dynamic, Vec2::new(200.0, 500.0));
    let c = ball(&mut world, BodyKind::Dynamic, Vec2::new(300.0, 500.0));
    world
        .add_joint(Joint::pivot(a, b, Vec2::ZERO, Vec2::ZERO, JointOptions::hidden()))
        .unwrap();
    let bc = world
        .add_joint(Joint::pivot(b, c, Vec2::ZERO, Vec2::ZERO, JointOptions::hidden()))
        .unwrap();

    let removed = world.remove(b).unwrap();
    assert!(matches!(removed, Drawable::Object { handle, .. } if handle == b));
    assert_eq!(world.object_count(), 2);
    assert_eq!(world.joint_count(), 0);
    assert_eq!(world.space().body_count(), 2);
    assert_eq!(world.space().joint_count(), 0);
    assert!(world.body(b).is_none());
    assert!(world.remove(bc).is_none());
    assert!(world.remove(b).is_none());
}

#[test]
fn removing_a_joint_keeps_the_objects() {
    let mut world = world();
    let a = ball(&mut world, BodyKind::Static, Vec2::new(100.0, 500.0));
    let b = ball(&mut world, BodyKind::Dynamic, Vec2::new(200.0, 500.0));
    let joint = world
        .add_joint(Joint::pivot(a, b, Vec2::ZERO, Vec2::ZERO, JointOptions::hidden()))
        .unwrap();

    assert!(world.remove(joint).is_some());
    assert_eq!(world.object_count(), 2);
    assert_eq!(world.space().joint_count(), 0);
    assert_eq!(world.space().body_count(), 2);
}

#[test]
fn joints_need_objects_of_this_world() {
    let mut other = world();
    let stranger = ball(&mut other, BodyKind::Dynamic, Vec2::ZERO);
    let stranger2 = ball(&mut other, BodyKind::Dynamic, Vec2::ONE);
    let mut world = world();
    let local = ball(&mut world, BodyKind::Dynamic, Vec2::ZERO);
    world.remove(local);

    let joint = Joint::pivot(stranger, stranger2, Vec2::ZERO, Vec2::ZERO, JointOptions::hidden());
    let result = world.add_joint(joint);
    assert!(matches!(result, Err(Error::UnknownObject)));
}

#[test]
fn retain_removes_fallen_objects() {
    let mut world = world();
    let kept = ball(&mut world, BodyKind::Static, Vec2::new(100.0, 500.0));
    ball(&mut world, BodyKind::Dynamic, Vec2::new(200.0, -50.0));
    ball(&mut world, BodyKind::Dynamic, Vec2::new(300.0, -10.0));

    let removed = world.retain_objects(|_, body| body.translation().y >= 0.0);
    assert_eq!(removed, 2);
    assert_eq!(world.object_handles().collect::<Vec<_>>(), vec![kept]);
    assert_eq!(world.space().body_count(), 1);
}

#[test]
fn draws_in_insertion_order() {
    let mut world = world();
    let floor = world.add_object(
        Object::new_box(
            ObjectOptions::new(
                Color::BLUE,
                BodyOptions {
                    kind: BodyKind::Static,
                    position: Vec2::new(512.0, 20.0),
                    ..Default::default()
                },
            ),
            1024.0,
            40.0,
        )
        .unwrap(),
    );
    let anchor = ball(&mut world, BodyKind::Static, Vec2::new(300.0, 700.0));
    world
        .add_joint(Joint::pivot(
            floor,
            anchor,
            Vec2::new(0.0, 20.0),
            Vec2::new(0.0, -20.0),
            JointOptions::visible(Color::WHITE, 1.0),
        ))
        .unwrap();

    let mut list = DrawList::new();
    world.draw(&mut list).unwrap();
    let commands = list.commands();
    assert_eq!(commands.len(), 5);
    let DrawCommand::Polygon { points, color, .. } = &commands[0] else {
        panic!("floor should be a polygon: {:?}", commands[0]);
    };
    assert_eq!(*color, Color::BLUE);
    assert!(points[0].abs_diff_eq(Vec2::new(0.0, 0.0), 1e-3));
    assert!(points[2].abs_diff_eq(Vec2::new(1024.0, 40.0), 1e-3));
    assert!(matches!(commands[1], DrawCommand::Circle { radius, .. } if radius == 20.0));
    assert_eq!(
        commands[4],
        DrawCommand::Line {
            from: Vec2::new(512.0, 40.0),
            to: Vec2::new(300.0, 680.0),
            color: Color::WHITE,
            thickness: 1.0,
        }
    );
}

#[test]
fn invalid_frame_rates_are_rejected() {
    assert!(matches!(
        World::with_options(WorldOptions::default().with_frame_rate(0)),
        Err(Error::InvalidFrameRate)
    ));
    let mut world = world();
    assert!(world.set_frame_rate(0).is_err());
    world.set_frame_rate(120).unwrap();
    assert_eq!(world.frame_rate(), 120);
}

#[test]
fn pendulum_keeps_its_length() {
    let mut world = world();
    let anchor = ball(&mut world, BodyKind::Static, Vec2::new(300.0, 700.0));
    let bob = ball(&mut world, BodyKind::Dynamic, Vec2::new(500.0, 700.0));
    world
        .add_joint(Joint::pivot(
            anchor,
            bob,
            Vec2::ZERO,
            Vec2::new(-200.0, 0.0),
            JointOptions {
                collide_connected: false,
                ..JointOptions::hidden()
            },
        ))
        .unwrap();

    for _ in 0..60 {
        world.step();
    }

    let length = world.position(anchor).unwrap().distance(world.position(bob).unwrap());
    assert!((length - 200.0).abs() < 10.0, "length {length}");
    assert!(world.position(bob).unwrap().y < 700.0);
}

#[test]
fn kinematic_bodies_ignore_gravity_and_follow_their_target() {
    let mut world = world();
    let paddle = ball(&mut world, BodyKind::Kinematic, Vec2::new(500.0, 500.0));

    for _ in 0..30 {
        world.step();
    }
    assert_eq!(world.position(paddle), Some(Vec2::new(500.0, 500.0)));

    world
        .body_mut(paddle)
        .unwrap()
        .set_next_kinematic_translation(to_vector(Vec2::new(620.0, 500.0)));
    world.step();
    let position = world.position(paddle).unwrap();
    assert!(position.abs_diff_eq(Vec2::new(620.0, 500.0), 1e-3), "{position}");
}

#[test]
fn moved_compound_bodies_draw_every_shape_in_place() {
    let mut world = world();
    let wall = |x: f32| {
        ShapeOptions::new(ShapeKind::Box {
            width: 10.0,
            height: 100.0,
        })
        .with_offset(Vec2::new(x, 0.0))
    };
    let base = ShapeOptions::new(ShapeKind::Box {
        width: 100.0,
        height: 10.0,
    })
    .with_offset(Vec2::new(0.0, -45.0));
    let cup = world.add_object(
        Object::with_shapes(
            ObjectOptions::new(
                Color::RED,
                BodyOptions {
                    kind: BodyKind::Kinematic,
                    position: Vec2::new(300.0, 200.0),
                    ..Default::default()
                },
            ),
            vec![wall(-45.0), base, wall(45.0)],
        )
        .unwrap(),
    );

    world
        .body_mut(cup)
        .unwrap()
        .set_next_kinematic_translation(to_vector(Vec2::new(400.0, 200.0)));
    world.step();

    let mut list = DrawList::new();
    world.draw(&mut list).unwrap();
    let centers: Vec<Vec2> = list
        .commands()
        .iter()
        .map(|command| match command {
            DrawCommand::Polygon { points, .. } => {
                points.iter().copied().sum::<Vec2>() / points.len() as f32
            }
            other => panic!("expected polygons, got {other:?}"),
        })
        .collect();
    let expected = [
        Vec2::new(355.0, 200.0),
        Vec2::new(400.0, 155.0),
        Vec2::new(445.0, 200.0),
    ];
    assert_eq!(centers.len(), expected.len());
    for (center, expected) in centers.iter().zip(expected) {
        assert!(center.abs_diff_eq(expected, 1e-3), "{center} != {expected}");
    }
}
