//! A wrecking ball on a chain. Space toggles a stream of bullets fired at it
//! from either side of the window.

use std::time::Duration;

use log::info;
use rand::Rng;
use rigid_sfml::{
    BodyKind, BodyOptions, FrameInput, Joint, JointOptions, Object, ObjectHandle, ObjectOptions,
    World, glam::Vec2, sfml::{graphics::Color, window::Key},
};

const LINK_WIDTH: f32 = 10.0;
const LINK_COUNT: usize = 20;
const FIRE_INTERVAL: Duration = Duration::from_secs(1);

fn main() -> anyhow::Result<()> {
    let _logger = rigid_sfml::logging::setup()?;
    let (mut world, mut app) = create_world(1024.0, 1080.0)?;
    world.run_with(|world, input| {
        if let Err(err) = app.process(world, input) {
            log::error!("{err}");
        }
    })?;
    Ok(())
}

#[derive(Default)]
struct App {
    firing: bool,
    last_shot: Duration,
}

fn create_world(width: f32, height: f32) -> anyhow::Result<(World, App)> {
    let mut world = World::new("ball and chain", 0.0, 0.0, width, height);
    world.set_gravity(Vec2::new(0.0, -981.0));
    world.set_frame_rate(120)?;

    let middle = Vec2::new(width / 2.0, height * 3.0 / 4.0);
    let anchor = world.add_object(circle(Color::RED, BodyKind::Static, middle, 1e3, 20.0, 1.0)?);
    let ball = world.add_object(circle(
        Color::rgb(255, 165, 0),
        BodyKind::Dynamic,
        middle + Vec2::new(300.0, 200.0),
        1e3,
        50.0,
        0.99,
    )?);
    create_chain(&mut world, anchor, ball)?;

    Ok((world, App::default()))
}

fn circle(
    color: Color,
    kind: BodyKind,
    position: Vec2,
    mass: f32,
    radius: f32,
    elasticity: f32,
) -> rigid_sfml::Result<Object> {
    Object::new_circle(
        ObjectOptions::new(
            color,
            BodyOptions {
                kind,
                position,
                mass,
                elasticity,
                ..Default::default()
            },
        ),
        radius,
    )
}

fn radius(world: &World, handle: ObjectHandle) -> f32 {
    world.object(handle).and_then(Object::radius).unwrap_or_default()
}

fn create_chain(world: &mut World, anchor: ObjectHandle, ball: ObjectHandle) -> anyhow::Result<()> {
    let anchor_position = world.position(anchor).unwrap_or_default();
    let ball_position = world.position(ball).unwrap_or_default();
    let anchor_radius = radius(world, anchor);
    let ball_radius = radius(world, ball);

    let delta = Vec2::new(
        ball_position.x - anchor_position.x - ball_radius - anchor_radius,
        ball_position.y - anchor_position.y,
    ) / LINK_COUNT as f32;

    let mut links = Vec::with_capacity(LINK_COUNT);
    let mut position = anchor_position + Vec2::new(anchor_radius, 0.0);
    for _ in 0..LINK_COUNT {
        links.push(world.add_object(Object::new_box(
            ObjectOptions::new(
                Color::rgb(169, 169, 169),
                BodyOptions {
                    position,
                    mass: 50.0,
                    ..Default::default()
                },
            ),
            LINK_WIDTH,
            6.0,
        )?));
        position += delta;
    }

    let options = JointOptions {
        collide_connected: false,
        ..JointOptions::visible(Color::rgb(184, 134, 11), 1.0)
    };
    let left = Vec2::new(-LINK_WIDTH / 2.0, 0.0);
    let right = Vec2::new(LINK_WIDTH / 2.0, 0.0);

    world.add_joint(Joint::pivot(anchor, links[0], Vec2::new(0.0, -anchor_radius), left, options))?;
    for pair in links.windows(2) {
        world.add_joint(Joint::pivot(pair[0], pair[1], right, left, options))?;
    }
    let last = links[LINK_COUNT - 1];
    world.add_joint(Joint::pivot(last, ball, right, Vec2::new(-ball_radius, 0.0), options))?;
    Ok(())
}

impl App {
    fn process(&mut self, world: &mut World, input: &FrameInput) -> anyhow::Result<()> {
        if input.just_released(Key::Space) {
            self.firing = !self.firing;
            info!("firing: {}", self.firing);
            if self.firing {
                self.fire(world)?;
                self.last_shot = input.elapsed;
            }
        }
        if self.firing && input.elapsed.saturating_sub(self.last_shot) >= FIRE_INTERVAL {
            self.fire(world)?;
            self.last_shot = input.elapsed;
            let removed = world.retain_objects(|_, body| body.translation().y >= 0.0);
            if removed > 0 {
                info!("cleaned up {removed} fallen object(s)");
            }
        }
        Ok(())
    }

    fn fire(&self, world: &mut World) -> anyhow::Result<()> {
        let mut position = Vec2::new(20.0, 700.0);
        let mut velocity = Vec2::new(2e3, 0.0);
        if rand::thread_rng().gen_bool(0.5) {
            position.x = world.bounds().max.x - 20.0;
            velocity.x = -velocity.x;
        }
        world.add_object(Object::new_circle(
            ObjectOptions::new(
                Color::rgb(192, 192, 192),
                BodyOptions {
                    position,
                    velocity,
                    mass: 1e4,
                    ..Default::default()
                },
            ),
            5.0,
        )?);
        Ok(())
    }
}
