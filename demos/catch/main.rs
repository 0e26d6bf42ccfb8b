//! Catch the falling tennis balls with the cup. Left and right arrows steer.

mod ball;
mod cup;

use std::time::Duration;

use log::debug;
use rand::Rng;
use rigid_sfml::{
    BodyKind, BodyOptions, Bounds, FrameInput, Object, ObjectOptions, World, WorldOptions,
    glam::Vec2,
    sfml::{graphics::Color, window::Key},
};

use cup::Cup;

const WIDTH: f32 = 1024.0;
const HEIGHT: f32 = 1080.0;
const FLOOR_HEIGHT: f32 = 40.0;
const CUP_WIDTH: f32 = 300.0;
const CUP_HEIGHT: f32 = 200.0;
const BALL_INTERVAL: Duration = Duration::from_secs(1);

struct Catch {
    cup: Cup,
    last_ball: Duration,
}

fn main() -> anyhow::Result<()> {
    let _logger = rigid_sfml::logging::setup()?;

    let mut world = World::with_options(
        WorldOptions::new("catch!", Bounds::new(0.0, 0.0, WIDTH, HEIGHT))
            .with_gravity(Vec2::new(0.0, -900.0))
            .with_background(Color::rgb(10, 60, 20))
            .with_info(true),
    )?;

    // Floor
    world.add_object(Object::new_box(
        ObjectOptions::new(
            Color::BLUE,
            BodyOptions {
                kind: BodyKind::Static,
                position: Vec2::new(WIDTH / 2.0, FLOOR_HEIGHT / 2.0),
                elasticity: 0.6,
                friction: 1.0,
                ..Default::default()
            },
        ),
        WIDTH,
        FLOOR_HEIGHT,
    )?);

    let cup = Cup::new(
        &mut world,
        Vec2::new(400.0, FLOOR_HEIGHT + CUP_HEIGHT / 2.0),
        CUP_WIDTH,
        CUP_HEIGHT,
        Color::rgb(165, 42, 42),
    )?;
    let mut game = Catch {
        cup,
        last_ball: Duration::ZERO,
    };

    world.run_with(|world, input| {
        if let Err(err) = game.process(world, input) {
            log::error!("{err}");
        }
    })?;
    Ok(())
}

impl Catch {
    fn process(&mut self, world: &mut World, input: &FrameInput) -> anyhow::Result<()> {
        if input.elapsed.saturating_sub(self.last_ball) >= BALL_INTERVAL {
            self.last_ball = input.elapsed;
            self.add_ball(world)?;
            let removed = world.retain_objects(|_, body| body.translation().y >= 0.0);
            if removed > 0 {
                debug!("{removed} ball(s) missed");
            }
        }
        if input.just_released(Key::Right) {
            self.cup.set_direction(1.0);
        }
        if input.just_released(Key::Left) {
            self.cup.set_direction(-1.0);
        }
        self.cup.advance(world);
        Ok(())
    }

    fn add_ball(&self, world: &mut World) -> anyhow::Result<()> {
        let bounds = world.bounds();
        let x = rand::thread_rng().gen_range(bounds.min.x..bounds.max.x);
        world.add_object(ball::new_ball(Vec2::new(x, bounds.max.y), 20.0, Color::YELLOW)?);
        Ok(())
    }
}
