//! A row of boxes at different angles, turned a little every frame.

use std::f32::consts::{FRAC_PI_4, PI};

use rand::seq::SliceRandom;
use rigid_sfml::{
    BodyOptions, Object, ObjectOptions, World, glam::Vec2, rapier2d::na::UnitComplex,
    sfml::graphics::Color,
};

const COLORS: [Color; 8] = [
    Color::WHITE,
    Color::RED,
    Color::rgb(255, 165, 0),
    Color::YELLOW,
    Color::GREEN,
    Color::BLUE,
    Color::rgb(75, 0, 130),
    Color::rgb(238, 130, 238),
];

fn main() -> anyhow::Result<()> {
    let _logger = rigid_sfml::logging::setup()?;

    let mut world = World::new("angled boxes", 0.0, 0.0, 1024.0, 1080.0);
    let mut rng = rand::thread_rng();

    for i in 0..8 {
        let color = *COLORS.choose(&mut rng).unwrap_or(&Color::WHITE);
        world.add_object(Object::new_box(
            ObjectOptions::new(
                color,
                BodyOptions {
                    position: Vec2::new(50.0 + i as f32 * 150.0, 500.0),
                    angle: i as f32 * FRAC_PI_4,
                    ..Default::default()
                },
            ),
            40.0,
            80.0,
        )?);
    }

    world.run_with(|world, _input| {
        let handles: Vec<_> = world.object_handles().collect();
        for handle in handles {
            if let Some(body) = world.body_mut(handle) {
                let angle = body.rotation().angle() + PI / 150.0;
                body.set_rotation(UnitComplex::new(angle), true);
            }
        }
    })?;
    Ok(())
}
