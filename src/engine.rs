use std::time::{Duration, Instant};

use egui_sfml::SfEgui;
use egui_sfml::egui;

use log::{debug, info};
use sfml::{graphics::*, window::*};

use crate::{
    draw::DrawList,
    error::{Error, Result},
    renderer::Renderer,
    timing::FrameLimiter,
    world::World,
};

/// Number of frames averaged for the fps counter.
const FRAMES_TO_TRACK: usize = 30;

/// Keyboard state of a single frame.
#[derive(Debug, Default, Clone)]
pub struct FrameInput {
    /// Frames since the window opened
    pub frame: u64,
    /// Time since the window opened
    pub elapsed: Duration,
    pub pressed: Vec<Key>,
    pub released: Vec<Key>,
}

impl FrameInput {
    pub fn just_released(&self, key: Key) -> bool {
        self.released.contains(&key)
    }

    /// Keeps key presses and releases. F1 belongs to the info overlay.
    fn record(&mut self, event: &Event) {
        match *event {
            Event::KeyPressed { code: Key::F1, .. } | Event::KeyReleased { code: Key::F1, .. } => {}
            Event::KeyPressed { code, .. } => self.pressed.push(code),
            Event::KeyReleased { code, .. } => self.released.push(code),
            _ => {}
        }
    }

    fn next_frame(&mut self, elapsed: Duration) {
        self.frame += 1;
        self.elapsed = elapsed;
        self.pressed.clear();
        self.released.clear();
    }
}

#[derive(Default, Clone, Copy)]
struct FrameStats {
    step_time: Duration,
    draw_time: Duration,
}

pub(crate) fn run(
    world: &mut World,
    mut on_frame: impl FnMut(&mut World, &FrameInput),
) -> Result<()> {
    let options = world.options().clone();
    let (width, height) = options.bounds.window_size();
    let mut window = RenderWindow::new(
        (width, height),
        options.name.as_str(),
        Style::CLOSE,
        &ContextSettings {
            antialiasing_level: options.antialiasing_level,
            ..Default::default()
        },
    )
    .map_err(|err| Error::WindowCreate(format!("{err:?}")))?;
    info!("opened {width}x{height} window {:?}", options.name);

    let mut sfegui = SfEgui::new(&window);
    let mut renderer = Renderer::new(options.bounds);
    let mut limiter = FrameLimiter::new(world.frame_rate(), FRAMES_TO_TRACK)?;
    let mut list = DrawList::new();
    let mut input = FrameInput::default();
    let mut stats = FrameStats::default();
    let mut show_info = options.show_info;
    let started = Instant::now();

    while window.is_open() {
        if limiter.target_duration() != Duration::from_secs(1) / world.frame_rate() {
            debug!("frame rate changed to {}", world.frame_rate());
            limiter = FrameLimiter::new(world.frame_rate(), FRAMES_TO_TRACK)?;
        }
        limiter.start_frame();

        while let Some(event) = window.poll_event() {
            sfegui.add_event(&event);
            match event {
                Event::Closed => window.close(),
                Event::KeyReleased { code: Key::F1, .. } => show_info = !show_info,
                event => input.record(&event),
            }
        }
        if !window.is_open() {
            break;
        }

        on_frame(world, &input);

        let timer = Instant::now();
        world.step();
        stats.step_time = timer.elapsed();

        let timer = Instant::now();
        list.clear();
        world.draw(&mut list)?;
        window.clear(options.background);
        renderer.render(&list, &mut *window);
        stats.draw_time = timer.elapsed();

        let fps = limiter.fps();
        let frame_time = limiter.frame_time();
        let (objects, joints) = (world.object_count(), world.joint_count());
        let step_ms = stats.step_time.as_secs_f64() * 1e3;
        let draw_ms = stats.draw_time.as_secs_f64() * 1e3;
        let di = sfegui
            .run(&mut window, |_rw, ctx| {
                egui::Window::new("Info")
                    .default_pos((10.0, 10.0))
                    .collapsible(true)
                    .open(&mut show_info)
                    .resizable(false)
                    .show(ctx, |ui| {
                        ui.label(format!("FPS: {fps:.0}"));
                        ui.label(format!("Frame time: {:.3}ms", frame_time.as_secs_f64() * 1e3));
                        ui.separator();
                        ui.label(format!("Step time: {step_ms:.2}ms"));
                        ui.label(format!("Draw time: {draw_ms:.2}ms"));
                        ui.separator();
                        ui.label(format!("Objects: {objects}"));
                        ui.label(format!("Joints: {joints}"));
                    });
            })
            .map_err(|err| Error::Overlay(format!("{err:?}")))?;
        sfegui.draw(di, &mut window, None);

        window.display();
        let title = format!("{} ({fps:.1} fps)", world.name());
        window.set_title(title.as_str());

        if !limiter.sleep_to_limit() {
            debug!(
                "frame {} overran its {:?} slice",
                input.frame,
                limiter.target_duration()
            );
        }
        input.next_frame(started.elapsed());
    }

    info!("window {:?} closed after {} frames", options.name, input.frame);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: Key, pressed: bool) -> Event {
        let scan = Scancode::Unknown;
        let (alt, ctrl, shift, system) = (false, false, false, false);
        if pressed {
            Event::KeyPressed { code, scan, alt, ctrl, shift, system }
        } else {
            Event::KeyReleased { code, scan, alt, ctrl, shift, system }
        }
    }

    #[test]
    fn overlay_key_is_not_forwarded() {
        let mut input = FrameInput::default();
        input.record(&key(Key::F1, true));
        input.record(&key(Key::F1, false));
        input.record(&key(Key::Space, true));
        input.record(&key(Key::Left, false));
        input.record(&Event::Closed);

        assert_eq!(input.pressed, vec![Key::Space]);
        assert_eq!(input.released, vec![Key::Left]);
        assert!(input.just_released(Key::Left));
    }

    #[test]
    fn next_frame_forgets_the_keys() {
        let mut input = FrameInput::default();
        input.record(&key(Key::Right, false));
        input.next_frame(Duration::from_millis(16));

        assert_eq!(input.frame, 1);
        assert_eq!(input.elapsed, Duration::from_millis(16));
        assert!(!input.just_released(Key::Right));
    }
}
