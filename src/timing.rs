use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use crate::error::{Error, Result};

/// Keeps the main loop at a fixed rate by sleeping away whatever is left of
/// each frame's time slice.
pub struct FrameLimiter {
    frames_to_track: usize,
    frame_starts: VecDeque<Instant>,
    target_duration: Duration,
}

impl FrameLimiter {
    pub fn new(frame_rate: u32, frames_to_track: usize) -> Result<Self> {
        if frame_rate == 0 {
            return Err(Error::InvalidFrameRate);
        }
        Ok(Self {
            frames_to_track: frames_to_track.max(1),
            frame_starts: VecDeque::with_capacity(frames_to_track + 1),
            target_duration: Duration::from_secs(1) / frame_rate,
        })
    }

    pub fn target_duration(&self) -> Duration {
        self.target_duration
    }

    /// Call at the beginning of each frame.
    pub fn start_frame(&mut self) {
        if self.frame_starts.len() > self.frames_to_track {
            self.frame_starts.pop_back();
        }
        self.frame_starts.push_front(Instant::now());
    }

    /// Time spent since the current frame started.
    pub fn elapsed(&self) -> Duration {
        self.frame_starts
            .front()
            .map(Instant::elapsed)
            .unwrap_or_default()
    }

    /// Sleeps for the remainder of the frame. Returns false if the frame
    /// already overran its slice.
    pub fn sleep_to_limit(&self) -> bool {
        let elapsed = self.elapsed();
        if elapsed < self.target_duration {
            spin_sleep::sleep(self.target_duration - elapsed);
            true
        } else {
            false
        }
    }

    /// Average time between the tracked frame starts.
    pub fn frame_time(&self) -> Duration {
        match (self.frame_starts.front(), self.frame_starts.back()) {
            (Some(newest), Some(oldest)) if self.frame_starts.len() > 1 => {
                newest.duration_since(*oldest) / (self.frame_starts.len() - 1) as u32
            }
            _ => self.target_duration,
        }
    }

    pub fn fps(&self) -> f32 {
        1.0 / self.frame_time().as_secs_f32().max(f32::EPSILON)
    }
}
