//! Match timer
//!
//! Accumulates elapsed time for the HUD. Nothing in the simulation reads it back.

use serde::{Deserialize, Serialize};

use crate::consts::FRAME_MS;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameTimer {
    elapsed_frames: f32,
    elapsed_ms: f32,
}

impl GameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one tick of `dt` time-units; non-positive steps are ignored
    pub fn update(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        self.elapsed_frames += dt;
        self.elapsed_ms += dt * FRAME_MS;
    }

    pub fn elapsed_frames(&self) -> f32 {
        self.elapsed_frames
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Text shown by the HUD, seconds to one decimal place
    pub fn text(&self) -> String {
        let frames = self.elapsed_frames.round();
        let seconds = (self.elapsed_ms / 100.0).round() / 10.0;
        format!("Elapsed Frames: {frames}\nElapsed Seconds: {seconds}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates() {
        let mut timer = GameTimer::new();
        for _ in 0..90 {
            timer.update(1.0);
        }
        assert_eq!(timer.elapsed_frames(), 90.0);
        assert!((timer.elapsed_ms() - 1500.0).abs() < 0.05);
    }

    #[test]
    fn test_never_runs_backwards() {
        let mut timer = GameTimer::new();
        timer.update(25.0);
        timer.update(-5.0);
        timer.update(0.0);
        assert_eq!(timer.elapsed_frames(), 25.0);
        assert!((timer.elapsed_ms() - 25.0 * FRAME_MS).abs() < 1e-3);
    }

    #[test]
    fn test_text() {
        let mut timer = GameTimer::new();
        assert_eq!(timer.text(), "Elapsed Frames: 0\nElapsed Seconds: 0");

        for _ in 0..90 {
            timer.update(1.0);
        }
        assert_eq!(timer.text(), "Elapsed Frames: 90\nElapsed Seconds: 1.5");
    }
}
