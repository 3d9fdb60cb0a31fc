//! Frame timing
//!
//! The simulation integrates with whatever `dt` the clock hands it. The live
//! clock reports the measured duration of the previous frame, so physics is
//! frame-rate dependent; the fixed clock makes runs reproducible.

use macroquad::prelude::get_time;

/// Source of the per-frame time step
pub trait FrameClock {
    /// Seconds to simulate this frame
    fn delta(&mut self) -> f32;
}

/// Measured frame time from macroquad
#[derive(Debug, Default)]
pub struct LiveClock;

impl FrameClock for LiveClock {
    fn delta(&mut self) -> f32 {
        macroquad::prelude::get_frame_time()
    }
}

/// Constant time step
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
}

impl FrameClock for FixedClock {
    fn delta(&mut self) -> f32 {
        self.dt
    }
}

/// Pick the clock for a run: fixed when `fixed_dt` is set, live otherwise
pub fn clock_for(fixed_dt: Option<f32>) -> Box<dyn FrameClock> {
    match fixed_dt {
        Some(dt) => Box::new(FixedClock { dt }),
        None => Box::new(LiveClock),
    }
}

/// Caps the loop to a target frame rate
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    target_frame_time: Option<f64>,
    frame_start: f64,
}

impl FramePacer {
    pub fn new(target_frame_time: Option<f64>) -> Self {
        Self { target_frame_time, frame_start: 0.0 }
    }

    /// Mark the start of a frame
    pub fn begin(&mut self) {
        self.frame_start = get_time();
    }

    /// Block until the target frame time has elapsed since `begin`
    pub fn wait(&self) {
        let Some(target) = self.target_frame_time else { return };
        if target - (get_time() - self.frame_start) <= 0.0 {
            return;
        }

        // Sleep for bulk, then spin-wait for precision
        let spin_margin = 0.002; // 2ms
        while get_time() - self.frame_start + spin_margin < target {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - self.frame_start < target {
            std::hint::spin_loop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_constant() {
        let mut clock = FixedClock { dt: 1.0 / 60.0 };
        assert_eq!(clock.delta(), 1.0 / 60.0);
        assert_eq!(clock.delta(), 1.0 / 60.0);
    }

    #[test]
    fn test_clock_for_fixed() {
        let mut clock = clock_for(Some(0.25));
        assert_eq!(clock.delta(), 0.25);
    }
}
