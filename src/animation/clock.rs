use std::time::Instant;

/// Source of monotonic frame timestamps in milliseconds.
pub trait FrameClock {
    /// Timestamp for the next frame.
    fn now_ms(&mut self) -> f64;
}

/// Wall-clock time since construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Clock starting at zero now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now_ms(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Headless clock advancing a fixed step per frame, starting at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepClock {
    step_ms: f64,
    next_ms: f64,
}

impl StepClock {
    /// Clock for `fps` frames per second (`fps` is floored at 1).
    pub fn from_fps(fps: u32) -> Self {
        Self {
            step_ms: 1000.0 / f64::from(fps.max(1)),
            next_ms: 0.0,
        }
    }

    /// Milliseconds between frames.
    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }
}

impl FrameClock for StepClock {
    fn now_ms(&mut self) -> f64 {
        let now = self.next_ms;
        self.next_ms += self.step_ms;
        now
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
