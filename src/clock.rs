//! Simulation clock driven by the host's frame deltas.
//!
//! Every timer in the game (sprints, incubation, story beats, animation
//! frames) reads this clock, so a test can drive the whole simulation
//! deterministically by feeding it deltas.

/// Monotonic simulation time in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimClock {
    now: f64,
    max_frame_seconds: f64,
}

impl SimClock {
    /// A clock at zero which clamps single frames to `max_frame_seconds`.
    #[must_use]
    pub const fn new(max_frame_seconds: f64) -> Self {
        Self {
            now: 0.0,
            max_frame_seconds,
        }
    }

    /// Current simulation time.
    #[must_use]
    pub const fn now(&self) -> f64 {
        self.now
    }

    /// Advances by one frame and returns the delta actually applied.
    ///
    /// Negative or non-finite deltas are treated as zero and long frames are
    /// clamped so a stalled host cannot teleport entities across the field.
    pub fn advance(&mut self, elapsed_seconds: f64) -> f64 {
        let delta = if elapsed_seconds.is_finite() && elapsed_seconds > 0.0 {
            elapsed_seconds.min(self.max_frame_seconds)
        } else {
            0.0
        };
        self.now += delta;
        delta
    }
}
