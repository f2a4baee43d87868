//! The value source for the display: a wrapping fixed-step counter.

use embassy_time::Duration;

use crate::shared_constants::{COUNTER_INTERVAL, COUNTER_MIN, COUNTER_STEP, MAX_VALUE};

/// Grows by [`COUNTER_STEP`] once per [`COUNTER_INTERVAL`] of elapsed time.
///
/// The counter owns its state outright. A step that would reach the end of
/// the displayable range wraps to [`COUNTER_MIN`], skipping and repeating
/// nothing.
#[derive(Debug)]
pub struct Counter {
    value: f32,
    carry: Duration,
}

impl Counter {
    /// Starts counting from zero.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(0.0)
    }

    /// Starts counting from `value`.
    #[must_use]
    pub const fn starting_at(value: f32) -> Self {
        Self {
            value,
            carry: Duration::from_ticks(0),
        }
    }

    /// The value to render right now.
    #[must_use]
    pub const fn current_value(&self) -> f32 {
        self.value
    }

    /// Credits `elapsed` wall-clock time, stepping the value once per full
    /// interval contained in it. Left-over time carries into the next call,
    /// so a jittery render loop does not slow the count.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "the carry only shrinks while it exceeds one interval"
    )]
    pub fn advance(&mut self, elapsed: Duration) {
        self.carry += elapsed;
        while self.carry >= COUNTER_INTERVAL {
            self.carry -= COUNTER_INTERVAL;
            self.value = Self::step(self.value);
        }
    }

    fn step(value: f32) -> f32 {
        let next = value + COUNTER_STEP;
        if next >= MAX_VALUE { COUNTER_MIN } else { next }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}
