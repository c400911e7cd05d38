//! Pure classifiers over drag samples.
//!
//! Every comparison is a strict ordered comparison, so NaN components never
//! match and callers fall through to their default branch.

use crate::gesture_constants::PULL_UP_VELOCITY_THRESHOLD;

/// Vertical state of one drag at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSample {
    /// Cumulative vertical displacement since touch-down, positive downwards.
    pub dy: f32,
    /// Instantaneous vertical velocity in pixels per millisecond.
    pub vy: f32,
}

impl DragSample {
    pub const fn new(dy: f32, vy: f32) -> Self {
        Self { dy, vy }
    }
}

pub fn is_pulling_down(sample: DragSample) -> bool {
    sample.dy > 0.0 && sample.vy > 0.0
}

pub fn is_pulling_down_with_momentum(sample: DragSample, threshold: f32) -> bool {
    sample.dy > 0.0 && sample.vy > threshold
}

pub fn is_pulling_up(sample: DragSample) -> bool {
    sample.dy < 0.0 && sample.vy < PULL_UP_VELOCITY_THRESHOLD
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
