//! Shared gesture constants for panel drags.
//!
//! Distances are in logical pixels and velocities in logical pixels per
//! millisecond, the units drag samples are reported in.

/// Release velocity a downward pull must exceed to count as a momentum pull.
pub const PULL_DOWN_MOMENTUM_THRESHOLD: f32 = 2.0;

/// Release velocity an upward pull must fall below to count as pulling up.
pub const PULL_UP_VELOCITY_THRESHOLD: f32 = -2.0;

/// Divisor applied to drag distance past the most expanded stop: 40px of
/// finger travel moves the panel 5px.
pub const ELASTIC_DAMPING: f32 = 8.0;

/// Maximum tracked pointer velocity in logical pixels per second.
///
/// Matches Android's default maximum fling velocity on a baseline density.
pub const MAX_DRAG_VELOCITY: f32 = 8_000.0;
