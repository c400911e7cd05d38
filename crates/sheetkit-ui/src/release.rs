//! Picks the single outcome of a finished drag.
//!
//! Checks run in priority order against the terminal sample and the panel
//! offset at release:
//!
//! 1. a downward fling dismisses (when enabled);
//! 2. a panel pulled past its most expanded stop snaps back to it;
//! 3. a panel pulled below its least expanded stop dismisses (when enabled);
//! 4. otherwise the panel auto-snaps by direction, then by proximity.

use sheetkit_foundation::{
    is_pulling_down, is_pulling_down_with_momentum, is_pulling_up, DragSample,
};

use crate::config::SheetConfig;
use crate::stops::Stops;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissCause {
    MomentumPull,
    PullExtend,
    ClickOutside,
    Imperative,
    /// There was no stop to settle on.
    NoStops,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    Dismiss(DismissCause),
    Snap(usize),
}

pub fn resolve_release(
    sample: DragSample,
    position: f32,
    stops: &Stops,
    config: &SheetConfig,
) -> ReleaseOutcome {
    if config.dismiss_on_momentum_pull
        && is_pulling_down_with_momentum(sample, config.momentum_threshold)
    {
        return ReleaseOutcome::Dismiss(DismissCause::MomentumPull);
    }

    let (Some(first), Some(last), Some(last_index)) =
        (stops.first(), stops.last(), stops.last_index())
    else {
        return ReleaseOutcome::Dismiss(DismissCause::NoStops);
    };

    if position < last {
        return ReleaseOutcome::Snap(last_index);
    }
    if position > first && config.dismiss_on_pull_extend {
        return ReleaseOutcome::Dismiss(DismissCause::PullExtend);
    }

    auto_snap_index(sample, position, stops)
        .map(ReleaseOutcome::Snap)
        .unwrap_or(ReleaseOutcome::Dismiss(DismissCause::NoStops))
}

/// Stop index a released panel settles on when nothing dismisses it.
///
/// Direction wins over proximity. Without a clear direction the strictly
/// closer of the first and last stops is chosen; ties go to the last.
pub fn auto_snap_index(sample: DragSample, position: f32, stops: &Stops) -> Option<usize> {
    let last_index = stops.last_index()?;
    if is_pulling_down(sample) {
        return Some(0);
    }
    if is_pulling_up(sample) {
        return Some(last_index);
    }
    match (stops.first(), stops.last()) {
        (Some(first), Some(last))
            if stops.len() > 1 && (position - first).abs() < (position - last).abs() =>
        {
            Some(0)
        }
        _ => Some(last_index),
    }
}

#[cfg(test)]
#[path = "tests/release_tests.rs"]
mod tests;
