//! Visual values derived from the panel offset.

use crate::config::SheetConfig;
use crate::stops::Stops;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrapolation {
    /// Hold the nearest output bound outside the input range.
    Clamp,
    /// Continue the line through both bounds.
    Extend,
}

/// Maps `value` linearly from `input` onto `output`.
///
/// Input ranges may run in either direction. A degenerate input range maps
/// everything to `output.0`.
pub fn interpolate(
    value: f32,
    input: (f32, f32),
    output: (f32, f32),
    extrapolation: Extrapolation,
) -> f32 {
    let span = input.1 - input.0;
    if span == 0.0 {
        return output.0;
    }
    let mut fraction = (value - input.0) / span;
    if extrapolation == Extrapolation::Clamp {
        fraction = fraction.clamp(0.0, 1.0);
    }
    output.0 + (output.1 - output.0) * fraction
}

/// Backdrop opacity at panel offset `position`.
///
/// An explicit `background_opacity` is returned as is. Otherwise the opacity
/// grows from 0 with the panel at the container's bottom edge to the
/// configured maximum at `container - last stop`.
pub fn backdrop_opacity(
    position: f32,
    container_height: f32,
    stops: &Stops,
    config: &SheetConfig,
) -> f32 {
    if let Some(opacity) = config.background_opacity {
        return opacity;
    }
    let Some(last) = stops.last() else {
        return 0.0;
    };
    interpolate(
        position,
        (container_height, container_height - last),
        (0.0, config.max_backdrop_opacity),
        Extrapolation::Clamp,
    )
}

/// Vertical translation applied to the panel.
///
/// With several stops the offset passes through an identity mapping over
/// `[first, last]` that extends past both ends; it is the hook for a
/// non-linear response between stops. Otherwise the offset is used directly.
pub fn panel_translation(position: f32, stops: &Stops) -> f32 {
    match (stops.first(), stops.last()) {
        (Some(first), Some(last)) if stops.len() > 1 => interpolate(
            position,
            (first, last),
            (first, last),
            Extrapolation::Extend,
        ),
        _ => position,
    }
}

#[cfg(test)]
#[path = "tests/presentation_tests.rs"]
mod tests;
