//! Maps cumulative drag displacement onto the panel offset.

use sheetkit_foundation::gesture_constants::ELASTIC_DAMPING;

use crate::stops::Stops;

/// Per-touch drag state.
///
/// The first move of a touch records the panel offset as the baseline; every
/// later move places the panel at `baseline + dy`. Past the most expanded stop
/// the overshoot is divided by the damping factor, giving the elastic pull.
#[derive(Debug, Clone, PartialEq)]
pub struct DragIntegrator {
    baseline: Option<f32>,
    damping: f32,
}

impl Default for DragIntegrator {
    fn default() -> Self {
        Self::new(ELASTIC_DAMPING)
    }
}

impl DragIntegrator {
    /// `damping` below 1 would amplify the overshoot and is raised to 1.
    pub fn new(damping: f32) -> Self {
        let damping = if damping >= 1.0 { damping } else { 1.0 };
        Self {
            baseline: None,
            damping,
        }
    }

    pub fn is_active(&self) -> bool {
        self.baseline.is_some()
    }

    pub fn baseline(&self) -> Option<f32> {
        self.baseline
    }

    /// Returns the new panel offset for cumulative displacement `dy`.
    pub fn on_move(&mut self, dy: f32, position: f32, stops: &Stops) -> f32 {
        let baseline = *self.baseline.get_or_insert(position);
        let candidate = baseline + dy;
        match stops.last() {
            Some(last) if candidate < last => {
                let displacement = if baseline == last { dy } else { candidate - last };
                let damped = last + displacement / self.damping;
                log::trace!("elastic drag dy={dy:.1} -> {damped:.2}");
                damped
            }
            _ => candidate,
        }
    }

    pub fn end(&mut self) {
        self.baseline = None;
    }
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
