//! Behaviour switches and tuning for a [`BottomSheet`](crate::BottomSheet).

pub use sheetkit_animation::DISMISS_DURATION_MILLIS;
use sheetkit_animation::SpringSpec;
use sheetkit_foundation::gesture_constants::{ELASTIC_DAMPING, PULL_DOWN_MOMENTUM_THRESHOLD};

/// Backdrop opacity when the panel rests on its most expanded stop.
pub const MAX_BACKDROP_OPACITY: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetConfig {
    /// Tapping the backdrop dismisses the sheet. When off, the backdrop lets
    /// pointer input through to whatever sits underneath.
    pub dismiss_on_click_outside: bool,
    /// A fast downward fling dismisses regardless of where the panel is.
    pub dismiss_on_momentum_pull: bool,
    /// Releasing below the least expanded stop dismisses.
    pub dismiss_on_pull_extend: bool,
    /// Fixed backdrop opacity. `None` derives it from the panel position.
    pub background_opacity: Option<f32>,
    pub dismiss_duration_millis: u64,
    pub snap_spring: SpringSpec,
    /// Release velocity (px/ms) above which a downward pull counts as a fling.
    pub momentum_threshold: f32,
    pub max_backdrop_opacity: f32,
    /// Divisor applied to drag distance past the most expanded stop.
    pub elastic_damping: f32,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            dismiss_on_click_outside: true,
            dismiss_on_momentum_pull: true,
            dismiss_on_pull_extend: true,
            background_opacity: None,
            dismiss_duration_millis: DISMISS_DURATION_MILLIS,
            snap_spring: SpringSpec::sheet_snap(),
            momentum_threshold: PULL_DOWN_MOMENTUM_THRESHOLD,
            max_backdrop_opacity: MAX_BACKDROP_OPACITY,
            elastic_damping: ELASTIC_DAMPING,
        }
    }
}

impl SheetConfig {
    pub fn with_dismiss_on_click_outside(mut self, enabled: bool) -> Self {
        self.dismiss_on_click_outside = enabled;
        self
    }

    pub fn with_dismiss_on_momentum_pull(mut self, enabled: bool) -> Self {
        self.dismiss_on_momentum_pull = enabled;
        self
    }

    pub fn with_dismiss_on_pull_extend(mut self, enabled: bool) -> Self {
        self.dismiss_on_pull_extend = enabled;
        self
    }

    pub fn with_background_opacity(mut self, opacity: f32) -> Self {
        self.background_opacity = Some(opacity);
        self
    }

    pub fn with_dismiss_duration_millis(mut self, duration_millis: u64) -> Self {
        self.dismiss_duration_millis = duration_millis;
        self
    }

    pub fn with_snap_spring(mut self, spring: SpringSpec) -> Self {
        self.snap_spring = spring;
        self
    }

    pub fn with_momentum_threshold(mut self, threshold: f32) -> Self {
        self.momentum_threshold = threshold;
        self
    }

    pub fn with_max_backdrop_opacity(mut self, opacity: f32) -> Self {
        self.max_backdrop_opacity = opacity;
        self
    }

    pub fn with_elastic_damping(mut self, damping: f32) -> Self {
        self.elastic_damping = damping;
        self
    }
}
