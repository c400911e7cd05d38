//! Layout change notifications that skip redundant passes.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutBounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Forwards layout passes to a callback, but only when the measured height
/// differs from the last forwarded one.
///
/// In run-once mode only the very first pass is considered at all.
pub struct LayoutObserver {
    callback: Box<dyn FnMut(LayoutBounds)>,
    bounds: Option<LayoutBounds>,
    run_once: bool,
    did_run: bool,
}

impl LayoutObserver {
    pub fn new(callback: impl FnMut(LayoutBounds) + 'static) -> Self {
        Self {
            callback: Box::new(callback),
            bounds: None,
            run_once: false,
            did_run: false,
        }
    }

    pub fn run_once(callback: impl FnMut(LayoutBounds) + 'static) -> Self {
        Self {
            run_once: true,
            ..Self::new(callback)
        }
    }

    /// Feeds one layout pass. Returns whether the callback ran.
    pub fn on_layout(&mut self, bounds: LayoutBounds) -> bool {
        if self.run_once && self.did_run {
            return false;
        }
        self.did_run = true;
        if self.bounds.map(|last| last.height) == Some(bounds.height) {
            return false;
        }
        log::trace!("layout height changed to {:.1}", bounds.height);
        self.bounds = Some(bounds);
        (self.callback)(bounds);
        true
    }

    /// Last bounds handed to the callback.
    pub fn bounds(&self) -> Option<LayoutBounds> {
        self.bounds
    }
}

impl std::fmt::Debug for LayoutObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutObserver")
            .field("bounds", &self.bounds)
            .field("run_once", &self.run_once)
            .field("did_run", &self.did_run)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
