//! Scroll offset mirror for content embedded in a panel.

use std::cell::Cell;
use std::rc::Rc;

/// Shared view of an inner scrollable's vertical offset.
///
/// The host's scroll view writes every scroll event into it; the panel only
/// reads it when arbitrating a touch. Zero means the content sits at its top
/// edge.
#[derive(Clone, Debug)]
pub struct ScrollState {
    inner: Rc<ScrollStateInner>,
}

#[derive(Debug)]
struct ScrollStateInner {
    offset: Cell<f32>,
}

impl ScrollState {
    pub fn new(initial: f32) -> Self {
        Self {
            inner: Rc::new(ScrollStateInner {
                offset: Cell::new(initial),
            }),
        }
    }

    pub fn offset(&self) -> f32 {
        self.inner.offset.get()
    }

    pub fn on_scroll(&self, offset: f32) {
        self.inner.offset.set(offset);
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0.0)
    }
}
