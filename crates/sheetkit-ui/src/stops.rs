//! Resting positions of the panel.
//!
//! A stop is a vertical offset from the top of the container. Each form
//! (short, then long) contributes `container - height`, in that order and
//! unsorted, so index 0 is the least expanded stop and the last index the most
//! expanded one when `short <= long`.

use smallvec::SmallVec;

/// Ordered snap offsets; zero, one or two entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stops {
    offsets: SmallVec<[f32; 2]>,
}

impl Stops {
    /// Derives stops from the form heights.
    ///
    /// Absent forms are skipped. An offset of exactly zero (a form as tall as
    /// the container) or NaN is skipped too, so a full-height form yields no
    /// stop at all.
    pub fn compute(short: Option<f32>, long: Option<f32>, container_height: f32) -> Self {
        let offsets = [short, long]
            .into_iter()
            .flatten()
            .map(|height| container_height - height)
            .filter(|offset| *offset != 0.0 && !offset.is_nan())
            .collect();
        Self { offsets }
    }

    pub fn from_offsets(offsets: impl IntoIterator<Item = f32>) -> Self {
        Self {
            offsets: offsets.into_iter().collect(),
        }
    }

    /// Least expanded stop.
    pub fn first(&self) -> Option<f32> {
        self.offsets.first().copied()
    }

    /// Most expanded stop.
    pub fn last(&self) -> Option<f32> {
        self.offsets.last().copied()
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.offsets.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.offsets.len().checked_sub(1)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.offsets
    }
}

type HeightFn = Box<dyn Fn() -> f32>;

/// Height providers for the panel's forms, queried on every layout update.
pub struct SheetForms {
    short: Option<HeightFn>,
    long: HeightFn,
}

impl SheetForms {
    /// A sheet with only a long form.
    pub fn long(height: impl Fn() -> f32 + 'static) -> Self {
        Self {
            short: None,
            long: Box::new(height),
        }
    }

    pub fn with_short(mut self, height: impl Fn() -> f32 + 'static) -> Self {
        self.short = Some(Box::new(height));
        self
    }

    pub fn has_short_form(&self) -> bool {
        self.short.is_some()
    }

    pub fn short_height(&self) -> Option<f32> {
        self.short.as_ref().map(|height| height())
    }

    pub fn long_height(&self) -> f32 {
        (self.long)()
    }

    pub fn stops(&self, container_height: f32) -> Stops {
        Stops::compute(
            self.short_height(),
            Some(self.long_height()),
            container_height,
        )
    }
}

impl std::fmt::Debug for SheetForms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetForms")
            .field("short", &self.short_height())
            .field("long", &self.long_height())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/stops_tests.rs"]
mod tests;
