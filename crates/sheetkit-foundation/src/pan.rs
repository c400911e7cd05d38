//! Single-pointer pan tracking.
//!
//! Accumulates the displacement of one pointer since it went down and keeps a
//! running velocity estimate, producing the `(dy, vy)` samples the panel's
//! gesture logic consumes. Additional pointers are ignored.

use crate::classify::DragSample;
use crate::gesture_constants::MAX_DRAG_VELOCITY;
use crate::pointer::{Point, PointerEvent, PointerEventKind, PointerId};
use crate::velocity_tracker::VelocityTracker1D;

/// What a pointer event meant for the tracked pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanUpdate {
    /// The tracked pointer went down.
    Start,
    /// The tracked pointer moved.
    Move(DragSample),
    /// The tracked pointer was lifted; carries the terminal sample.
    Release(DragSample),
    /// The platform cancelled the pointer stream.
    Cancel(DragSample),
}

#[derive(Debug, Clone)]
struct ActivePan {
    pointer: PointerId,
    origin: Point,
}

#[derive(Debug, Clone, Default)]
pub struct PanTracker {
    active: Option<ActivePan>,
    velocity: VelocityTracker1D,
    last_sample: DragSample,
}

impl PanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Latest sample of the current (or just finished) pan.
    pub fn last_sample(&self) -> DragSample {
        self.last_sample
    }

    pub fn on_event(&mut self, event: &PointerEvent) -> Option<PanUpdate> {
        match event.kind {
            PointerEventKind::Down => {
                if self.active.is_some() {
                    return None;
                }
                self.velocity.reset();
                self.velocity
                    .add_data_point(event.uptime_millis, event.position.y);
                self.last_sample = DragSample::default();
                self.active = Some(ActivePan {
                    pointer: event.id,
                    origin: event.position,
                });
                Some(PanUpdate::Start)
            }
            PointerEventKind::Move => {
                let origin = self.tracked_origin(event)?;
                let sample = self.sample_at(event, origin);
                Some(PanUpdate::Move(sample))
            }
            PointerEventKind::Up => {
                let origin = self.tracked_origin(event)?;
                let sample = self.sample_at(event, origin);
                self.active = None;
                log::trace!("pan released dy={:.1} vy={:.3}", sample.dy, sample.vy);
                Some(PanUpdate::Release(sample))
            }
            PointerEventKind::Cancel => {
                self.tracked_origin(event)?;
                self.active = None;
                Some(PanUpdate::Cancel(self.last_sample))
            }
        }
    }

    fn tracked_origin(&self, event: &PointerEvent) -> Option<Point> {
        self.active
            .as_ref()
            .filter(|pan| pan.pointer == event.id)
            .map(|pan| pan.origin)
    }

    fn sample_at(&mut self, event: &PointerEvent, origin: Point) -> DragSample {
        self.velocity
            .add_data_point(event.uptime_millis, event.position.y);
        let px_per_second = self.velocity.calculate_velocity_with_max(MAX_DRAG_VELOCITY);
        self.last_sample = DragSample::new(event.position.y - origin.y, px_per_second / 1000.0);
        self.last_sample
    }
}

#[cfg(test)]
#[path = "tests/pan_tests.rs"]
mod tests;
