//! Foundation input layer for SheetKit.
//!
//! Turns raw pointer events into drag samples, classifies them, and decides
//! whether a panel drag or an embedded scroll view owns the touch.

pub mod arbiter;
pub mod classify;
pub mod gesture_constants;
pub mod pan;
pub mod pointer;
pub mod scroll;
pub mod velocity_tracker;

pub use arbiter::{decide_claim, ClaimContext, ClaimDecision, ClaimRule, GestureArbiter};
pub use classify::{is_pulling_down, is_pulling_down_with_momentum, is_pulling_up, DragSample};
pub use pan::{PanTracker, PanUpdate};
pub use pointer::{Point, PointerEvent, PointerEventKind, PointerId};
pub use scroll::ScrollState;
pub use velocity_tracker::VelocityTracker1D;

pub mod prelude {
    pub use crate::classify::DragSample;
    pub use crate::pointer::{Point, PointerEvent, PointerEventKind, PointerId};
}
