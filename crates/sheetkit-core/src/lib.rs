//! Core runtime for SheetKit.
//!
//! A sheet instance lives on a single conceptual timeline: the host delivers
//! touches between frames and drives frames through a [`RuntimeHandle`].
//! Everything that happens "later" (animation steps, the dismiss
//! notification) is queued on the runtime and runs when the host drains a
//! frame.

mod frame_clock;
mod platform;
mod runtime;
mod value_cell;

pub use frame_clock::{DelayedCallbackRegistration, FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, NoopScheduler, RuntimeScheduler, WebTimeClock};
pub use runtime::{Runtime, RuntimeHandle};
pub use value_cell::{ValueCell, WriterToken};

pub type FrameCallbackId = u64;
pub type DelayedCallbackId = u64;

/// Converts milliseconds to the nanosecond frame-time unit used by the runtime.
#[inline]
pub const fn millis_to_nanos(millis: u64) -> u64 {
    millis * 1_000_000
}
