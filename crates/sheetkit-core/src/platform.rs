//! Platform abstraction traits for the SheetKit runtime.
//!
//! The runtime never asks the OS for time or wakes itself up. Hosts plug in a
//! scheduler that is told when frames are wanted and a clock that produces the
//! frame timestamps they feed back through `drain_frame_callbacks`.

use web_time::Instant;

/// Schedules frames for the runtime.
///
/// Implementations must be safe to use from multiple threads.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Scheduler for headless hosts that pump frames themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScheduler;

impl RuntimeScheduler for NoopScheduler {
    fn schedule_frame(&self) {}
}

/// Provides timing information for the runtime.
pub trait Clock: Send + Sync {
    /// Instant type produced by this clock implementation.
    type Instant: Copy + Send + Sync;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Self::Instant) -> u64;
}

/// Wall clock backed by `web_time`, usable on native and wasm targets.
#[derive(Debug, Clone, Copy)]
pub struct WebTimeClock {
    origin: Instant,
}

impl WebTimeClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Nanoseconds since this clock was created, suitable as a frame time.
    pub fn frame_time_nanos(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}

impl Default for WebTimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WebTimeClock {
    type Instant = Instant;

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn elapsed_millis(&self, since: Self::Instant) -> u64 {
        since.elapsed().as_millis() as u64
    }
}
