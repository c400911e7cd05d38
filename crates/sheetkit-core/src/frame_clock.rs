use crate::runtime::RuntimeHandle;
use crate::millis_to_nanos;

/// Entry point for scheduling work on the runtime's timeline.
#[derive(Clone)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    /// Run `callback` with the frame time of the next drained frame.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let id = self.runtime.register_frame_callback(callback);
        FrameCallbackRegistration(Slot::new(self.runtime.clone(), id, SlotKind::Frame))
    }

    /// Run `callback` once `delay_millis` of frame time has passed.
    ///
    /// The returned registration owns the callback: dropping or cancelling it
    /// before the deadline guarantees the callback never runs.
    pub fn after_millis(
        &self,
        delay_millis: u64,
        callback: impl FnOnce() + 'static,
    ) -> DelayedCallbackRegistration {
        let id = self
            .runtime
            .register_delayed_callback(millis_to_nanos(delay_millis), callback);
        DelayedCallbackRegistration(Slot::new(self.runtime.clone(), id, SlotKind::Delayed))
    }
}

#[derive(Clone, Copy)]
enum SlotKind {
    Frame,
    Delayed,
}

/// Queue entry owned by a registration; removed from the queue on drop.
struct Slot {
    runtime: RuntimeHandle,
    id: Option<u64>,
    kind: SlotKind,
}

impl Slot {
    fn new(runtime: RuntimeHandle, id: Option<u64>, kind: SlotKind) -> Self {
        Self { runtime, id, kind }
    }

    fn release(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        match self.kind {
            SlotKind::Frame => self.runtime.cancel_frame_callback(id),
            SlotKind::Delayed => self.runtime.cancel_delayed_callback(id),
        }
    }
}

impl Drop for Slot {
    fn drop(&mut self) {
        self.release();
    }
}

/// Pending frame callback. Dropping it cancels the callback.
pub struct FrameCallbackRegistration(Slot);

impl FrameCallbackRegistration {
    /// False when the runtime was already gone at registration time.
    pub fn is_active(&self) -> bool {
        self.0.id.is_some()
    }

    pub fn cancel(mut self) {
        self.0.release();
    }
}

/// Pending delayed callback. Dropping it cancels the callback.
pub struct DelayedCallbackRegistration(Slot);

impl DelayedCallbackRegistration {
    pub fn is_active(&self) -> bool {
        self.0.id.is_some()
    }

    pub fn cancel(mut self) {
        self.0.release();
    }
}
