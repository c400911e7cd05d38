use crate::platform::{NoopScheduler, RuntimeScheduler};
use crate::{DelayedCallbackId, FrameCallbackId, FrameClock};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::sync::Arc;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

/// A callback waiting for a fixed span of frame time.
///
/// The countdown is anchored on the first frame drained after registration,
/// which is the same frame that starts any animation launched alongside it.
struct DelayedCallbackEntry {
    id: DelayedCallbackId,
    delay_nanos: u64,
    deadline_nanos: Option<u64>,
    callback: Option<Box<dyn FnOnce() + 'static>>,
}

struct RuntimeInner {
    scheduler: Arc<dyn RuntimeScheduler>,
    needs_frame: Cell<bool>,
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    delayed_callbacks: RefCell<SmallVec<[DelayedCallbackEntry; 2]>>,
    next_callback_id: Cell<u64>,
}

impl RuntimeInner {
    fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            scheduler,
            needs_frame: Cell::new(false),
            frame_callbacks: RefCell::new(VecDeque::new()),
            delayed_callbacks: RefCell::new(SmallVec::new()),
            next_callback_id: Cell::new(1),
        }
    }

    fn next_id(&self) -> u64 {
        let id = self.next_callback_id.get();
        self.next_callback_id.set(id + 1);
        id
    }

    fn schedule(&self) {
        if !self.needs_frame.replace(true) {
            self.scheduler.schedule_frame();
        }
    }

    fn has_frame_callbacks(&self) -> bool {
        !self.frame_callbacks.borrow().is_empty()
    }

    fn has_delayed_callbacks(&self) -> bool {
        !self.delayed_callbacks.borrow().is_empty()
    }

    fn register_frame_callback(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> FrameCallbackId {
        let id = self.next_id();
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
        self.schedule();
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
        drop(callbacks);
        self.settle_needs_frame();
    }

    fn register_delayed_callback(
        &self,
        delay_nanos: u64,
        callback: Box<dyn FnOnce() + 'static>,
    ) -> DelayedCallbackId {
        let id = self.next_id();
        self.delayed_callbacks
            .borrow_mut()
            .push(DelayedCallbackEntry {
                id,
                delay_nanos,
                deadline_nanos: None,
                callback: Some(callback),
            });
        self.schedule();
        id
    }

    fn cancel_delayed_callback(&self, id: DelayedCallbackId) {
        let mut delayed = self.delayed_callbacks.borrow_mut();
        if let Some(index) = delayed.iter().position(|entry| entry.id == id) {
            delayed.remove(index);
            log::trace!("cancelled delayed callback {id}");
        }
        drop(delayed);
        self.settle_needs_frame();
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        let mut pending: Vec<Box<dyn FnOnce(u64) + 'static>> = Vec::with_capacity(callbacks.len());
        while let Some(mut entry) = callbacks.pop_front() {
            if let Some(callback) = entry.callback.take() {
                pending.push(callback);
            }
        }
        drop(callbacks);
        for callback in pending {
            callback(frame_time_nanos);
        }

        // Frame callbacks run first so a transition ending on this frame has
        // written its final value before a timer waiting on it fires.
        let mut due: SmallVec<[Box<dyn FnOnce() + 'static>; 2]> = SmallVec::new();
        {
            let mut delayed = self.delayed_callbacks.borrow_mut();
            for entry in delayed.iter_mut() {
                let deadline = *entry
                    .deadline_nanos
                    .get_or_insert(frame_time_nanos.saturating_add(entry.delay_nanos));
                if deadline <= frame_time_nanos {
                    if let Some(callback) = entry.callback.take() {
                        due.push(callback);
                    }
                }
            }
            delayed.retain(|entry| entry.callback.is_some());
        }
        for callback in due {
            callback();
        }

        self.settle_needs_frame();
    }

    fn settle_needs_frame(&self) {
        let frame_pending = self
            .frame_callbacks
            .try_borrow()
            .map(|callbacks| !callbacks.is_empty())
            .unwrap_or(true);
        let delayed_pending = self
            .delayed_callbacks
            .try_borrow()
            .map(|delayed| !delayed.is_empty())
            .unwrap_or(true);
        if !frame_pending && !delayed_pending {
            self.needs_frame.set(false);
        }
    }
}

/// Owner of the runtime state. Dropping it turns every handle into a no-op.
#[derive(Clone)]
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(scheduler)),
        }
    }

    /// Runtime for hosts that pump frames themselves (tests, scripted demos).
    pub fn headless() -> Self {
        Self::new(Arc::new(NoopScheduler))
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::headless()
    }
}

#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn schedule(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.schedule();
        }
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    /// Queue `callback` to run once `delay_nanos` of frame time has elapsed.
    pub fn register_delayed_callback(
        &self,
        delay_nanos: u64,
        callback: impl FnOnce() + 'static,
    ) -> Option<DelayedCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_delayed_callback(delay_nanos, Box::new(callback)))
    }

    pub fn cancel_delayed_callback(&self, id: DelayedCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_delayed_callback(id);
        }
    }

    /// Run every queued frame callback, then every delayed callback whose
    /// deadline has been reached at `frame_time_nanos`.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain_frame_callbacks(frame_time_nanos);
        }
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }

    pub fn needs_frame(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.needs_frame.get())
            .unwrap_or(false)
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_frame_callbacks())
            .unwrap_or(false)
    }

    pub fn has_delayed_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_delayed_callbacks())
            .unwrap_or(false)
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
