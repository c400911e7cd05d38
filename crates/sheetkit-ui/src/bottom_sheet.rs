//! The sheet controller.
//!
//! [`BottomSheet`] owns the panel offset and routes every input through the
//! pieces that decide what happens to it: the arbiter decides who owns a
//! touch, the drag integrator moves the panel while a drag is claimed, and the
//! release resolver picks the single outcome when the finger lifts. Outcomes
//! are carried out as animations on the sheet's runtime.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use sheetkit_animation::{Animatable, AnimationSpec, AnimationType};
use sheetkit_core::{DelayedCallbackRegistration, RuntimeHandle, ValueCell, WriterToken};
use sheetkit_foundation::{
    ClaimContext, DragSample, GestureArbiter, PanTracker, PanUpdate, PointerEvent, ScrollState,
};

use crate::config::SheetConfig;
use crate::drag::DragIntegrator;
use crate::error::SheetError;
use crate::presentation;
use crate::release::{auto_snap_index, resolve_release, DismissCause, ReleaseOutcome};
use crate::stops::{SheetForms, Stops};

/// Holds the host's dismiss handler and guarantees it runs at most once per
/// dismiss cycle.
#[derive(Default)]
struct DismissSlot {
    handler: RefCell<Option<Box<dyn FnMut()>>>,
    fired: Cell<bool>,
}

impl DismissSlot {
    fn notify(&self) {
        if self.fired.replace(true) {
            return;
        }
        log::debug!("dismiss notification");
        let handler = self.handler.borrow_mut().take();
        if let Some(mut handler) = handler {
            handler();
            let mut slot = self.handler.borrow_mut();
            if slot.is_none() {
                *slot = Some(handler);
            }
        }
    }
}

pub struct BottomSheet {
    runtime: RuntimeHandle,
    config: SheetConfig,
    container_height: f32,
    forms: SheetForms,
    stops: Stops,
    position: ValueCell<f32>,
    animatable: Animatable,
    arbiter: GestureArbiter,
    drag: DragIntegrator,
    drag_token: Option<WriterToken>,
    pan: PanTracker,
    pan_claimed: bool,
    scroll: ScrollState,
    current_stop: Option<usize>,
    dismiss_slot: Rc<DismissSlot>,
    dismiss_timer: Option<DelayedCallbackRegistration>,
    dismiss_cause: Option<DismissCause>,
}

impl BottomSheet {
    /// Creates a sheet parked just below the container, ready to [`mount`].
    ///
    /// [`mount`]: BottomSheet::mount
    pub fn new(
        runtime: RuntimeHandle,
        config: SheetConfig,
        container_height: f32,
        forms: SheetForms,
    ) -> Self {
        let stops = forms.stops(container_height);
        let initial = container_height + stops.last().unwrap_or(0.0);
        let position = ValueCell::new(initial);
        let animatable = Animatable::new(position.clone(), runtime.clone());
        log::debug!(
            "sheet created: container={container_height:.1} stops={:?}",
            stops.as_slice()
        );
        Self {
            runtime,
            config,
            container_height,
            forms,
            stops,
            position,
            animatable,
            arbiter: GestureArbiter::new(),
            drag: DragIntegrator::new(config.elastic_damping),
            drag_token: None,
            pan: PanTracker::new(),
            pan_claimed: false,
            scroll: ScrollState::default(),
            current_stop: None,
            dismiss_slot: Rc::new(DismissSlot::default()),
            dismiss_timer: None,
            dismiss_cause: None,
        }
    }

    pub fn with_on_dismiss(self, handler: impl FnMut() + 'static) -> Self {
        self.set_on_dismiss(handler);
        self
    }

    pub fn set_on_dismiss(&self, handler: impl FnMut() + 'static) {
        *self.dismiss_slot.handler.borrow_mut() = Some(Box::new(handler));
    }

    /// Slides the panel in to the least expanded stop.
    ///
    /// Mounting again after a dismissal starts a new dismiss cycle.
    pub fn mount(&mut self) {
        if self.dismiss_timer.take().is_some() {
            log::debug!("remounting; previous dismiss cycle discarded");
        }
        self.dismiss_slot.fired.set(false);
        self.dismiss_cause = None;

        if self.stops.is_empty() {
            log::warn!(
                "sheet mounted without stops (container={:.1}); panel stays hidden",
                self.container_height
            );
            return;
        }
        self.animate_to_stop(0);
    }

    // ---------------------------------------------------------------------
    // Gesture phases
    // ---------------------------------------------------------------------

    /// Capture-phase question for a move: should the panel take this touch
    /// away from its content?
    pub fn on_move_should_capture(&mut self, sample: DragSample) -> bool {
        if self.dismiss_in_flight() {
            self.arbiter.on_reject();
            return false;
        }
        let ctx = ClaimContext {
            sample,
            scroll_offset: self.scroll.offset(),
            position: self.position.get(),
            expanded_stop: self.stops.last(),
        };
        let previous = self.arbiter.last_decision();
        let claims = self.arbiter.should_capture(&ctx);
        let decision = self.arbiter.last_decision();
        if decision.map(|d| d.rule) != previous.map(|d| d.rule) {
            log::debug!("claim decision changed: {decision:?}");
        }
        claims
    }

    /// Bubble-phase question; answers from the last capture decision.
    pub fn on_move_should_respond(&self) -> bool {
        !self.dismiss_in_flight() && self.arbiter.should_respond()
    }

    /// Moves the panel for a claimed drag. The first move of a touch takes the
    /// panel offset over from any running animation.
    pub fn on_drag_move(&mut self, sample: DragSample) {
        if self.dismiss_in_flight() {
            return;
        }
        let token = match self.drag_token {
            Some(token) => token,
            None => {
                self.animatable.stop();
                let token = self.position.take_over();
                self.drag_token = Some(token);
                log::debug!("drag started at {:.1}", self.position.get());
                token
            }
        };
        let next = self.drag.on_move(sample.dy, self.position.get(), &self.stops);
        log::trace!("drag dy={:.1} vy={:.3} -> {next:.1}", sample.dy, sample.vy);
        self.position.set(token, next);
    }

    /// Ends the drag and carries out the resolved outcome.
    pub fn on_release(&mut self, sample: DragSample) -> ReleaseOutcome {
        self.end_drag_session();
        if self.dismiss_in_flight() {
            return ReleaseOutcome::Dismiss(self.dismiss_cause.unwrap_or(DismissCause::Imperative));
        }
        let position = self.position.get();
        let outcome = resolve_release(sample, position, &self.stops, &self.config);
        log::debug!(
            "release dy={:.1} vy={:.2} at {position:.1}: {outcome:?}",
            sample.dy,
            sample.vy
        );
        self.apply(outcome);
        outcome
    }

    /// The host refused to hand over the touch.
    pub fn on_reject(&mut self) {
        self.arbiter.on_reject();
    }

    pub fn on_termination_request(&self) -> bool {
        self.arbiter.on_termination_request()
    }

    /// The touch was taken away mid-drag. The panel settles on the nearest
    /// stop instead of staying wherever the finger left it.
    pub fn on_terminate(&mut self) {
        self.arbiter.on_terminate();
        if !self.end_drag_session() || self.dismiss_in_flight() {
            return;
        }
        let position = self.position.get();
        log::debug!("drag terminated at {position:.1}");
        match auto_snap_index(DragSample::default(), position, &self.stops) {
            Some(index) => self.animate_to_stop(index),
            None => self.start_dismiss(DismissCause::NoStops),
        }
    }

    // ---------------------------------------------------------------------
    // Input plumbing
    // ---------------------------------------------------------------------

    /// Feeds a raw pointer event. Returns whether the sheet handled it; handled
    /// events are also marked consumed.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let Some(update) = self.pan.on_event(event) else {
            return false;
        };
        match update {
            PanUpdate::Start => {
                self.pan_claimed = false;
                false
            }
            PanUpdate::Move(sample) => {
                if !self.pan_claimed {
                    if !self.on_move_should_capture(sample) {
                        return false;
                    }
                    self.pan_claimed = true;
                }
                self.on_drag_move(sample);
                event.consume();
                true
            }
            PanUpdate::Release(sample) => {
                if !std::mem::take(&mut self.pan_claimed) {
                    return false;
                }
                self.on_release(sample);
                event.consume();
                true
            }
            PanUpdate::Cancel(_) => {
                if !std::mem::take(&mut self.pan_claimed) {
                    return false;
                }
                self.on_terminate();
                event.consume();
                true
            }
        }
    }

    /// Records the embedded scroll view's offset.
    pub fn on_scroll(&self, offset: f32) {
        self.scroll.on_scroll(offset);
    }

    /// Handle the host's scroll view can write into directly.
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.clone()
    }

    /// A tap landed on the backdrop. Returns whether it dismissed the sheet.
    pub fn on_backdrop_press(&mut self) -> bool {
        if !self.config.dismiss_on_click_outside {
            return false;
        }
        self.start_dismiss(DismissCause::ClickOutside);
        true
    }

    // ---------------------------------------------------------------------
    // Imperative API
    // ---------------------------------------------------------------------

    /// Slides the panel out and notifies the dismiss handler once the
    /// transition has had time to finish. Repeated calls during one cycle
    /// are ignored.
    pub fn dismiss(&mut self) {
        self.start_dismiss(DismissCause::Imperative);
    }

    /// Re-reads the form heights. The panel does not move; the new stops
    /// apply from the next gesture or snap.
    pub fn update_layout(&mut self) {
        let stops = self.forms.stops(self.container_height);
        if stops != self.stops {
            log::debug!(
                "stops updated {:?} -> {:?}",
                self.stops.as_slice(),
                stops.as_slice()
            );
        }
        self.current_stop = match (self.current_stop, stops.last_index()) {
            (Some(current), Some(last_index)) => Some(current.min(last_index)),
            _ => None,
        };
        self.stops = stops;
    }

    pub fn snap_to(&mut self, index: usize) -> Result<(), SheetError> {
        if self.dismiss_in_flight() {
            log::warn!("snap to stop {index} rejected: sheet is dismissing");
            return Err(SheetError::Dismissed);
        }
        if self.stops.is_empty() {
            log::warn!("snap to stop {index} rejected: no stops");
            return Err(SheetError::NoStops);
        }
        if index >= self.stops.len() {
            return Err(SheetError::StopOutOfRange {
                index,
                len: self.stops.len(),
            });
        }
        self.end_drag_session();
        self.animate_to_stop(index);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Readers
    // ---------------------------------------------------------------------

    pub fn position(&self) -> f32 {
        self.position.get()
    }

    /// Shared read handle on the panel offset.
    pub fn position_cell(&self) -> ValueCell<f32> {
        self.position.clone()
    }

    pub fn backdrop_opacity(&self) -> f32 {
        presentation::backdrop_opacity(
            self.position.get(),
            self.container_height,
            &self.stops,
            &self.config,
        )
    }

    pub fn panel_translation(&self) -> f32 {
        presentation::panel_translation(self.position.get(), &self.stops)
    }

    /// Whether the backdrop should intercept pointer input. A backdrop that
    /// cannot dismiss lets touches through to the content beneath.
    pub fn backdrop_accepts_pointer(&self) -> bool {
        self.config.dismiss_on_click_outside
    }

    pub fn stops(&self) -> &Stops {
        &self.stops
    }

    /// Stop the panel last settled on or is heading to.
    pub fn current_stop(&self) -> Option<usize> {
        self.current_stop
    }

    pub fn is_dismissing(&self) -> bool {
        self.dismiss_timer.is_some() && !self.dismiss_slot.fired.get()
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismiss_slot.fired.get()
    }

    pub fn dismiss_cause(&self) -> Option<DismissCause> {
        self.dismiss_cause
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_token.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.animatable.is_running()
    }

    pub fn container_height(&self) -> f32 {
        self.container_height
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn runtime(&self) -> RuntimeHandle {
        self.runtime.clone()
    }

    // ---------------------------------------------------------------------

    fn dismiss_in_flight(&self) -> bool {
        self.dismiss_timer.is_some() || self.dismiss_slot.fired.get()
    }

    /// Returns whether a drag was in progress.
    fn end_drag_session(&mut self) -> bool {
        self.drag.end();
        match self.drag_token.take() {
            Some(token) => {
                self.position.release(token);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, outcome: ReleaseOutcome) {
        match outcome {
            ReleaseOutcome::Dismiss(cause) => self.start_dismiss(cause),
            ReleaseOutcome::Snap(index) => self.animate_to_stop(index),
        }
    }

    fn animate_to_stop(&mut self, index: usize) {
        let Some(target) = self.stops.get(index) else {
            log::warn!("no stop at index {index}");
            return;
        };
        log::debug!("snapping to stop {index} ({target:.1})");
        self.current_stop = Some(index);
        self.animatable
            .animate_to(target, AnimationType::Spring(self.config.snap_spring));
    }

    fn start_dismiss(&mut self, cause: DismissCause) {
        if self.dismiss_in_flight() {
            log::debug!("dismiss ({cause:?}) ignored; cycle already started");
            return;
        }
        self.end_drag_session();
        self.dismiss_cause = Some(cause);
        let duration = self.config.dismiss_duration_millis;
        log::debug!("dismissing ({cause:?}) over {duration}ms");

        self.animatable.animate_to(
            self.container_height,
            AnimationType::Tween(AnimationSpec::linear(duration)),
        );
        let slot = Rc::downgrade(&self.dismiss_slot);
        let registration = self.runtime.frame_clock().after_millis(duration, move || {
            if let Some(slot) = slot.upgrade() {
                slot.notify();
            }
        });
        if !registration.is_active() {
            log::warn!("runtime gone; dismissing without animation");
            self.animatable.snap_to(self.container_height);
            self.dismiss_slot.notify();
            return;
        }
        self.dismiss_timer = Some(registration);
    }
}

#[cfg(test)]
#[path = "tests/bottom_sheet_tests.rs"]
mod tests;
