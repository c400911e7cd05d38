//! Robot-style driver for a headless sheet.
//!
//! A [`SheetRobot`] owns a runtime, one [`BottomSheet`] and a virtual clock.
//! Pointer timestamps and frame times come from the same clock, so a scripted
//! gesture produces the same velocities and animation progress on every run.
//!
//! # Example
//!
//! ```
//! use sheetkit_testing::create_headless_sheet_robot;
//!
//! let mut robot = create_headless_sheet_robot(800.0, Some(300.0), 600.0);
//! robot.mount();
//! assert_eq!(robot.position(), 500.0);
//!
//! // Fling the panel down and off the screen.
//! robot.fling(100.0, 250.0);
//! robot.wait_for_idle();
//! assert_eq!(robot.dismiss_count(), 1);
//! ```

use std::cell::Cell;
use std::rc::Rc;

use sheetkit_core::{millis_to_nanos, Runtime};
use sheetkit_foundation::PointerEvent;
use sheetkit_ui::{BottomSheet, LayoutBounds, LayoutObserver, SheetConfig, SheetForms};

/// Frame interval used when advancing time.
pub const FRAME_MILLIS: u64 = 16;

/// Finger speed of [`SheetRobot::drag`], in px/ms. Well below the fling
/// threshold.
pub const DRAG_SPEED: f32 = 0.5;

/// Duration of [`SheetRobot::fling`].
pub const FLING_MILLIS: u64 = 48;

/// Upper bound on frames pumped by [`SheetRobot::wait_for_idle`].
const MAX_IDLE_FRAMES: usize = 10_000;

pub struct SheetRobot {
    runtime: Runtime,
    sheet: BottomSheet,
    now_millis: u64,
    long_height: Rc<Cell<f32>>,
    layout: LayoutObserver,
    dismiss_count: Rc<Cell<u32>>,
    finger_y: Option<f32>,
}

/// Robot for a sheet with default configuration.
pub fn create_headless_sheet_robot(
    container_height: f32,
    short_height: Option<f32>,
    long_height: f32,
) -> SheetRobot {
    SheetRobot::new(
        container_height,
        short_height,
        long_height,
        SheetConfig::default(),
    )
}

impl SheetRobot {
    pub fn new(
        container_height: f32,
        short_height: Option<f32>,
        long_height: f32,
        config: SheetConfig,
    ) -> Self {
        let runtime = Runtime::headless();
        let long_cell = Rc::new(Cell::new(long_height));
        let mut forms = SheetForms::long({
            let long_cell = long_cell.clone();
            move || long_cell.get()
        });
        if let Some(short_height) = short_height {
            forms = forms.with_short(move || short_height);
        }

        let dismiss_count = Rc::new(Cell::new(0));
        let sheet = BottomSheet::new(runtime.handle(), config, container_height, forms)
            .with_on_dismiss({
                let dismiss_count = dismiss_count.clone();
                move || dismiss_count.set(dismiss_count.get() + 1)
            });

        let layout = LayoutObserver::new({
            let long_cell = long_cell.clone();
            move |bounds: LayoutBounds| long_cell.set(bounds.height)
        });

        Self {
            runtime,
            sheet,
            now_millis: 0,
            long_height: long_cell,
            layout,
            dismiss_count,
            finger_y: None,
        }
    }

    /// Mount the sheet and let the slide-in settle.
    pub fn mount(&mut self) {
        self.sheet.mount();
        self.wait_for_idle();
    }

    pub fn sheet(&self) -> &BottomSheet {
        &self.sheet
    }

    pub fn sheet_mut(&mut self) -> &mut BottomSheet {
        &mut self.sheet
    }

    pub fn position(&self) -> f32 {
        self.sheet.position()
    }

    pub fn dismiss_count(&self) -> u32 {
        self.dismiss_count.get()
    }

    pub fn now_millis(&self) -> u64 {
        self.now_millis
    }

    /// Advance the clock by `millis`, draining one frame per frame interval.
    pub fn advance_time(&mut self, millis: u64) {
        let mut remaining = millis;
        while remaining > 0 {
            let step = remaining.min(FRAME_MILLIS);
            self.step(step);
            remaining -= step;
        }
    }

    /// Pump frames until nothing is pending. Returns false if the runtime was
    /// still busy after the frame budget ran out.
    pub fn wait_for_idle(&mut self) -> bool {
        for _ in 0..MAX_IDLE_FRAMES {
            if !self.runtime.handle().needs_frame() {
                return true;
            }
            self.step(FRAME_MILLIS);
        }
        log::warn!("robot gave up waiting for idle at {}ms", self.now_millis);
        false
    }

    // ---------------------------------------------------------------------
    // Pointer input
    // ---------------------------------------------------------------------

    /// Put a finger down at `y`. Returns whether the sheet handled the event.
    pub fn press(&mut self, y: f32) -> bool {
        self.finger_y = Some(y);
        let event = PointerEvent::down(y, self.uptime());
        self.sheet.handle_pointer_event(&event)
    }

    /// Move the finger to `y` after one frame.
    pub fn move_to(&mut self, y: f32) -> bool {
        self.move_after(y, FRAME_MILLIS)
    }

    /// Lift the finger where it is, at the current instant.
    pub fn release(&mut self) -> bool {
        let Some(y) = self.finger_y.take() else {
            return false;
        };
        let event = PointerEvent::up(y, self.uptime());
        self.sheet.handle_pointer_event(&event)
    }

    /// The platform cancels the touch.
    pub fn cancel(&mut self) -> bool {
        let Some(y) = self.finger_y.take() else {
            return false;
        };
        let event = PointerEvent::cancel(y, self.uptime());
        self.sheet.handle_pointer_event(&event)
    }

    /// Unhurried drag from `from_y` to `to_y` followed by a release.
    ///
    /// Returns whether the sheet handled the release.
    pub fn drag(&mut self, from_y: f32, to_y: f32) -> bool {
        let millis = ((to_y - from_y).abs() / DRAG_SPEED).ceil() as u64;
        self.swipe(from_y, to_y, millis.max(FRAME_MILLIS))
    }

    /// Quick swipe from `from_y` to `to_y` followed by a release.
    pub fn fling(&mut self, from_y: f32, to_y: f32) -> bool {
        self.swipe(from_y, to_y, FLING_MILLIS)
    }

    /// Swipe over `duration_millis` in frame-sized steps, then release.
    pub fn swipe(&mut self, from_y: f32, to_y: f32, duration_millis: u64) -> bool {
        self.press(from_y);
        let steps = (duration_millis / FRAME_MILLIS).max(1);
        let interval = duration_millis / steps;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.move_after(from_y + (to_y - from_y) * t, interval);
        }
        self.release()
    }

    // ---------------------------------------------------------------------
    // Other host input
    // ---------------------------------------------------------------------

    pub fn scroll_to(&mut self, offset: f32) {
        self.sheet.on_scroll(offset);
    }

    pub fn tap_backdrop(&mut self) -> bool {
        self.sheet.on_backdrop_press()
    }

    /// Report a layout pass of the long form's content. A changed height is
    /// forwarded to the sheet as a layout update.
    pub fn layout_content(&mut self, height: f32) -> bool {
        let changed = self.layout.on_layout(LayoutBounds {
            height,
            ..LayoutBounds::default()
        });
        if changed {
            self.sheet.update_layout();
        }
        changed
    }

    pub fn long_form_height(&self) -> f32 {
        self.long_height.get()
    }

    // ---------------------------------------------------------------------

    fn move_after(&mut self, y: f32, millis: u64) -> bool {
        self.step(millis);
        self.finger_y = Some(y);
        let event = PointerEvent::moved(y, self.uptime());
        self.sheet.handle_pointer_event(&event)
    }

    fn step(&mut self, millis: u64) {
        self.now_millis += millis;
        self.runtime
            .handle()
            .drain_frame_callbacks(millis_to_nanos(self.now_millis));
    }

    fn uptime(&self) -> i64 {
        self.now_millis as i64
    }
}
