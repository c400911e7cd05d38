//! Drives a sheet through a scripted session on the wall clock and prints what
//! a renderer would draw.
//!
//! Run with `RUST_LOG=debug` to watch the state machine's transitions.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use sheetkit_core::{Clock, Runtime, RuntimeHandle, RuntimeScheduler, WebTimeClock};
use sheetkit_foundation::PointerEvent;
use sheetkit_ui::{BottomSheet, SheetConfig, SheetForms};

const CONTAINER_HEIGHT: f32 = 800.0;
const FRAME: Duration = Duration::from_millis(16);

/// Remembers that the runtime asked for a frame until the loop picks it up.
#[derive(Default)]
struct FrameRequest {
    requested: AtomicBool,
}

impl RuntimeScheduler for FrameRequest {
    fn schedule_frame(&self) {
        self.requested.store(true, Ordering::Release);
    }
}

struct Session {
    runtime: RuntimeHandle,
    request: Arc<FrameRequest>,
    clock: WebTimeClock,
    sheet: BottomSheet,
}

impl Session {
    /// Render frames until the runtime stops asking for them.
    fn run_frames(&mut self, label: &str) {
        let started = self.clock.now();
        let mut frames = 0u32;
        while self.request.requested.swap(false, Ordering::AcqRel) || self.runtime.needs_frame() {
            std::thread::sleep(FRAME);
            self.runtime
                .drain_frame_callbacks(self.clock.frame_time_nanos());
            frames += 1;
            log::trace!(
                "frame {frames}: translation={:.1} opacity={:.2}",
                self.sheet.panel_translation(),
                self.sheet.backdrop_opacity()
            );
        }
        println!(
            "{label:<28} {frames:>3} frames {:>4}ms  translation={:>6.1} opacity={:.2} stop={:?}",
            self.clock.elapsed_millis(started),
            self.sheet.panel_translation(),
            self.sheet.backdrop_opacity(),
            self.sheet.current_stop(),
        );
    }

    /// Feed a finger swipe at roughly real-time pace.
    fn swipe(&mut self, from_y: f32, to_y: f32, steps: u32) {
        let uptime = |clock: &WebTimeClock| (clock.frame_time_nanos() / 1_000_000) as i64;
        self.sheet
            .handle_pointer_event(&PointerEvent::down(from_y, uptime(&self.clock)));
        let mut y = from_y;
        for step in 1..=steps {
            std::thread::sleep(FRAME);
            y = from_y + (to_y - from_y) * step as f32 / steps as f32;
            self.sheet
                .handle_pointer_event(&PointerEvent::moved(y, uptime(&self.clock)));
        }
        self.sheet
            .handle_pointer_event(&PointerEvent::up(y, uptime(&self.clock)));
    }
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== SheetKit bottom sheet demo ===");
    println!("container {CONTAINER_HEIGHT}px, short form 300px, long form 600px");
    println!();

    let request = Arc::new(FrameRequest::default());
    let runtime = Runtime::new(request.clone());
    let dismissed = Rc::new(Cell::new(0u32));
    let sheet = BottomSheet::new(
        runtime.handle(),
        SheetConfig::default(),
        CONTAINER_HEIGHT,
        SheetForms::long(|| 600.0).with_short(|| 300.0),
    )
    .with_on_dismiss({
        let dismissed = dismissed.clone();
        move || {
            dismissed.set(dismissed.get() + 1);
            log::info!("host notified: sheet dismissed");
        }
    });

    let mut session = Session {
        runtime: runtime.handle(),
        request,
        clock: WebTimeClock::new(),
        sheet,
    };

    session.sheet.mount();
    session.run_frames("mount");

    session.swipe(600.0, 320.0, 30);
    session.run_frames("slow drag up");

    session.sheet.on_scroll(120.0);
    session.swipe(300.0, 500.0, 12);
    session.run_frames("drag over scrolled content");
    session.sheet.on_scroll(0.0);

    session
        .sheet
        .snap_to(0)
        .context("snapping back to the short form")?;
    session.run_frames("snap to short form");

    session.swipe(300.0, 480.0, 3);
    session.run_frames("fling down");

    ensure!(
        dismissed.get() == 1,
        "expected one dismiss notification, got {}",
        dismissed.get()
    );
    println!();
    println!("dismissed after {} notification(s)", dismissed.get());
    Ok(())
}
