use super::*;

use sheetkit_core::{millis_to_nanos, Runtime};

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

/// Drains frames until the animation stops asking for them. Returns the
/// number of frames drained.
fn pump(runtime: &Runtime, frame_time: &mut u64, max_frames: usize) -> usize {
    let handle = runtime.handle();
    let mut frames = 0;
    while frames < max_frames && handle.has_frame_callbacks() {
        *frame_time += FRAME_NANOS;
        handle.drain_frame_callbacks(*frame_time);
        frames += 1;
    }
    frames
}

#[test]
fn tween_interpolates_over_time_and_lands_on_target() {
    let runtime = Runtime::headless();
    let cell = ValueCell::new(0.0f32);
    let animatable = Animatable::new(cell.clone(), runtime.handle());

    animatable.animate_to(100.0, AnimationType::Tween(AnimationSpec::linear(300)));
    assert!(animatable.is_running());
    assert_eq!(cell.get(), 0.0, "nothing moves until a frame is drained");

    let handle = runtime.handle();
    handle.drain_frame_callbacks(millis_to_nanos(1_000));
    assert_eq!(cell.get(), 0.0);

    handle.drain_frame_callbacks(millis_to_nanos(1_150));
    assert!((cell.get() - 50.0).abs() < 0.01, "got {}", cell.get());

    handle.drain_frame_callbacks(millis_to_nanos(1_300));
    assert_eq!(cell.get(), 100.0);
    assert!(!animatable.is_running());
    assert!(!handle.has_frame_callbacks());
}

#[test]
fn spring_settles_exactly_on_target() {
    let runtime = Runtime::headless();
    let cell = ValueCell::new(800.0f32);
    let animatable = Animatable::new(cell.clone(), runtime.handle());

    animatable.animate_to(200.0, AnimationType::Spring(SpringSpec::sheet_snap()));
    let mut frame_time = 0;
    let frames = pump(&runtime, &mut frame_time, 600);

    assert!(frames < 600, "spring should come to rest");
    assert_eq!(cell.get(), 200.0);
    assert!(!animatable.is_running());
}

#[test]
fn spring_moves_towards_target_on_second_frame() {
    let runtime = Runtime::headless();
    let cell = ValueCell::new(0.0f32);
    let animatable = Animatable::new(cell.clone(), runtime.handle());
    animatable.animate_to(100.0, AnimationType::Spring(SpringSpec::default()));

    let handle = runtime.handle();
    handle.drain_frame_callbacks(0);
    assert_eq!(cell.get(), 0.0);
    handle.drain_frame_callbacks(FRAME_NANOS);
    let value = cell.get();
    assert!(value > 0.0 && value < 100.0, "got {value}");
}

#[test]
fn new_writer_supersedes_running_animation() {
    let runtime = Runtime::headless();
    let cell = ValueCell::new(0.0f32);
    let animatable = Animatable::new(cell.clone(), runtime.handle());
    animatable.animate_to(100.0, AnimationType::Tween(AnimationSpec::linear(300)));

    let handle = runtime.handle();
    handle.drain_frame_callbacks(0);
    handle.drain_frame_callbacks(millis_to_nanos(100));

    let drag = cell.take_over();
    assert!(cell.set(drag, -20.0));
    assert!(!animatable.is_running());

    handle.drain_frame_callbacks(millis_to_nanos(200));
    assert_eq!(cell.get(), -20.0, "stale animation frames must not write");
    assert!(!handle.has_frame_callbacks());
}

#[test]
fn snap_to_writes_immediately() {
    let runtime = Runtime::headless();
    let cell = ValueCell::new(3.0f32);
    let animatable = Animatable::new(cell.clone(), runtime.handle());
    animatable.animate_to(100.0, AnimationType::default());
    animatable.snap_to(42.0);

    assert_eq!(cell.get(), 42.0);
    assert!(!animatable.is_running());
    assert!(!runtime.handle().has_frame_callbacks());
}

#[test]
fn stop_leaves_value_in_place() {
    let runtime = Runtime::headless();
    let cell = ValueCell::new(0.0f32);
    let animatable = Animatable::new(cell.clone(), runtime.handle());
    animatable.animate_to(100.0, AnimationType::Tween(AnimationSpec::linear(100)));
    let handle = runtime.handle();
    handle.drain_frame_callbacks(0);
    handle.drain_frame_callbacks(millis_to_nanos(50));
    animatable.stop();

    let before = cell.get();
    handle.drain_frame_callbacks(millis_to_nanos(100));
    assert_eq!(cell.get(), before);
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
    assert_eq!(Easing::LinearEasing.transform(1.5), 1.0);
    assert_eq!(Easing::LinearEasing.transform(-0.5), 0.0);
}

#[test]
fn sheet_snap_spring_uses_half_mass() {
    let spec = SpringSpec::sheet_snap();
    assert_eq!(spec.mass, 0.5);
    assert!((spec.damping_coefficient() - 10.0).abs() < 1e-3);
    assert!(spec.damping_ratio < 1.0);
}

#[test]
fn animation_spec_default_is_the_dismiss_tween() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, DISMISS_DURATION_MILLIS);
    assert_eq!(spec.easing, Easing::LinearEasing);
}
