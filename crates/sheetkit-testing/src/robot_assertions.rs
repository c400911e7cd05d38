//! Assertion helpers for robot tests.

use crate::robot::SheetRobot;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{msg}: expected {expected} (±{tolerance}), got {actual} (diff: {diff})"
    );
}

/// Assert that the panel rests exactly on stop `index`.
pub fn assert_resting_on_stop(robot: &SheetRobot, index: usize) {
    let sheet = robot.sheet();
    let Some(stop) = sheet.stops().get(index) else {
        panic!("no stop {index}; stops are {:?}", sheet.stops().as_slice());
    };
    assert!(
        !sheet.is_animating() && !sheet.is_dragging(),
        "panel still moving at {}",
        sheet.position()
    );
    assert_eq!(sheet.position(), stop, "panel not on stop {index}");
    assert_eq!(sheet.current_stop(), Some(index));
}

/// Assert that the sheet slid out and its host was told exactly once.
pub fn assert_dismissed_once(robot: &SheetRobot) {
    let sheet = robot.sheet();
    assert_eq!(robot.dismiss_count(), 1, "dismiss notifications");
    assert!(sheet.is_dismissed());
    assert_eq!(sheet.position(), sheet.container_height());
}
