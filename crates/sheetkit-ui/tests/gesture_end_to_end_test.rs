use sheetkit_testing::robot_assertions::{
    assert_approx_eq, assert_dismissed_once, assert_resting_on_stop,
};
use sheetkit_testing::{create_headless_sheet_robot, SheetRobot};
use sheetkit_ui::{DismissCause, PointerEvent, SheetConfig};

const CONTAINER: f32 = 800.0;

fn mounted_robot() -> SheetRobot {
    let mut robot = create_headless_sheet_robot(CONTAINER, Some(300.0), 600.0);
    robot.mount();
    robot
}

#[test]
fn slow_drag_up_settles_on_expanded_stop() {
    let mut robot = mounted_robot();
    assert_resting_on_stop(&robot, 0);

    assert!(robot.drag(600.0, 300.0));
    assert!(robot.wait_for_idle());
    assert_resting_on_stop(&robot, 1);
    assert_eq!(robot.dismiss_count(), 0);
}

#[test]
fn slow_drag_down_from_expanded_returns_to_short_form() {
    let mut robot = mounted_robot();
    robot.sheet_mut().snap_to(1).unwrap();
    robot.wait_for_idle();

    assert!(robot.drag(300.0, 550.0));
    robot.wait_for_idle();
    assert_resting_on_stop(&robot, 0);
}

#[test]
fn dragging_below_short_form_dismisses() {
    let mut robot = mounted_robot();
    assert!(robot.drag(300.0, 400.0));
    assert_eq!(robot.sheet().dismiss_cause(), Some(DismissCause::PullExtend));
    robot.wait_for_idle();
    assert_dismissed_once(&robot);
}

#[test]
fn fling_down_dismisses_from_expanded_stop() {
    let mut robot = mounted_robot();
    robot.sheet_mut().snap_to(1).unwrap();
    robot.wait_for_idle();

    assert!(robot.fling(100.0, 250.0));
    assert_eq!(robot.sheet().dismiss_cause(), Some(DismissCause::MomentumPull));
    robot.wait_for_idle();
    assert_dismissed_once(&robot);
}

#[test]
fn fling_without_dismissal_snaps_to_short_form() {
    let config = SheetConfig::default()
        .with_dismiss_on_momentum_pull(false)
        .with_dismiss_on_pull_extend(false);
    let mut robot = SheetRobot::new(CONTAINER, Some(300.0), 600.0, config);
    robot.mount();

    robot.fling(100.0, 250.0);
    robot.wait_for_idle();
    assert_resting_on_stop(&robot, 0);
    assert_eq!(robot.dismiss_count(), 0);
}

#[test]
fn pulling_past_expanded_stop_is_elastic() {
    let mut robot = mounted_robot();
    assert!(!robot.press(600.0));
    assert!(robot.move_to(500.0));
    assert_eq!(robot.position(), 400.0);

    // 40px past the expanded stop moves the panel 5px.
    assert!(robot.move_to(260.0));
    assert_approx_eq(robot.position(), 195.0, 1e-3, "elastic overshoot");

    assert!(robot.release());
    robot.wait_for_idle();
    assert_resting_on_stop(&robot, 1);
}

#[test]
fn scrolled_content_keeps_the_touch() {
    let mut robot = mounted_robot();
    robot.scroll_to(40.0);

    assert!(!robot.drag(300.0, 500.0));
    assert!(!robot.drag(500.0, 300.0));
    robot.wait_for_idle();
    assert_eq!(robot.position(), 500.0);
    assert_eq!(robot.dismiss_count(), 0);
}

#[test]
fn only_claimed_pointer_events_are_consumed() {
    let mut robot = mounted_robot();
    let t = robot.now_millis() as i64;

    robot.scroll_to(40.0);
    let sheet = robot.sheet_mut();
    let down = PointerEvent::down(500.0, t);
    let to_content = PointerEvent::moved(520.0, t + 16);
    let lift = PointerEvent::up(520.0, t + 32);
    assert!(!sheet.handle_pointer_event(&down));
    assert!(!sheet.handle_pointer_event(&to_content));
    assert!(!sheet.handle_pointer_event(&lift));
    assert!(!down.is_consumed());
    assert!(!to_content.is_consumed(), "scrolled content keeps its moves");
    assert!(!lift.is_consumed());

    robot.scroll_to(0.0);
    let sheet = robot.sheet_mut();
    let down = PointerEvent::down(500.0, t + 48);
    let pull = PointerEvent::moved(520.0, t + 64);
    let lift = PointerEvent::up(520.0, t + 80);
    assert!(!sheet.handle_pointer_event(&down));
    assert!(sheet.handle_pointer_event(&pull));
    assert!(sheet.handle_pointer_event(&lift));
    assert!(!down.is_consumed());
    assert!(pull.is_consumed());
    assert!(lift.is_consumed());
}

#[test]
fn expanded_sheet_hands_upward_drags_to_content() {
    let mut robot = mounted_robot();
    robot.sheet_mut().snap_to(1).unwrap();
    robot.wait_for_idle();

    assert!(!robot.drag(500.0, 300.0));
    assert_eq!(robot.position(), 200.0);

    // A downward pull at the content's top edge is still the sheet's.
    assert!(robot.drag(300.0, 350.0));
}

#[test]
fn cancelled_touch_settles_on_nearest_stop() {
    let mut robot = mounted_robot();
    robot.press(600.0);
    robot.move_to(580.0);
    robot.move_to(350.0);
    assert_eq!(robot.position(), 250.0);

    assert!(robot.cancel());
    robot.wait_for_idle();
    assert_resting_on_stop(&robot, 1);
    assert_eq!(robot.dismiss_count(), 0);
}

#[test]
fn drag_takes_over_from_mount_animation() {
    let mut robot = create_headless_sheet_robot(CONTAINER, Some(300.0), 600.0);
    robot.sheet_mut().mount();
    robot.advance_time(64);
    assert!(robot.sheet().is_animating());

    robot.press(400.0);
    assert!(robot.move_to(420.0));
    let held = robot.position();
    assert!(!robot.sheet().is_animating());

    robot.advance_time(100);
    assert_eq!(robot.position(), held);

    // Still below the short form, so letting go dismisses.
    robot.release();
    robot.wait_for_idle();
    assert_dismissed_once(&robot);
}
