use sheetkit_testing::create_headless_sheet_robot;
use sheetkit_testing::robot_assertions::assert_resting_on_stop;

#[test]
fn content_growth_moves_expanded_stop() {
    let mut robot = create_headless_sheet_robot(800.0, Some(300.0), 600.0);
    robot.mount();
    assert_eq!(robot.sheet().stops().as_slice(), &[500.0, 200.0]);

    assert!(robot.layout_content(700.0));
    assert_eq!(robot.long_form_height(), 700.0);
    assert_eq!(robot.sheet().stops().as_slice(), &[500.0, 100.0]);

    robot.sheet_mut().snap_to(1).unwrap();
    robot.wait_for_idle();
    assert_resting_on_stop(&robot, 1);
    assert_eq!(robot.position(), 100.0);
}

#[test]
fn repeated_layout_pass_is_ignored() {
    let mut robot = create_headless_sheet_robot(800.0, Some(300.0), 600.0);
    robot.mount();

    assert!(robot.layout_content(650.0));
    assert!(!robot.layout_content(650.0));
    assert_eq!(robot.sheet().stops().as_slice(), &[500.0, 150.0]);

    robot.sheet_mut().update_layout();
    assert_eq!(robot.sheet().stops().as_slice(), &[500.0, 150.0]);
    assert_resting_on_stop(&robot, 0);
}

#[test]
fn full_height_content_drops_its_stop() {
    let mut robot = create_headless_sheet_robot(800.0, Some(300.0), 600.0);
    robot.mount();
    robot.sheet_mut().snap_to(1).unwrap();
    robot.wait_for_idle();

    robot.layout_content(800.0);
    assert_eq!(robot.sheet().stops().as_slice(), &[500.0]);
    assert_eq!(robot.sheet().current_stop(), Some(0));
}
