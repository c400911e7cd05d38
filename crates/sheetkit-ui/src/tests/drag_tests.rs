use super::*;

fn two_stops() -> Stops {
    Stops::from_offsets([500.0, 200.0])
}

#[test]
fn drag_within_range_follows_finger() {
    let stops = two_stops();
    let mut drag = DragIntegrator::default();
    assert_eq!(drag.on_move(10.0, 500.0, &stops), 510.0);
    // Baseline is fixed by the first move.
    assert_eq!(drag.on_move(-100.0, 510.0, &stops), 400.0);
    assert_eq!(drag.baseline(), Some(500.0));
}

#[test]
fn overshoot_from_expanded_stop_is_damped() {
    let stops = two_stops();
    let mut drag = DragIntegrator::default();
    assert_eq!(drag.on_move(-40.0, 200.0, &stops), 195.0);
    assert_eq!(drag.on_move(-80.0, 195.0, &stops), 190.0);
}

#[test]
fn overshoot_from_lower_stop_damps_only_the_excess() {
    let stops = two_stops();
    let mut drag = DragIntegrator::default();
    // 500 - 340 = 160, which is 40 past the expanded stop.
    assert_eq!(drag.on_move(-340.0, 500.0, &stops), 195.0);
}

#[test]
fn end_clears_baseline() {
    let stops = two_stops();
    let mut drag = DragIntegrator::default();
    drag.on_move(20.0, 500.0, &stops);
    assert!(drag.is_active());
    drag.end();
    assert!(!drag.is_active());
    assert_eq!(drag.on_move(20.0, 300.0, &stops), 320.0);
}

#[test]
fn without_stops_candidate_is_used() {
    let mut drag = DragIntegrator::default();
    assert_eq!(drag.on_move(-900.0, 800.0, &Stops::default()), -100.0);
}

#[test]
fn damping_below_one_is_raised() {
    let stops = two_stops();
    let mut drag = DragIntegrator::new(0.25);
    assert_eq!(drag.on_move(-40.0, 200.0, &stops), 160.0);
}
