use super::*;

const CONTAINER: f32 = 800.0;

fn two_stops() -> Stops {
    Stops::from_offsets([500.0, 200.0])
}

fn approx(actual: f32, expected: f32) {
    assert!((actual - expected).abs() < 1e-4, "{actual} != {expected}");
}

#[test]
fn interpolate_handles_reversed_ranges() {
    approx(
        interpolate(700.0, (800.0, 600.0), (0.0, 0.9), Extrapolation::Clamp),
        0.45,
    );
    approx(
        interpolate(100.0, (800.0, 600.0), (0.0, 0.9), Extrapolation::Clamp),
        0.9,
    );
    approx(
        interpolate(900.0, (800.0, 600.0), (0.0, 0.9), Extrapolation::Clamp),
        0.0,
    );
}

#[test]
fn interpolate_extends_past_both_ends() {
    approx(
        interpolate(0.0, (100.0, 200.0), (10.0, 20.0), Extrapolation::Extend),
        0.0,
    );
    approx(
        interpolate(300.0, (100.0, 200.0), (10.0, 20.0), Extrapolation::Extend),
        30.0,
    );
}

#[test]
fn degenerate_range_maps_to_first_output() {
    assert_eq!(
        interpolate(5.0, (1.0, 1.0), (3.0, 4.0), Extrapolation::Extend),
        3.0
    );
}

#[test]
fn backdrop_fades_in_as_panel_rises() {
    let stops = two_stops();
    let config = SheetConfig::default();
    approx(backdrop_opacity(CONTAINER, CONTAINER, &stops, &config), 0.0);
    approx(backdrop_opacity(700.0, CONTAINER, &stops, &config), 0.45);
    approx(backdrop_opacity(600.0, CONTAINER, &stops, &config), 0.9);
    approx(backdrop_opacity(200.0, CONTAINER, &stops, &config), 0.9);
    approx(backdrop_opacity(1_000.0, CONTAINER, &stops, &config), 0.0);
}

#[test]
fn backdrop_override_is_verbatim() {
    let config = SheetConfig::default().with_background_opacity(0.3);
    assert_eq!(backdrop_opacity(CONTAINER, CONTAINER, &two_stops(), &config), 0.3);
}

#[test]
fn backdrop_without_stops_is_transparent() {
    let config = SheetConfig::default();
    assert_eq!(backdrop_opacity(400.0, CONTAINER, &Stops::default(), &config), 0.0);
}

#[test]
fn translation_is_identity() {
    let stops = two_stops();
    for position in [150.0, 200.0, 350.0, 500.0, 800.0] {
        approx(panel_translation(position, &stops), position);
    }
    let single = Stops::from_offsets([200.0]);
    assert_eq!(panel_translation(612.5, &single), 612.5);
    assert_eq!(panel_translation(612.5, &Stops::default()), 612.5);
}
