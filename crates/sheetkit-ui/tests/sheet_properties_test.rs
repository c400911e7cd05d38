//! Property tests for the pure parts of the sheet's state machine.

use proptest::prelude::*;
use sheetkit_foundation::{decide_claim, ClaimContext};
use sheetkit_ui::{
    resolve_release, DismissCause, DragIntegrator, DragSample, ReleaseOutcome, SheetConfig, Stops,
};

fn container_and_forms() -> impl Strategy<Value = (f32, Option<f32>, f32)> {
    (100.0f32..2_000.0).prop_flat_map(|container| {
        (0.0f32..=container).prop_flat_map(move |long| {
            (
                Just(container),
                proptest::option::of(0.0f32..=long),
                Just(long),
            )
        })
    })
}

proptest! {
    #[test]
    fn stop_count_matches_present_forms((container, short, long) in container_and_forms()) {
        let stops = Stops::compute(short, Some(long), container);
        let expected = [short, Some(long)]
            .into_iter()
            .flatten()
            .filter(|height| container - height != 0.0)
            .count();
        prop_assert_eq!(stops.len(), expected);
        if let (Some(first), Some(last)) = (stops.first(), stops.last()) {
            prop_assert!(last <= first);
        }
    }

    #[test]
    fn overshoot_from_expanded_stop_is_divided_by_eight(
        last in 50.0f32..700.0,
        dy in -500.0f32..-0.01,
    ) {
        let stops = Stops::from_offsets([last + 300.0, last]);
        let mut drag = DragIntegrator::default();
        let position = drag.on_move(dy, last, &stops);
        prop_assert!((position - (last + dy / 8.0)).abs() < 1e-3);
    }

    #[test]
    fn momentum_release_always_dismisses(
        position in -200.0f32..1_200.0,
        dy in 0.01f32..600.0,
        vy in 2.01f32..40.0,
    ) {
        let stops = Stops::from_offsets([500.0, 200.0]);
        let outcome = resolve_release(DragSample::new(dy, vy), position, &stops, &SheetConfig::default());
        prop_assert_eq!(outcome, ReleaseOutcome::Dismiss(DismissCause::MomentumPull));
    }

    #[test]
    fn pull_up_on_single_stop_snaps_to_it(
        stop in 50.0f32..700.0,
        above in 0.0f32..300.0,
        dy in -600.0f32..-0.01,
        vy in -40.0f32..-2.01,
    ) {
        let stops = Stops::from_offsets([stop]);
        let outcome = resolve_release(DragSample::new(dy, vy), stop - above, &stops, &SheetConfig::default());
        prop_assert_eq!(outcome, ReleaseOutcome::Snap(stops.len() - 1));
    }

    #[test]
    fn scrolled_content_never_yields_the_touch(
        scroll in prop_oneof![-1_000.0f32..-0.01, 0.01f32..1_000.0],
        dy in prop_oneof![-500.0f32..-0.01, 0.01f32..500.0],
        vy in -20.0f32..20.0,
        position in -100.0f32..1_000.0,
    ) {
        let decision = decide_claim(&ClaimContext {
            sample: DragSample::new(dy, vy),
            scroll_offset: scroll,
            position,
            expanded_stop: Some(200.0),
        });
        prop_assert!(!decision.claims);
    }
}
