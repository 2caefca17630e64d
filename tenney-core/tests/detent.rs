use proptest::prelude::*;
use tenney_core::detent::{
    nearest_detent, nearest_detent_index, GRID_STRENGTH_DETENTS, HEADROOM_DETENTS,
    LABEL_DENSITY_DETENTS,
};

#[test]
fn documented_examples() {
    assert_eq!(nearest_detent(0.20, &[0.10, 0.25, 0.40, 0.65, 0.85, 1.0]), 0.25);
    assert_eq!(nearest_detent(0.50, &[0.12, 0.18, 0.24, 0.30, 0.36]), 0.36);
}

#[test]
fn empty_detent_list_is_a_no_op() {
    for value in [-3.0, 0.0, 0.5, 42.0] {
        assert_eq!(nearest_detent(value, &[]), value);
    }
}

fn ascending_detents() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-10.0f64..10.0, 1..12).prop_map(|mut v| {
        v.sort_by(f64::total_cmp);
        v
    })
}

proptest! {
    #[test]
    fn result_is_one_of_the_detents(value in -20.0f64..20.0, detents in ascending_detents()) {
        let snapped = nearest_detent(value, &detents);
        prop_assert!(detents.contains(&snapped));
    }

    #[test]
    fn snapping_is_idempotent(value in -20.0f64..20.0, detents in ascending_detents()) {
        let once = nearest_detent(value, &detents);
        prop_assert_eq!(nearest_detent(once, &detents), once);
    }

    #[test]
    fn no_detent_is_strictly_closer(value in -20.0f64..20.0, detents in ascending_detents()) {
        let snapped = nearest_detent(value, &detents);
        let best = (snapped - value).abs();
        for d in &detents {
            prop_assert!((d - value).abs() >= best);
        }
    }

    #[test]
    fn first_minimal_detent_wins(value in -20.0f64..20.0, detents in ascending_detents()) {
        let index = nearest_detent_index(value, &detents).unwrap();
        let best = (detents[index] - value).abs();
        for d in &detents[..index] {
            prop_assert!((d - value).abs() > best);
        }
    }

    #[test]
    fn shipped_sets_snap_into_range(value in -1.0f64..2.0) {
        for set in [&LABEL_DENSITY_DETENTS[..], &GRID_STRENGTH_DETENTS[..], &HEADROOM_DETENTS[..]] {
            let snapped = nearest_detent(value, set);
            prop_assert!(snapped >= set[0] && snapped <= set[set.len() - 1]);
        }
    }
}
