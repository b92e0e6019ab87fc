//! Property-based checks over random seeds, horizons, and thresholds.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use zigzag_core::{CivilDate, EphemerisGenerator, classify, normalize_phase};

fn seed_date() -> impl Strategy<Value = CivilDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| CivilDate::new(y, m, d).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn emitted_records_are_inside_threshold(
        date in seed_date(),
        seed in -10.0f64..10.0,
        months in 0usize..600,
        threshold in 0.001f64..=0.5,
    ) {
        let g = EphemerisGenerator::new(date, seed).unwrap();
        let records = g.generate(months, threshold).unwrap();
        prop_assert!(records.len() <= months);

        for r in &records {
            prop_assert!((0.0..1.0).contains(&r.draconitic_phase) || r.draconitic_phase == 1.0);
            prop_assert!((0.0..=0.5).contains(&r.node_distance));
            prop_assert!(r.month_index < months);
        }
        for pair in records.windows(2) {
            prop_assert!(pair[0].month_index < pair[1].month_index);
        }
    }

    /// Re-running the loop recovers exactly the flagged months.
    #[test]
    fn non_emitted_months_are_outside_threshold(
        date in seed_date(),
        seed in -10.0f64..10.0,
        months in 1usize..600,
        threshold in 0.001f64..=0.5,
    ) {
        let g = EphemerisGenerator::new(date, seed).unwrap();
        let records = g.generate(months, threshold).unwrap();
        let mut flagged = records.iter().map(|r| r.month_index).peekable();

        for state in g.steps(months) {
            let state = state.unwrap();
            prop_assert!((0.0..1.0).contains(&state.normalized_phase));
            prop_assert!((0.0..=0.5).contains(&state.distances.min()));

            if flagged.peek() == Some(&state.month_index) {
                flagged.next();
                prop_assert!(state.distances.min() < threshold);
                prop_assert!(classify(&state.distances, threshold).is_some());
            } else {
                prop_assert!(state.distances.min() >= threshold);
            }
        }
        prop_assert!(flagged.next().is_none());
    }

    #[test]
    fn normalized_phase_in_unit_interval(raw in -1.0e6f64..1.0e6) {
        let p = normalize_phase(raw);
        prop_assert!((0.0..1.0).contains(&p), "normalize_phase({raw}) = {p}");
    }

    #[test]
    fn identical_inputs_identical_output(
        date in seed_date(),
        seed in 0.0f64..1.0,
        months in 0usize..300,
        threshold in 0.001f64..=0.5,
    ) {
        let g = EphemerisGenerator::new(date, seed).unwrap();
        prop_assert_eq!(
            g.generate(months, threshold).unwrap(),
            g.generate(months, threshold).unwrap()
        );
    }

    #[test]
    fn half_threshold_flags_everything(
        date in seed_date(),
        seed in -2.0f64..2.0,
        months in 0usize..300,
    ) {
        let g = EphemerisGenerator::new(date, seed).unwrap();
        prop_assert_eq!(g.generate(months, 0.5).unwrap().len(), months);
    }
}
