use fuzzy_priority::{compute_priority, Error, FuzzyPriorityEngine};
use proptest::prelude::*;

proptest! {
    #[test]
    fn score_stays_in_domain(p in 0.0..=100.0f64, a in 0.0..=100.0f64, i in 0.0..=100.0f64) {
        let score = compute_priority(p, a, i).unwrap();

        prop_assert!((0.0..=100.0).contains(&score), "score {} for ({}, {}, {})", score, p, a, i);
    }

    #[test]
    fn identical_inputs_give_identical_bits(p in 0.0..=100.0f64, a in 0.0..=100.0f64, i in 0.0..=100.0f64) {
        let shared = compute_priority(p, a, i).unwrap();
        let fresh = FuzzyPriorityEngine::new().compute_priority(p, a, i).unwrap();

        prop_assert_eq!(shared.to_bits(), fresh.to_bits());
        prop_assert_eq!(shared.to_bits(), compute_priority(p, a, i).unwrap().to_bits());
    }

    // Deficiency 50 and impact 60 keep aid_high and impact_low at zero
    #[test]
    fn score_non_decreasing_in_population(lo in 0.0..=100.0f64, hi in 0.0..=100.0f64) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let lower = compute_priority(lo, 50., 60.).unwrap();
        let higher = compute_priority(hi, 50., 60.).unwrap();

        prop_assert!(lower <= higher + 1e-9, "{} at {} > {} at {}", lower, lo, higher, hi);
    }

    #[test]
    fn values_above_domain_are_rejected(v in 100.000_001..1e6f64) {
        prop_assert!(
            matches!(compute_priority(50., v, 50.), Err(Error::InvalidInputRange { .. })),
            "accepted {}", v
        );
    }
}
