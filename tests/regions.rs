use fuzzy_priority::{compute_priority, infer, Error, Indicators, Term};

// (name, population, aid-access deficiency, impact)
const REGIONS: [(&str, f64, f64, f64); 4] = [
    ("Palestine (2024)", 98., 5., 100.),
    ("Sudan (Conflict)", 76., 20., 85.),
    ("Congo (Humanitarian Crisis)", 69., 25., 80.),
    ("Punjab Flood (India)", 45., 50., 40.),
];

#[test]
fn palestine_scores_high_urgency() {
    let outputs = infer(&Indicators::new(98., 5., 100.).unwrap()).unwrap();

    assert!(outputs.score() > 70.);
    assert!((outputs.score() - 87.).abs() < 1e-9);
    assert_eq!(outputs.band(), Term::High);
}

#[test]
fn punjab_flood_scores_middling() {
    let score = compute_priority(45., 50., 40.).unwrap();

    assert!((35. ..=55.).contains(&score), "{score}");
    assert!((score - 50.).abs() < 1e-9);
}

#[test]
fn reference_regions_rank_by_severity() {
    let scores: Vec<f64> = REGIONS
        .iter()
        .map(|(name, population, deficiency, impact)| {
            compute_priority(*population, *deficiency, *impact).unwrap_or_else(|err| panic!("{name}: {err}"))
        })
        .collect();

    assert!((scores[1] - 79.612_780_475).abs() < 1e-6);
    assert!((scores[2] - 69.007_277_670).abs() < 1e-6);
    assert!(scores.windows(2).all(|pair| pair[0] > pair[1]), "{scores:?}");
}

#[test]
fn domain_corners_are_defined() {
    for value in [0., 100.] {
        let score = compute_priority(value, value, value).unwrap();

        assert!(score.is_finite());
        assert!((score - 50.).abs() < 1e-9);
    }
}

#[test]
fn out_of_range_inputs_are_rejected() {
    for bad in [-1., 101., f64::NAN, f64::INFINITY] {
        for axis in 0..3 {
            let mut args = [50.; 3];
            args[axis] = bad;

            let result = compute_priority(args[0], args[1], args[2]);

            assert!(matches!(result, Err(Error::InvalidInputRange { .. })), "{args:?}: {result:?}");
        }
    }
}

#[test]
fn allocation_follows_score() {
    let outputs = infer(&Indicators::new(76., 20., 85.).unwrap()).unwrap();
    let allocation = outputs.allocation();

    assert!((allocation.food_and_water - outputs.score() * 0.4).abs() < 1e-12);
    assert!((allocation.total() - outputs.score()).abs() < 1e-9);
}
