use num::Float;

/// Similar to numpy.interp for a single point: `xp` must be increasing and
/// values beyond either end take the nearest `fp`.
pub(crate) fn interp<F: Float>(x: F, xp: &[F], fp: &[F]) -> F {
    debug_assert_eq!(xp.len(), fp.len());

    let (Some(&first), Some(&last)) = (xp.first(), xp.last()) else {
        return F::zero();
    };

    if x <= first {
        return fp[0];
    }
    if x >= last {
        return fp[fp.len() - 1];
    }

    // First knot strictly greater than x; x > first guarantees i >= 1
    let i = xp.partition_point(|p| *p <= x);
    let (x1, y1) = (xp[i - 1], fp[i - 1]);
    let (x2, y2) = (xp[i], fp[i]);

    y1 + (x - x1) * (y2 - y1) / (x2 - x1)
}

#[test]
fn test_interp() {
    let xs = [1., 2., 3.];
    let ys = [3., 2., 0.];
    let interped: Vec<f64> = [0., 1., 1.5, 2.72, 3.24].into_iter().map(|x| interp(x, &xs, &ys)).collect();

    assert_eq!(interped, vec![3., 3., 2.5, 0.5599999999999996, 0.]);

    let xs = [0., 1., 2., 3., 4.5];
    let ys = [0., 2., 5., 3., 2.];
    let interped: Vec<f64> = [2.5, -1., 7.5].into_iter().map(|x| interp(x, &xs, &ys)).collect();

    assert_eq!(interped, vec![4., 0., 2.]);
}

#[test]
fn test_interp_on_knots() {
    let xs = [0., 1., 2.];
    let ys = [0., 0.25, 1.];

    assert_eq!(interp(1., &xs, &ys), 0.25);
    assert_eq!(interp(2., &xs, &ys), 1.);
    assert_eq!(interp(0.5f64, &[], &[]), 0.);
}
