pub(crate) struct Linspace {
    start: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Linspace {
    pub(crate) fn new(min: f64, max: f64, n: usize) -> Self {
        let step = if n > 1 {
            let num_steps = (n - 1) as f64;
            (max - min) / num_steps
        } else {
            0.
        };
        Linspace {
            start: min,
            step,
            index: 0,
            len: n,
        }
    }
}

impl Iterator for Linspace {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            None
        } else {
            // Same as numpy.linspace: start + i * step, never accumulated
            let i = self.index;
            self.index += 1;
            Some(self.start + self.step * i as f64)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Linspace {}

#[test]
fn test_linspace_integer_grid() {
    let points: Vec<f64> = Linspace::new(0., 100., 101).collect();

    assert_eq!(points.len(), 101);
    assert_eq!(points[0], 0.);
    assert_eq!(points[37], 37.);
    assert_eq!(points[100], 100.);
}

#[test]
fn test_linspace_single_point() {
    let points: Vec<f64> = Linspace::new(4., 9., 1).collect();

    assert_eq!(points, vec![4.]);
}
