//! Discretized domain and triangular membership functions.

use crate::error::{Error, Result};
use crate::linspace::Linspace;

pub const DOMAIN_MIN: f64 = 0.;
pub const DOMAIN_MAX: f64 = 100.;
pub const DOMAIN_STEP: f64 = 1.;

/// Upper bound on the number of points a [`Domain`] may hold
pub const MAX_DOMAIN_POINTS: usize = 1 << 20;

/// An evenly spaced discretization of a closed range, shared by every
/// variable of an engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
pub struct Domain {
    points: Vec<f64>,
}

impl Domain {
    /// Points from `min` to `max` inclusive, `step` apart.
    ///
    /// Bounds must be finite with `min <= max` and the step finite and
    /// positive.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        let invalid = || Error::InvalidDomain { min, max, step };

        if !(min.is_finite() && max.is_finite() && min <= max) {
            return Err(invalid());
        }
        if !(step.is_finite() && step > 0.) {
            return Err(invalid());
        }

        // floor matches python's int() truncation for positive spans
        let steps = ((max - min) / step).floor();

        if steps >= MAX_DOMAIN_POINTS as f64 {
            return Err(invalid());
        }

        Ok(Self::linspace(min, max, steps as usize + 1))
    }

    /// The integer grid 0..=100 used by the priority engine
    pub fn standard() -> Self {
        let steps = (DOMAIN_MAX - DOMAIN_MIN) / DOMAIN_STEP;

        Self::linspace(DOMAIN_MIN, DOMAIN_MAX, steps as usize + 1)
    }

    fn linspace(min: f64, max: f64, num: usize) -> Self {
        Self {
            points: Linspace::new(min, max, num).collect(),
        }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.points.first().copied().unwrap_or(f64::NAN)
    }

    pub fn max(&self) -> f64 {
        self.points.last().copied().unwrap_or(f64::NAN)
    }

    /// NaN and infinities are never contained.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min() && value <= self.max()
    }
}

impl TryFrom<Vec<f64>> for Domain {
    type Error = Error;

    fn try_from(points: Vec<f64>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::InvalidDomainPoints("no points"));
        }
        if points.iter().any(|x| !x.is_finite()) {
            return Err(Error::InvalidDomainPoints("non-finite point"));
        }
        if points.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(Error::InvalidDomainPoints("points are not strictly increasing"));
        }

        Ok(Self { points })
    }
}

impl From<Domain> for Vec<f64> {
    fn from(domain: Domain) -> Self {
        domain.points
    }
}

/// Triangular membership function with breakpoints `a <= b <= c`.
///
/// The degree is 0 at and beyond `a` and `c`, rises linearly on `(a, b)`,
/// falls linearly on `(b, c)` and is exactly 1 at `b`. With `a == b` (or
/// `b == c`) that edge degenerates into a step.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MembershipFunction {
    a: f64,
    b: f64,
    c: f64,
}

impl MembershipFunction {
    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self> {
        let finite = a.is_finite() && b.is_finite() && c.is_finite();

        if !finite || a > b || b > c {
            return Err(Error::InvalidBreakpoints { a, b, c });
        }

        Ok(Self { a, b, c })
    }

    /// Unchecked constructor for the built-in tables; their ordering is
    /// covered by tests.
    pub(crate) const fn from_breakpoints(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn breakpoints(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    pub fn degree(&self, x: f64) -> f64 {
        let Self { a, b, c } = *self;

        if x == b {
            1.
        } else if a < x && x < b {
            (x - a) / (b - a)
        } else if b < x && x < c {
            (c - x) / (c - b)
        } else {
            0.
        }
    }

    /// Degrees at every point of the domain, in domain order.
    pub fn sample(&self, domain: &Domain) -> Vec<f64> {
        domain.points().iter().map(|x| self.degree(*x)).collect()
    }
}

#[test]
fn test_standard_domain() {
    let domain = Domain::standard();

    assert_eq!(domain.len(), 101);
    assert_eq!(domain.min(), 0.);
    assert_eq!(domain.max(), 100.);
    assert!(domain.contains(0.) && domain.contains(100.) && domain.contains(42.5));
    assert!(!domain.contains(-1.) && !domain.contains(101.));
    assert!(!domain.contains(f64::NAN) && !domain.contains(f64::INFINITY));
}

#[test]
fn test_custom_domain() {
    let domain = Domain::new(0., 1., 0.25).unwrap();

    assert_eq!(domain.points(), &[0., 0.25, 0.5, 0.75, 1.]);
    assert_eq!(Domain::new(5., 5., 1.).unwrap().points(), &[5.]);
    assert_eq!(Domain::new(DOMAIN_MIN, DOMAIN_MAX, DOMAIN_STEP), Ok(Domain::standard()));
}

#[test]
fn test_invalid_domain_is_rejected() {
    assert_eq!(
        Domain::new(0., 100., 0.),
        Err(Error::InvalidDomain { min: 0., max: 100., step: 0. })
    );
    assert_eq!(
        Domain::new(100., 0., 1.),
        Err(Error::InvalidDomain { min: 100., max: 0., step: 1. })
    );
    assert!(Domain::new(0., 100., -1.).is_err());
    assert!(Domain::new(f64::NAN, 100., 1.).is_err());
    assert!(Domain::new(0., f64::INFINITY, 1.).is_err());
    assert!(Domain::new(0., 100., f64::NAN).is_err());
    assert!(Domain::new(0., 1e12, 1e-6).is_err());
}

#[test]
fn test_domain_from_points() {
    assert_eq!(Domain::try_from(vec![0., 0.5, 1.]).map(|d| d.len()), Ok(3));
    assert!(Domain::try_from(Vec::new()).is_err());
    assert!(Domain::try_from(vec![0., f64::NAN]).is_err());
    assert!(Domain::try_from(vec![0., 2., 1.]).is_err());
    assert!(Domain::try_from(vec![1., 1.]).is_err());
}

#[test]
fn test_triangle_degrees() {
    let medium = MembershipFunction::triangular(20., 50., 80.).unwrap();

    assert_eq!(medium.degree(20.), 0.);
    assert_eq!(medium.degree(35.), 0.5);
    assert_eq!(medium.degree(50.), 1.);
    assert_eq!(medium.degree(65.), 0.5);
    assert_eq!(medium.degree(80.), 0.);
    assert_eq!(medium.degree(-10.), 0.);
}

#[test]
fn test_shoulder_triangles() {
    let low = MembershipFunction::triangular(0., 0., 30.).unwrap();
    let high = MembershipFunction::triangular(60., 100., 100.).unwrap();

    assert_eq!(low.degree(0.), 1.);
    assert_eq!(low.degree(15.), 0.5);
    assert_eq!(low.degree(30.), 0.);
    assert_eq!(high.degree(100.), 1.);
    assert_eq!(high.degree(80.), 0.5);
    assert_eq!(high.degree(60.), 0.);
}

#[test]
fn test_sample_matches_pointwise() {
    let domain = Domain::standard();
    let impact_medium = MembershipFunction::triangular(30., 60., 80.).unwrap();
    let sampled = impact_medium.sample(&domain);

    assert_eq!(sampled.len(), domain.len());

    for (x, degree) in domain.points().iter().zip(&sampled) {
        assert_eq!(degree.to_bits(), impact_medium.degree(*x).to_bits());
    }
}

#[test]
fn test_invalid_breakpoints() {
    assert_eq!(
        MembershipFunction::triangular(50., 20., 80.),
        Err(Error::InvalidBreakpoints { a: 50., b: 20., c: 80. })
    );
    assert!(MembershipFunction::triangular(0., f64::NAN, 10.).is_err());
    assert!(MembershipFunction::triangular(5., 5., 5.).is_ok());
}
