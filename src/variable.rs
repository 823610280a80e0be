use fixed_map::Map as FixedMap;

use crate::error::{Error, Result};
use crate::math::interp;
use crate::membership::{Domain, MembershipFunction};
use crate::terms::{Memberships, Term};

/// A membership function together with its samples over the variable's domain
#[derive(Clone, Debug)]
struct TermCurve {
    function: MembershipFunction,
    samples: Vec<f64>,
}

/// Builder for the terms of a [`LinguisticVariable`]
#[derive(Clone, Debug)]
pub struct Terms(pub(crate) FixedMap<Term, MembershipFunction>);

impl Terms {
    pub fn new() -> Self {
        Self(FixedMap::new())
    }

    pub fn insert(&mut self, term: Term, function: MembershipFunction) {
        self.0.insert(term, function);
    }

    pub fn with(mut self, term: Term, function: MembershipFunction) -> Self {
        self.insert(term, function);
        self
    }
}

impl Default for Terms {
    fn default() -> Self {
        Self::new()
    }
}

/// A named quantity partitioned into fuzzy terms over a discrete domain.
///
/// Term curves are sampled once at construction and never change afterwards.
#[derive(Clone, Debug)]
pub struct LinguisticVariable {
    name: &'static str,
    domain: Domain,
    terms: FixedMap<Term, TermCurve>,
}

impl LinguisticVariable {
    pub fn new(name: &'static str, domain: Domain, terms: Terms) -> Self {
        let mut curves = FixedMap::new();

        for (term, function) in terms.0.iter() {
            let samples = function.sample(&domain);

            curves.insert(
                term,
                TermCurve {
                    function: *function,
                    samples,
                },
            );
        }

        Self {
            name,
            domain,
            terms: curves,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn membership_function(&self, term: Term) -> Option<&MembershipFunction> {
        self.terms.get(term).map(|curve| &curve.function)
    }

    /// The term curve sampled at every domain point
    pub fn samples(&self, term: Term) -> Option<&[f64]> {
        self.terms.get(term).map(|curve| &*curve.samples)
    }

    pub fn terms(&self) -> impl Iterator<Item = (Term, &[f64])> + '_ {
        self.terms.iter().map(|(term, curve)| (term, &*curve.samples))
    }

    /// Degrees of a crisp value against every term, interpolated between the
    /// two domain samples bracketing it.
    pub fn fuzzify(&self, value: f64) -> Result<Memberships> {
        if !self.domain.contains(value) {
            return Err(Error::InvalidInputRange {
                variable: self.name,
                value,
            });
        }

        let points = self.domain.points();

        Ok(self
            .terms
            .iter()
            .map(|(term, curve)| (term, interp(value, points, &curve.samples)))
            .collect())
    }

    /// Domain points where every term has zero membership.
    pub fn uncovered_points(&self) -> Vec<f64> {
        self.domain
            .points()
            .iter()
            .enumerate()
            .filter(|(i, _)| self.terms.iter().all(|(_, curve)| curve.samples[*i] == 0.))
            .map(|(_, x)| *x)
            .collect()
    }

    pub fn covers_domain(&self) -> bool {
        self.uncovered_points().is_empty()
    }
}

#[cfg(test)]
fn triangle(a: f64, b: f64, c: f64) -> MembershipFunction {
    MembershipFunction::triangular(a, b, c).unwrap()
}

#[test]
fn test_fuzzify_on_grid() {
    let terms = Terms::new()
        .with(Term::Low, triangle(0., 0., 30.))
        .with(Term::Medium, triangle(20., 50., 80.))
        .with(Term::High, triangle(60., 100., 100.));
    let population = LinguisticVariable::new("population", Domain::standard(), terms);
    let degrees = population.fuzzify(76.).unwrap();

    assert_eq!(degrees.get(Term::Low), 0.);
    assert!((degrees.get(Term::Medium) - 4. / 30.).abs() < 1e-12);
    assert!((degrees.get(Term::High) - 0.4).abs() < 1e-12);
}

#[test]
fn test_fuzzify_between_grid_points() {
    let terms = Terms::new().with(Term::Medium, triangle(20., 50., 80.));
    let population = LinguisticVariable::new("population", Domain::standard(), terms);
    let degrees = population.fuzzify(35.5).unwrap();

    assert!((degrees.get(Term::Medium) - 15.5 / 30.).abs() < 1e-12);
    assert_eq!(degrees.get(Term::High), 0.);
}

#[test]
fn test_fuzzify_rejects_out_of_domain() {
    let terms = Terms::new().with(Term::Low, triangle(0., 0., 40.));
    let impact = LinguisticVariable::new("impact", Domain::standard(), terms);

    for value in [-1., 101., f64::NAN, f64::NEG_INFINITY] {
        match impact.fuzzify(value) {
            Err(Error::InvalidInputRange { variable, .. }) => assert_eq!(variable, "impact"),
            other => panic!("expected InvalidInputRange, got {other:?}"),
        }
    }
}

#[test]
fn test_coverage_gap_is_reported() {
    let terms = Terms::new()
        .with(Term::Low, triangle(0., 0., 20.))
        .with(Term::Medium, triangle(40., 50., 60.))
        .with(Term::High, triangle(80., 100., 100.));
    let gappy = LinguisticVariable::new("gappy", Domain::standard(), terms);
    let uncovered = gappy.uncovered_points();

    assert!(!gappy.covers_domain());
    assert_eq!(uncovered.first(), Some(&20.));
    assert!(uncovered.contains(&40.) && uncovered.contains(&70.));
    assert!(!uncovered.contains(&50.));
}
