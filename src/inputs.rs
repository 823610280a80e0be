use std::fmt;

use fixed_map::{Key, Map as FixedMap};

use crate::error::{Error, Result};
use crate::membership::{DOMAIN_MAX, DOMAIN_MIN};
use crate::terms::{Memberships, Term};

/// The three crisp indicators describing a crisis region
#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Input {
    Population,
    AidAccessDeficiency,
    Impact,
}

impl Input {
    pub const ALL: [Input; 3] = [Input::Population, Input::AidAccessDeficiency, Input::Impact];

    pub fn name(self) -> &'static str {
        match self {
            Self::Population => "population",
            Self::AidAccessDeficiency => "aid-access deficiency",
            Self::Impact => "impact",
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated crisp inputs, each finite and within [0, 100]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Indicators {
    population: f64,
    aid_access_deficiency: f64,
    impact: f64,
}

impl Indicators {
    pub fn new(population: f64, aid_access_deficiency: f64, impact: f64) -> Result<Self> {
        Ok(Self {
            population: validate(Input::Population, population)?,
            aid_access_deficiency: validate(Input::AidAccessDeficiency, aid_access_deficiency)?,
            impact: validate(Input::Impact, impact)?,
        })
    }

    pub fn get(&self, input: Input) -> f64 {
        match input {
            Input::Population => self.population,
            Input::AidAccessDeficiency => self.aid_access_deficiency,
            Input::Impact => self.impact,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Input, f64)> + '_ {
        Input::ALL.into_iter().map(|input| (input, self.get(input)))
    }
}

fn validate(input: Input, value: f64) -> Result<f64> {
    if value.is_finite() && (DOMAIN_MIN..=DOMAIN_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidInputRange {
            variable: input.name(),
            value,
        })
    }
}

/// Fuzzified inputs: the membership degrees of every indicator
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facts(pub(crate) FixedMap<Input, Memberships>);

impl Facts {
    pub fn new() -> Self {
        Self(FixedMap::new())
    }

    pub fn insert(&mut self, input: Input, memberships: Memberships) {
        self.0.insert(input, memberships);
    }

    pub fn memberships(&self, input: Input) -> Option<&Memberships> {
        self.0.get(input)
    }

    /// Zero when the input was never fuzzified
    pub fn degree(&self, input: Input, term: Term) -> f64 {
        self.0.get(input).map_or(0., |memberships| memberships.get(term))
    }
}

impl Default for Facts {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test_indicators_accept_bounds() {
    let indicators = Indicators::new(0., 100., 42.5).unwrap();

    assert_eq!(indicators.get(Input::Population), 0.);
    assert_eq!(indicators.get(Input::AidAccessDeficiency), 100.);
    assert_eq!(indicators.get(Input::Impact), 42.5);
}

#[test]
fn test_indicators_reject_first_bad_input() {
    assert_eq!(
        Indicators::new(50., 101., -1.),
        Err(Error::InvalidInputRange {
            variable: "aid-access deficiency",
            value: 101.
        })
    );
    assert!(Indicators::new(f64::NAN, 0., 0.).is_err());
    assert!(Indicators::new(0., 0., f64::INFINITY).is_err());
}

#[test]
fn test_facts_default_to_zero() {
    let mut facts = Facts::new();
    let mut population = Memberships::new();

    population.insert(Term::High, 0.9);
    facts.insert(Input::Population, population);

    assert_eq!(facts.degree(Input::Population, Term::High), 0.9);
    assert_eq!(facts.degree(Input::Impact, Term::High), 0.);
}
