use std::fmt;
use std::str::FromStr;

use fixed_map::{Key, Map as FixedMap};

use crate::error::Error;

/// Linguistic term shared by every variable of the engine
#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Term {
    Low,
    Medium,
    High,
}

impl Term {
    pub const ALL: [Term; 3] = [Term::Low, Term::Medium, Term::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Term {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Term::ALL
            .into_iter()
            .find(|term| term.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownName {
                kind: "term",
                name: s.to_owned(),
            })
    }
}

/// Degrees of membership keyed by term. A term that was never inserted has
/// degree zero.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Memberships(pub(crate) FixedMap<Term, f64>);

impl Memberships {
    pub fn new() -> Self {
        Self(FixedMap::new())
    }

    pub fn insert(&mut self, term: Term, degree: f64) {
        self.0.insert(term, degree);
    }

    pub fn get(&self, term: Term) -> f64 {
        self.0.get(term).copied().unwrap_or(0.)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Term, f64)> + '_ {
        self.0.iter().map(|(term, degree)| (term, *degree))
    }

    /// The term with the largest degree; ties go to the later (higher) term.
    pub fn dominant(&self) -> Option<Term> {
        self.iter()
            .fold(None, |best: Option<(Term, f64)>, (term, degree)| match best {
                Some((_, best_degree)) if best_degree > degree => best,
                _ => Some((term, degree)),
            })
            .map(|(term, _)| term)
    }
}

impl Default for Memberships {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(Term, f64)> for Memberships {
    fn from_iter<I: IntoIterator<Item = (Term, f64)>>(iter: I) -> Self {
        let mut memberships = Self::new();

        for (term, degree) in iter {
            memberships.insert(term, degree);
        }

        memberships
    }
}

#[test]
fn test_missing_term_is_zero() {
    let mut memberships = Memberships::new();

    memberships.insert(Term::High, 0.75);

    assert_eq!(memberships.get(Term::Low), 0.);
    assert_eq!(memberships.get(Term::High), 0.75);
    assert_eq!(memberships.iter().count(), 1);
}

#[test]
fn test_dominant_prefers_higher_term_on_tie() {
    let memberships: Memberships = [(Term::Low, 0.5), (Term::Medium, 0.5), (Term::High, 0.2)]
        .into_iter()
        .collect();

    assert_eq!(memberships.dominant(), Some(Term::Medium));
    assert_eq!(Memberships::new().dominant(), None);
}

#[test]
fn test_term_parse() {
    assert_eq!("High".parse::<Term>(), Ok(Term::High));
    assert!("urgent".parse::<Term>().is_err());
}
