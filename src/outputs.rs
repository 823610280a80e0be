use crate::allocation::Allocation;
use crate::inputs::{Facts, Indicators};
use crate::terms::{Memberships, Term};

/// Aggregated output membership, one degree per domain point
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuzzySet(Vec<f64>);

impl FuzzySet {
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.; len])
    }

    pub fn degrees(&self) -> &[f64] {
        &self.0
    }

    pub fn is_empty_set(&self) -> bool {
        self.0.iter().all(|degree| *degree == 0.)
    }
}

impl From<Vec<f64>> for FuzzySet {
    fn from(degrees: Vec<f64>) -> Self {
        Self(degrees)
    }
}

/// Everything one inference produced, from fuzzified inputs to the crisp score
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Outputs {
    pub(crate) indicators: Indicators,
    pub(crate) facts: Facts,
    pub(crate) strengths: Memberships,
    pub(crate) aggregated: FuzzySet,
    pub(crate) score: f64,
    pub(crate) band: Term,
}

impl Outputs {
    pub fn indicators(&self) -> &Indicators {
        &self.indicators
    }

    pub fn facts(&self) -> &Facts {
        &self.facts
    }

    /// Firing strength of every output term
    pub fn strengths(&self) -> &Memberships {
        &self.strengths
    }

    pub fn aggregated(&self) -> &FuzzySet {
        &self.aggregated
    }

    /// The urgency score in [0, 100]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Output term with the highest membership at the score
    pub fn band(&self) -> Term {
        self.band
    }

    pub fn allocation(&self) -> Allocation {
        Allocation::from_score(self.score)
    }
}

#[test]
fn test_fuzzy_set_emptiness() {
    assert!(FuzzySet::zeros(101).is_empty_set());
    assert!(!FuzzySet::from(vec![0., 0.1, 0.]).is_empty_set());
}
