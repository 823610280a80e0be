use crate::inputs::{Facts, Input};
use crate::terms::{Memberships, Term};

/// `input IS term`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proposition {
    pub input: Input,
    pub term: Term,
}

impl Input {
    pub const fn is(self, term: Term) -> Proposition {
        Proposition { input: self, term }
    }
}

/// A disjunction of propositions implying one output term.
#[derive(Debug)]
pub struct Rule {
    pub premise: &'static [Proposition],
    pub consequence: Term,
}

impl Rule {
    /// Firing strength: the max (fuzzy OR) over the premise degrees.
    pub fn strength(&self, facts: &Facts) -> f64 {
        self.premise
            .iter()
            .map(|prop| facts.degree(prop.input, prop.term))
            .fold(0., f64::max)
    }
}

// The `AidAccessDeficiency` terms are read literally on the deficiency axis:
// low deficiency feeds high priority and high deficiency feeds low priority.
pub static RULE_BANK: [Rule; 3] = [
    Rule {
        premise: &[
            Input::Population.is(Term::Low),
            Input::AidAccessDeficiency.is(Term::High),
            Input::Impact.is(Term::Low),
        ],
        consequence: Term::Low,
    },
    Rule {
        premise: &[
            Input::Population.is(Term::Medium),
            Input::AidAccessDeficiency.is(Term::Medium),
        ],
        consequence: Term::Medium,
    },
    Rule {
        premise: &[
            Input::Population.is(Term::High),
            Input::AidAccessDeficiency.is(Term::Low),
            Input::Impact.is(Term::High),
        ],
        consequence: Term::High,
    },
];

/// Strength of every output term across a rule bank. Rules sharing a
/// consequence are combined with max.
pub fn evaluate(rules: &[Rule], facts: &Facts) -> Memberships {
    let mut strengths = Memberships::new();

    for rule in rules {
        let strength = f64::max(strengths.get(rule.consequence), rule.strength(facts));

        strengths.insert(rule.consequence, strength);
    }

    strengths
}

#[cfg(test)]
fn facts(degrees: &[(Input, Term, f64)]) -> Facts {
    let mut facts = Facts::new();

    for input in Input::ALL {
        let memberships = degrees
            .iter()
            .filter(|(i, _, _)| *i == input)
            .map(|(_, term, degree)| (*term, *degree))
            .collect();

        facts.insert(input, memberships);
    }

    facts
}

#[test]
fn test_rule_bank_shape() {
    let consequences: Vec<Term> = RULE_BANK.iter().map(|rule| rule.consequence).collect();

    assert_eq!(consequences, Term::ALL);
    assert_eq!(RULE_BANK[1].premise.len(), 2);
    assert!(RULE_BANK[2].premise.contains(&Input::AidAccessDeficiency.is(Term::Low)));
}

#[test]
fn test_rule_strength_is_max_of_premise() {
    let facts = facts(&[
        (Input::Population, Term::High, 0.4),
        (Input::AidAccessDeficiency, Term::Low, 0.5),
        (Input::Impact, Term::High, 0.5),
        (Input::Population, Term::Medium, 0.1),
    ]);
    let strengths = evaluate(&RULE_BANK, &facts);

    assert_eq!(strengths.get(Term::Low), 0.);
    assert_eq!(strengths.get(Term::Medium), 0.1);
    assert_eq!(strengths.get(Term::High), 0.5);
}

#[test]
fn test_high_deficiency_feeds_low_priority() {
    let facts = facts(&[(Input::AidAccessDeficiency, Term::High, 0.8)]);
    let strengths = evaluate(&RULE_BANK, &facts);

    assert_eq!(strengths.get(Term::Low), 0.8);
    assert_eq!(strengths.get(Term::High), 0.);
}
