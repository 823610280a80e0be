use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::inputs::{Facts, Indicators, Input};
use crate::membership::{Domain, MembershipFunction};
use crate::ops::{AggregationOp, DefuzzificationOp, ImplicationOp};
use crate::outputs::{FuzzySet, Outputs};
use crate::rules::{self, RULE_BANK};
use crate::terms::{Memberships, Term};
use crate::variable::{LinguisticVariable, Terms};

type TermTable = [(Term, MembershipFunction); 3];

const fn table(low: [f64; 3], medium: [f64; 3], high: [f64; 3]) -> TermTable {
    [
        (Term::Low, MembershipFunction::from_breakpoints(low[0], low[1], low[2])),
        (Term::Medium, MembershipFunction::from_breakpoints(medium[0], medium[1], medium[2])),
        (Term::High, MembershipFunction::from_breakpoints(high[0], high[1], high[2])),
    ]
}

pub const POPULATION_TERMS: TermTable = table([0., 0., 30.], [20., 50., 80.], [60., 100., 100.]);
pub const AID_ACCESS_DEFICIENCY_TERMS: TermTable = table([0., 0., 40.], [30., 50., 70.], [60., 100., 100.]);
pub const IMPACT_TERMS: TermTable = table([0., 0., 40.], [30., 60., 80.], [70., 100., 100.]);
pub const PRIORITY_TERMS: TermTable = table([0., 0., 40.], [30., 50., 70.], [60., 100., 100.]);

static ENGINE: LazyLock<FuzzyPriorityEngine> = LazyLock::new(FuzzyPriorityEngine::new);

/// Operators used by the engine. The default reproduces the reference
/// pipeline: product implication, max aggregation, discrete centroid.
///
/// ```
/// use fuzzy_priority::{DefuzzificationOp, ImplicationOp, InferenceConfig};
///
/// let config = InferenceConfig::default()
///     .with_implication(ImplicationOp::Min)
///     .with_defuzzification(DefuzzificationOp::Cog);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InferenceConfig {
    pub implication: ImplicationOp,
    pub aggregation: AggregationOp,
    pub defuzzification: DefuzzificationOp,
}

impl InferenceConfig {
    pub fn with_implication(mut self, implication: ImplicationOp) -> Self {
        self.implication = implication;
        self
    }

    pub fn with_aggregation(mut self, aggregation: AggregationOp) -> Self {
        self.aggregation = aggregation;
        self
    }

    pub fn with_defuzzification(mut self, defuzzification: DefuzzificationOp) -> Self {
        self.defuzzification = defuzzification;
        self
    }
}

/// Mamdani inference over the fixed priority rule bank.
///
/// Variables are sampled once at construction; every call after that only
/// reads them, so one engine can be shared freely across threads.
#[derive(Clone, Debug)]
pub struct FuzzyPriorityEngine {
    population: LinguisticVariable,
    aid_access_deficiency: LinguisticVariable,
    impact: LinguisticVariable,
    priority: LinguisticVariable,
    config: InferenceConfig,
}

impl FuzzyPriorityEngine {
    pub fn new() -> Self {
        Self::with_config(InferenceConfig::default())
    }

    pub fn with_config(config: InferenceConfig) -> Self {
        let domain = Domain::standard();
        let variable = |name, table: TermTable| {
            let terms = table
                .into_iter()
                .fold(Terms::new(), |terms, (term, function)| terms.with(term, function));

            LinguisticVariable::new(name, domain.clone(), terms)
        };

        Self {
            population: variable(Input::Population.name(), POPULATION_TERMS),
            aid_access_deficiency: variable(Input::AidAccessDeficiency.name(), AID_ACCESS_DEFICIENCY_TERMS),
            impact: variable(Input::Impact.name(), IMPACT_TERMS),
            priority: variable("priority", PRIORITY_TERMS),
            config,
        }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    pub fn variable(&self, input: Input) -> &LinguisticVariable {
        match input {
            Input::Population => &self.population,
            Input::AidAccessDeficiency => &self.aid_access_deficiency,
            Input::Impact => &self.impact,
        }
    }

    pub fn output_variable(&self) -> &LinguisticVariable {
        &self.priority
    }

    pub fn fuzzify(&self, indicators: &Indicators) -> Result<Facts> {
        let mut facts = Facts::new();

        for (input, value) in indicators.iter() {
            let memberships = self.variable(input).fuzzify(value)?;

            trace!(%input, value, ?memberships, "fuzzified input");
            facts.insert(input, memberships);
        }

        Ok(facts)
    }

    pub fn evaluate_rules(&self, facts: &Facts) -> Memberships {
        rules::evaluate(&RULE_BANK, facts)
    }

    /// Shapes each output term by its strength and combines the results into
    /// one set over the output domain.
    pub fn aggregate(&self, strengths: &Memberships) -> FuzzySet {
        let len = self.priority.domain().len();
        let aggregated = self.priority.terms().fold(vec![0.; len], |acc, (term, curve)| {
            let implied = self.config.implication.call(strengths.get(term), curve);

            self.config.aggregation.call(acc, implied).collect()
        });

        FuzzySet::from(aggregated)
    }

    pub fn defuzzify(&self, aggregated: &FuzzySet) -> Result<f64> {
        self.config
            .defuzzification
            .call(self.priority.domain().points(), aggregated.degrees())
    }

    /// Runs the whole pipeline and keeps every intermediate result.
    pub fn infer(&self, indicators: &Indicators) -> Result<Outputs> {
        let facts = self.fuzzify(indicators)?;
        let strengths = self.evaluate_rules(&facts);

        debug!(
            low = strengths.get(Term::Low),
            medium = strengths.get(Term::Medium),
            high = strengths.get(Term::High),
            "rule strengths"
        );

        let aggregated = self.aggregate(&strengths);
        let score = self.defuzzify(&aggregated)?;
        let band = self.band(score)?;

        debug!(score, %band, "inferred urgency");

        Ok(Outputs {
            indicators: *indicators,
            facts,
            strengths,
            aggregated,
            score,
            band,
        })
    }

    /// The urgency score for three crisp indicators in [0, 100].
    pub fn compute_priority(&self, population: f64, aid_access_deficiency: f64, impact: f64) -> Result<f64> {
        let indicators = Indicators::new(population, aid_access_deficiency, impact)?;

        self.infer(&indicators).map(|outputs| outputs.score())
    }

    fn band(&self, score: f64) -> Result<Term> {
        self.priority
            .fuzzify(score)?
            .dominant()
            .ok_or(Error::UndefinedDefuzzification)
    }
}

impl Default for FuzzyPriorityEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// [`FuzzyPriorityEngine::compute_priority`] on a process-wide default engine.
pub fn compute_priority(population: f64, aid_access_deficiency: f64, impact: f64) -> Result<f64> {
    ENGINE.compute_priority(population, aid_access_deficiency, impact)
}

/// [`FuzzyPriorityEngine::infer`] on a process-wide default engine.
pub fn infer(indicators: &Indicators) -> Result<Outputs> {
    ENGINE.infer(indicators)
}

#[test]
fn test_term_tables_are_ordered() {
    for table in [POPULATION_TERMS, AID_ACCESS_DEFICIENCY_TERMS, IMPACT_TERMS, PRIORITY_TERMS] {
        for (_, function) in table {
            let (a, b, c) = function.breakpoints();

            assert!(MembershipFunction::triangular(a, b, c).is_ok());
        }
    }
}

#[test]
fn test_standard_variables_cover_domain() {
    let engine = FuzzyPriorityEngine::new();

    for input in Input::ALL {
        assert!(engine.variable(input).covers_domain(), "{input}");
    }
    assert!(engine.output_variable().covers_domain());
}

#[test]
fn test_palestine_profile() {
    let engine = FuzzyPriorityEngine::new();
    let outputs = engine.infer(&Indicators::new(98., 5., 100.).unwrap()).unwrap();

    assert_eq!(outputs.strengths().get(Term::Low), 0.);
    assert_eq!(outputs.strengths().get(Term::Medium), 0.);
    assert_eq!(outputs.strengths().get(Term::High), 1.);
    assert!((outputs.facts().degree(Input::AidAccessDeficiency, Term::Low) - 0.875).abs() < 1e-12);
    assert!((outputs.score() - 87.).abs() < 1e-9);
    assert_eq!(outputs.band(), Term::High);
}

#[test]
fn test_sudan_profile() {
    let engine = FuzzyPriorityEngine::new();
    let outputs = engine.infer(&Indicators::new(76., 20., 85.).unwrap()).unwrap();

    assert!((outputs.strengths().get(Term::Medium) - 4. / 30.).abs() < 1e-12);
    assert!((outputs.strengths().get(Term::High) - 0.5).abs() < 1e-12);
    assert!((outputs.score() - 79.612_780_475).abs() < 1e-6);
}

#[test]
fn test_aggregate_uses_product_and_max() {
    let engine = FuzzyPriorityEngine::new();
    let strengths: Memberships = [(Term::Low, 0.5), (Term::High, 0.25)].into_iter().collect();
    let aggregated = engine.aggregate(&strengths);
    let degrees = aggregated.degrees();

    assert_eq!(degrees.len(), 101);
    assert_eq!(degrees[0], 0.5);
    assert_eq!(degrees[50], 0.);
    assert_eq!(degrees[100], 0.25);
}

#[test]
fn test_zero_strengths_fail_defuzzification() {
    let engine = FuzzyPriorityEngine::new();
    let aggregated = engine.aggregate(&Memberships::new());

    assert!(aggregated.is_empty_set());
    assert_eq!(engine.defuzzify(&aggregated), Err(Error::UndefinedDefuzzification));
}

#[test]
fn test_min_implication_differs_for_partial_strengths() {
    let prod = FuzzyPriorityEngine::new();
    let min = FuzzyPriorityEngine::with_config(
        InferenceConfig::default().with_implication(ImplicationOp::Min),
    );

    // A saturated rule gives the same curve either way
    let saturated_prod = prod.compute_priority(98., 5., 100.).unwrap();
    let saturated_min = min.compute_priority(98., 5., 100.).unwrap();
    assert!((saturated_prod - saturated_min).abs() < 1e-9);

    let partial_prod = prod.compute_priority(76., 20., 85.).unwrap();
    let partial_min = min.compute_priority(76., 20., 85.).unwrap();
    assert!((partial_prod - partial_min).abs() > 1e-6);
}

#[test]
fn test_cog_defuzzification() {
    let engine = FuzzyPriorityEngine::with_config(
        InferenceConfig::default().with_defuzzification(DefuzzificationOp::Cog),
    );
    let score = engine.compute_priority(76., 20., 85.).unwrap();

    assert!((score - 79.196_760_808).abs() < 1e-6);
}
