//! Donation urgency scoring for humanitarian crisis regions.
//!
//! Three indicators in [0, 100] (population pressure, aid-access deficiency
//! and crisis impact) are fuzzified against triangular low/medium/high terms,
//! combined by a fixed Mamdani rule bank and defuzzified into one urgency
//! score in [0, 100].
//!
//! ```
//! let score = fuzzy_priority::compute_priority(98., 5., 100.)?;
//!
//! assert!(score > 70.);
//! # Ok::<(), fuzzy_priority::Error>(())
//! ```

mod allocation;
mod error;
mod inference;
mod inputs;
mod linspace;
mod math;
mod membership;
mod ops;
mod outputs;
mod rules;
mod terms;
mod variable;

pub use allocation::{Allocation, SECTOR_SHARES};
pub use error::{Error, Result};
pub use inference::{
    compute_priority, infer, FuzzyPriorityEngine, InferenceConfig, AID_ACCESS_DEFICIENCY_TERMS, IMPACT_TERMS,
    POPULATION_TERMS, PRIORITY_TERMS,
};
pub use inputs::{Facts, Indicators, Input};
pub use membership::{Domain, MembershipFunction, DOMAIN_MAX, DOMAIN_MIN, DOMAIN_STEP, MAX_DOMAIN_POINTS};
pub use ops::{AggregationOp, DefuzzificationOp, ImplicationOp};
pub use outputs::{FuzzySet, Outputs};
pub use rules::{Proposition, Rule, RULE_BANK};
pub use terms::{Memberships, Term};
pub use variable::{LinguisticVariable, Terms};
