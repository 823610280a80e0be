//! Error types for the priority engine

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A crisp input is NaN, infinite or outside the variable's domain
    #[error("{variable} value {value} is outside the domain [0, 100]")]
    InvalidInputRange { variable: &'static str, value: f64 },

    /// The aggregated output set has no area, so it has no centroid
    #[error("aggregated membership is zero everywhere; defuzzification is undefined")]
    UndefinedDefuzzification,

    /// Triangle breakpoints must be finite and satisfy a <= b <= c
    #[error("invalid triangle breakpoints ({a}, {b}, {c})")]
    InvalidBreakpoints { a: f64, b: f64, c: f64 },

    /// Domain bounds must be finite with min <= max, and the step finite and positive
    #[error("invalid domain: min {min}, max {max}, step {step}")]
    InvalidDomain { min: f64, max: f64, step: f64 },

    /// Deserialized domain points must be finite and strictly increasing
    #[error("invalid domain points: {0}")]
    InvalidDomainPoints(&'static str),

    /// A name that does not match any known term or operator
    #[error("unknown {kind}: {name}")]
    UnknownName { kind: &'static str, name: String },
}
