use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

use num::Float;

use crate::error::{Error, Result};
use crate::math::interp;

/// Implication operator shaping an output term curve by its rule strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImplicationOp {
    /// Scale the curve by the strength (Larsen)
    #[default]
    Prod,
    /// Clip the curve at the strength (Mamdani)
    Min,
}

impl ImplicationOp {
    pub fn call<F: Float>(self, strength: F, curve: &[F]) -> Vec<F> {
        curve
            .iter()
            .map(|degree| match self {
                Self::Prod => strength * *degree,
                Self::Min => F::min(strength, *degree),
            })
            .collect()
    }
}

/// Method for aggregating the implied curves of all rules
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AggregationOp {
    #[default]
    Max,
    ProbOr,
    BoundedSum,
}

impl AggregationOp {
    pub fn call<F: Float>(
        self,
        u: impl IntoIterator<Item = F>,
        v: impl IntoIterator<Item = F>,
    ) -> impl Iterator<Item = F> {
        u.into_iter().zip(v).map(move |(u, v)| match self {
            Self::Max => F::max(u, v),
            Self::ProbOr => u + v - u * v,
            Self::BoundedSum => F::min(F::one(), u + v),
        })
    }
}

/// Method for defuzzificating the aggregated membership function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DefuzzificationOp {
    /// Discrete center of area: `sum(x * mu) / sum(mu)` over the domain points
    #[default]
    Centroid,
    /// Center of gravity of the piecewise-linear curve through the samples
    Cog,
    /// Bisector of Area
    Boa,
    /// Mean of the values for which the membership function is maximum
    Mom,
    /// Largest value for which the membership function is maximum
    Lom,
    /// Smallest value for which the membership function is maximum
    Som,
}

impl DefuzzificationOp {
    pub fn call<F: Float + Sum>(self, universe: &[F], membership: &[F]) -> Result<F> {
        debug_assert_eq!(universe.len(), membership.len());

        if membership.iter().all(|m| *m == F::zero()) {
            return Err(Error::UndefinedDefuzzification);
        }

        let two = F::one() + F::one();

        match self {
            Self::Centroid => {
                let num = universe.iter().zip(membership).map(|(x, m)| *x * *m).sum::<F>();
                let den = membership.iter().copied().sum::<F>();

                Ok(num / den)
            },
            Self::Cog => {
                let three = two + F::one();
                let mut num = F::zero();
                let mut den = F::zero();

                for (x, m) in universe.windows(2).zip(membership.windows(2)) {
                    let base = x[1] - x[0];
                    let area_rect = F::min(m[0], m[1]) * base;
                    let center_rect = x[0] + base / two;
                    let (area_tri, center_tri) = if m[1] == m[0] {
                        (F::zero(), F::zero())
                    } else if m[1] > m[0] {
                        (base * (m[1] - m[0]) / two, x[0] + two / three * base)
                    } else {
                        (base * (m[0] - m[1]) / two, x[0] + F::one() / three * base)
                    };

                    num = num + area_rect * center_rect + area_tri * center_tri;
                    den = den + area_rect + area_tri;
                }

                if den == F::zero() {
                    return Err(Error::UndefinedDefuzzification);
                }

                Ok(num / den)
            },
            Self::Boa => {
                let areas: Vec<F> = universe
                    .windows(2)
                    .zip(membership.windows(2))
                    .map(|(x, m)| (m[0] + m[1]) * (x[1] - x[0]) / two)
                    .collect();
                let target = areas.iter().copied().sum::<F>() / two;
                let mut cum_area = F::zero();

                for (i, area) in areas.iter().copied().enumerate() {
                    if area > F::zero() && cum_area + area >= target {
                        let xp = [cum_area, cum_area + area];
                        let fp = [universe[i], universe[i + 1]];

                        return Ok(interp(target, &xp, &fp));
                    }

                    cum_area = cum_area + area;
                }

                Err(Error::UndefinedDefuzzification)
            },
            Self::Mom | Self::Lom | Self::Som => {
                let maximum = membership.iter().copied().fold(F::zero(), F::max);
                let at_max = universe
                    .iter()
                    .copied()
                    .zip(membership.iter().copied())
                    .filter_map(|(u, m)| (m == maximum).then_some(u));

                let defuzzed = match self {
                    Self::Lom => at_max.fold(F::neg_infinity(), F::max),
                    Self::Som => at_max.fold(F::infinity(), F::min),
                    _ => {
                        let (len, sum) = at_max
                            .fold((F::zero(), F::zero()), |(len, sum), u| (len + F::one(), sum + u));

                        sum / len
                    },
                };

                Ok(defuzzed)
            },
        }
    }
}

impl fmt::Display for ImplicationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Prod => "prod",
            Self::Min => "min",
        })
    }
}

impl FromStr for ImplicationOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "prod" | "product" | "larsen" => Ok(Self::Prod),
            "min" | "mamdani" => Ok(Self::Min),
            _ => Err(unknown("implication operator", s)),
        }
    }
}

impl fmt::Display for AggregationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Max => "max",
            Self::ProbOr => "prob-or",
            Self::BoundedSum => "bounded-sum",
        })
    }
}

impl FromStr for AggregationOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "max" => Ok(Self::Max),
            "prob-or" => Ok(Self::ProbOr),
            "bounded-sum" => Ok(Self::BoundedSum),
            _ => Err(unknown("aggregation operator", s)),
        }
    }
}

impl fmt::Display for DefuzzificationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Centroid => "centroid",
            Self::Cog => "cog",
            Self::Boa => "boa",
            Self::Mom => "mom",
            Self::Lom => "lom",
            Self::Som => "som",
        })
    }
}

impl FromStr for DefuzzificationOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "centroid" => Ok(Self::Centroid),
            "cog" => Ok(Self::Cog),
            "boa" | "bisector" => Ok(Self::Boa),
            "mom" => Ok(Self::Mom),
            "lom" => Ok(Self::Lom),
            "som" => Ok(Self::Som),
            _ => Err(unknown("defuzzification method", s)),
        }
    }
}

fn unknown(kind: &'static str, name: &str) -> Error {
    Error::UnknownName {
        kind,
        name: name.to_owned(),
    }
}

#[cfg(test)]
const ALL_DEFUZZ: [DefuzzificationOp; 6] = [
    DefuzzificationOp::Centroid,
    DefuzzificationOp::Cog,
    DefuzzificationOp::Boa,
    DefuzzificationOp::Mom,
    DefuzzificationOp::Lom,
    DefuzzificationOp::Som,
];

#[test]
fn test_symmetric_triangle_defuzzes_to_peak() {
    let universe: Vec<f64> = (0..=10).map(f64::from).collect();
    let membership: Vec<f64> = universe.iter().map(|x| 1. - (x - 5.).abs() / 5.).collect();

    for op in ALL_DEFUZZ {
        let defuzzed = op.call(&universe, &membership).unwrap();

        assert!((defuzzed - 5.).abs() < 1e-12, "{op}: {defuzzed}");
    }
}

#[test]
fn test_plateau_maxima() {
    let universe = [0., 1., 2., 3., 4.];
    let membership = [0., 1., 1., 1., 0.];

    assert_eq!(DefuzzificationOp::Mom.call(&universe, &membership), Ok(2.));
    assert_eq!(DefuzzificationOp::Som.call(&universe, &membership), Ok(1.));
    assert_eq!(DefuzzificationOp::Lom.call(&universe, &membership), Ok(3.));
}

#[test]
fn test_centroid_of_right_shoulder() {
    let universe: Vec<f64> = (0..=100).map(f64::from).collect();
    let membership: Vec<f64> = universe.iter().map(|x| if *x > 60. { (x - 60.) / 40. } else { 0. }).collect();
    let centroid = DefuzzificationOp::Centroid.call(&universe, &membership).unwrap();

    // 60 + sum(k^2) / sum(k) for k in 1..=40
    assert!((centroid - 87.).abs() < 1e-9);
}

#[test]
fn test_zero_set_is_undefined() {
    let universe = [0., 1., 2.];
    let membership = [0., 0., 0.];

    for op in ALL_DEFUZZ {
        assert_eq!(op.call(&universe, &membership), Err(Error::UndefinedDefuzzification));
    }
}

#[test]
fn test_implication_ops() {
    let curve = [0., 0.5, 1.];

    assert_eq!(ImplicationOp::Prod.call(0.5, &curve), vec![0., 0.25, 0.5]);
    assert_eq!(ImplicationOp::Min.call(0.5, &curve), vec![0., 0.5, 0.5]);
}

#[test]
fn test_aggregation_ops() {
    let u = [0.2, 0.6];
    let v = [0.5, 0.6];

    assert_eq!(AggregationOp::Max.call(u, v).collect::<Vec<f64>>(), vec![0.5, 0.6]);
    assert_eq!(AggregationOp::BoundedSum.call(u, v).collect::<Vec<f64>>(), vec![0.7, 1.]);
    assert_eq!(AggregationOp::ProbOr.call([0.5], [0.5]).collect::<Vec<f64>>(), vec![0.75]);
}

#[test]
fn test_operator_names_round_trip() {
    for op in ALL_DEFUZZ {
        assert_eq!(op.to_string().parse::<DefuzzificationOp>(), Ok(op));
    }
    assert_eq!("prob_or".parse::<AggregationOp>(), Ok(AggregationOp::ProbOr));
    assert_eq!("Mamdani".parse::<ImplicationOp>(), Ok(ImplicationOp::Min));
    assert!("median".parse::<DefuzzificationOp>().is_err());
}
