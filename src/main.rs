//! fuzzy-priority: score the donation urgency of one crisis region

use anyhow::{Context, Result};
use clap::Parser;
use fuzzy_priority::{
    AggregationOp, Allocation, DefuzzificationOp, FuzzyPriorityEngine, ImplicationOp, Indicators,
    InferenceConfig, Memberships, Outputs, Term,
};
use serde::Serialize;
use tracing::info;

/// Command-line arguments for fuzzy-priority
#[derive(Parser, Debug)]
#[command(name = "fuzzy-priority")]
#[command(about = "Fuzzy donation urgency score for a humanitarian crisis region")]
#[command(version, allow_negative_numbers = true)]
struct Args {
    /// Population pressure in [0, 100]
    #[arg(short, long, env = "FUZZY_PRIORITY_POPULATION")]
    population: f64,

    /// Aid-access deficiency in [0, 100]
    #[arg(short, long, env = "FUZZY_PRIORITY_AID_ACCESS_DEFICIENCY")]
    aid_access_deficiency: f64,

    /// Crisis impact in [0, 100]
    #[arg(short, long, env = "FUZZY_PRIORITY_IMPACT")]
    impact: f64,

    /// Implication operator: prod or min
    #[arg(long, default_value = "prod", env = "FUZZY_PRIORITY_IMPLICATION")]
    implication: ImplicationOp,

    /// Aggregation operator: max, prob-or or bounded-sum
    #[arg(long, default_value = "max", env = "FUZZY_PRIORITY_AGGREGATION")]
    aggregation: AggregationOp,

    /// Defuzzification method: centroid, cog, boa, mom, lom or som
    #[arg(long, default_value = "centroid", env = "FUZZY_PRIORITY_DEFUZZIFICATION")]
    defuzzification: DefuzzificationOp,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> InferenceConfig {
        InferenceConfig::default()
            .with_implication(self.implication)
            .with_aggregation(self.aggregation)
            .with_defuzzification(self.defuzzification)
    }
}

#[derive(Debug, Serialize)]
struct Report {
    indicators: Indicators,
    config: InferenceConfig,
    strengths: Memberships,
    score: f64,
    band: Term,
    allocation: Allocation,
}

impl Report {
    fn new(config: InferenceConfig, outputs: &Outputs) -> Self {
        Self {
            indicators: *outputs.indicators(),
            config,
            strengths: outputs.strengths().clone(),
            score: outputs.score(),
            band: outputs.band(),
            allocation: outputs.allocation(),
        }
    }

    fn print(&self) {
        println!("Urgency score: {:.2} / 100 ({} urgency)", self.score, self.band);
        println!("Rule strengths:");
        for term in Term::ALL {
            println!("  {:<8} {:.3}", term, self.strengths.get(term));
        }
        println!("Suggested donation allocation:");
        for (sector, value) in self.allocation.entries() {
            println!("  {:<24} {:.2}", sector, value);
        }
    }
}

fn run(args: &Args) -> Result<Report> {
    let config = args.config();
    let indicators = Indicators::new(args.population, args.aid_access_deficiency, args.impact)
        .context("Invalid crisis indicators")?;
    let engine = FuzzyPriorityEngine::with_config(config);
    let outputs = engine.infer(&indicators).context("Inference failed")?;

    Ok(Report::new(config, &outputs))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fuzzy_priority=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.config();

    info!(
        implication = %config.implication,
        aggregation = %config.aggregation,
        defuzzification = %config.defuzzification,
        "Starting inference"
    );

    let report = run(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }

    Ok(())
}

#[cfg(test)]
fn parse(extra: &[&str]) -> std::result::Result<Args, clap::Error> {
    let base = ["fuzzy-priority", "-p", "98", "-a", "5", "-i", "100"];

    Args::try_parse_from(base.iter().chain(extra))
}

#[test]
fn test_operator_flags_parse() {
    let args = parse(&[
        "--aggregation",
        "prob_or",
        "--defuzzification",
        "cog",
        "--implication",
        "min",
    ])
    .unwrap();
    let config = args.config();

    assert_eq!(config.aggregation, AggregationOp::ProbOr);
    assert_eq!(config.defuzzification, DefuzzificationOp::Cog);
    assert_eq!(config.implication, ImplicationOp::Min);
    assert!(!args.json);
}

#[test]
fn test_unknown_operator_is_rejected() {
    assert!(parse(&["--defuzzification", "median"]).is_err());
    assert!(parse(&["--aggregation", "sum"]).is_err());
}

#[test]
fn test_out_of_range_indicator_fails() {
    let argv = ["fuzzy-priority", "--population", "-1", "-a", "5", "-i", "100"];
    let args = Args::try_parse_from(argv).unwrap();

    assert_eq!(args.population, -1.);

    let err = run(&args).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<fuzzy_priority::Error>(),
        Some(fuzzy_priority::Error::InvalidInputRange { variable: "population", .. })
    ));
}

#[test]
fn test_json_report_shape() {
    let args = parse(&["--json"]).unwrap();
    let report = run(&args).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(args.json);
    assert_eq!(json["band"], "high");
    assert_eq!(json["indicators"]["population"], 98.);
    assert_eq!(json["indicators"]["aid_access_deficiency"], 5.);
    assert_eq!(json["strengths"]["high"], 1.);
    assert_eq!(json["config"]["defuzzification"], "centroid");
    assert!((json["score"].as_f64().unwrap() - 87.).abs() < 1e-9);
    assert!((json["allocation"]["food_and_water"].as_f64().unwrap() - 34.8).abs() < 1e-9);
}
