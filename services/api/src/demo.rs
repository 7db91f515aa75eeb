use crate::infra::build_generator;
use accident_triage::config::AppConfig;
use accident_triage::error::AppError;
use accident_triage::workflows::triage::{field, AnalysisInput, Facts, RiskAssessment, TriageEngine};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyzeArgs {
    /// JSON file holding a facts object, e.g. {"injury": "none", ...}
    #[arg(long)]
    pub(crate) facts_json: Option<PathBuf>,
    /// Individual fact overrides as key=value pairs (repeatable)
    #[arg(long = "fact", value_parser = crate::infra::parse_fact_pair)]
    pub(crate) facts: Vec<(String, String)>,
    /// Pre-ranked reference material forwarded to the explanation stage
    #[arg(long)]
    pub(crate) context: Option<String>,
    /// Skip the text-generation collaborator and use the templated paths
    #[arg(long)]
    pub(crate) offline: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the text-generation collaborator and use the templated paths
    #[arg(long)]
    pub(crate) offline: bool,
}

pub(crate) async fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        facts_json,
        facts: overrides,
        context,
        offline,
    } = args;

    let config = AppConfig::load()?;
    let generator = build_generator(&config.generator, offline)?;
    let engine = TriageEngine::new(generator)?;

    let mut facts = match facts_json {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<Facts>(&raw)?
        }
        None => Facts::new(),
    };
    for (key, value) in overrides {
        facts.set(&key, &value);
    }

    let assessment = engine.analyze(AnalysisInput { facts, context }).await;
    render_assessment(&assessment);
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let generator = build_generator(&config.generator, args.offline)?;
    let engine = TriageEngine::new(generator)?;

    let assessment = engine
        .analyze(AnalysisInput {
            facts: demo_facts(),
            context: None,
        })
        .await;
    render_assessment(&assessment);
    Ok(())
}

/// Low-speed contact pulling away from a stop; the opponent has already
/// brought up insurance and the sensor situation is unresolved.
fn demo_facts() -> Facts {
    Facts::new()
        .with(field::ACCIDENT_TYPE, "stop_and_go")
        .with(field::SPEED, "low")
        .with(field::INJURY, "none")
        .with(field::PAIN_NOW, "none")
        .with(field::HOSPITAL_VISIT, "none")
        .with(field::VEHICLE_DAMAGE, "scratch")
        .with(field::ADAS_SENSOR, "unknown")
        .with(field::VEHICLE_TYPE, "domestic")
        .with(field::EVIDENCE, "sufficient")
        .with(field::OPPONENT_ATTITUDE, "amicable")
        .with(field::OPPONENT_MENTIONS_HOSPITAL, "no")
        .with(field::OPPONENT_MENTIONS_INSURANCE, "yes")
        .with(field::NOTES, "very light contact pulling away from a stop")
}

fn render_assessment(assessment: &RiskAssessment) {
    println!("================ FINAL ANSWER ================");
    println!();
    println!("{}", assessment.final_answer);
    println!();
    println!("================ CLASSIFICATION ================");
    println!("bucket: {}", assessment.risk_bucket);
    println!("score:  {}", assessment.risk_score);
    for flag in &assessment.flags_red {
        println!("red:    {flag}");
    }
    for flag in &assessment.flags_yellow {
        println!("yellow: {flag}");
    }
}
