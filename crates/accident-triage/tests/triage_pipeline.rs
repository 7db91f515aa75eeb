use std::sync::Arc;

use accident_triage::generation::NullTextGenerator;
use accident_triage::workflows::triage::{
    field, AnalysisInput, Facts, RiskBucket, TriageEngine,
};

fn offline_engine() -> TriageEngine {
    TriageEngine::new(Arc::new(NullTextGenerator)).expect("directive table compiles")
}

fn settled_facts() -> Facts {
    Facts::new()
        .with(field::ACCIDENT_TYPE, "stop_and_go")
        .with(field::SPEED, "low")
        .with(field::INJURY, "none")
        .with(field::PAIN_NOW, "none")
        .with(field::HOSPITAL_VISIT, "none")
        .with(field::VEHICLE_DAMAGE, "scratch")
        .with(field::ADAS_SENSOR, "none")
        .with(field::VEHICLE_TYPE, "domestic")
        .with(field::EVIDENCE, "sufficient")
        .with(field::OPPONENT_ATTITUDE, "amicable")
        .with(field::OPPONENT_MENTIONS_HOSPITAL, "no")
        .with(field::OPPONENT_MENTIONS_INSURANCE, "no")
}

#[tokio::test]
async fn reported_injury_alone_forces_red() {
    let engine = offline_engine();
    let facts = Facts::new().with(field::INJURY, "present");

    let assessment = engine
        .analyze(AnalysisInput {
            facts,
            context: None,
        })
        .await;

    assert_eq!(assessment.risk_bucket, RiskBucket::Red);
    assert!(assessment
        .flags_red
        .iter()
        .any(|flag| flag.contains("bodily injury")));
}

#[tokio::test]
async fn partial_evidence_and_unknown_speed_land_on_yellow() {
    let engine = offline_engine();
    let facts = settled_facts()
        .with(field::EVIDENCE, "partial")
        .with(field::SPEED, "unknown");

    let assessment = engine
        .analyze(AnalysisInput {
            facts,
            context: None,
        })
        .await;

    assert!(assessment.flags_red.is_empty());
    assert_eq!(assessment.flags_yellow.len(), 2);
    assert_eq!(assessment.risk_bucket, RiskBucket::Yellow);
    assert_eq!(assessment.risk_score, 20);
}

#[tokio::test]
async fn insurance_mention_goes_red_and_probes_the_unknown_sensor() {
    let engine = offline_engine();
    let facts = settled_facts()
        .with(field::ADAS_SENSOR, "unknown")
        .with(field::OPPONENT_MENTIONS_INSURANCE, "yes");

    let assessment = engine
        .analyze(AnalysisInput {
            facts,
            context: None,
        })
        .await;

    assert_eq!(assessment.flags_red.len(), 1);
    assert!(assessment.flags_red[0].contains("insurance"));
    assert_eq!(assessment.risk_bucket, RiskBucket::Red);
    assert!(!assessment.followup_questions.is_empty());
    assert!(assessment
        .followup_questions
        .iter()
        .any(|question| question.contains("sensors")));
}

#[tokio::test]
async fn classification_is_deterministic_without_a_collaborator() {
    let engine = offline_engine();
    let facts = settled_facts()
        .with(field::VEHICLE_DAMAGE, "unknown")
        .with(field::OPPONENT_ATTITUDE, "aggressive");

    let first = engine
        .analyze(AnalysisInput {
            facts: facts.clone(),
            context: None,
        })
        .await;
    let second = engine
        .analyze(AnalysisInput {
            facts,
            context: None,
        })
        .await;

    assert_eq!(first, second);
    assert_eq!(
        first.risk_score,
        first.flags_red.len() as u32 * 100 + first.flags_yellow.len() as u32 * 10
    );
}

#[tokio::test]
async fn final_answer_carries_the_fixed_sections() {
    let engine = offline_engine();

    let green = engine
        .analyze(AnalysisInput {
            facts: settled_facts(),
            context: None,
        })
        .await;
    assert_eq!(green.risk_bucket, RiskBucket::Green);
    assert!(green.final_answer.contains("Records to keep when settling privately"));
    assert!(green
        .final_answer
        .contains("Signals that move a private settlement back to insurance"));
    assert!(green.final_answer.contains("final choice"));
    assert!(!green.final_answer.contains("Questions worth answering"));

    let red = engine
        .analyze(AnalysisInput {
            facts: settled_facts()
                .with(field::INJURY, "ambiguous")
                .with(field::PAIN_NOW, "unknown"),
            context: None,
        })
        .await;
    assert!(red.final_answer.contains("Questions worth answering"));
    assert!(red.final_answer.contains("pain"));
}

#[tokio::test]
async fn retrieval_context_does_not_change_the_classification() {
    let engine = offline_engine();
    let facts = settled_facts().with(field::EVIDENCE, "none");

    let bare = engine
        .analyze(AnalysisInput {
            facts: facts.clone(),
            context: None,
        })
        .await;
    let with_context = engine
        .analyze(AnalysisInput {
            facts,
            context: Some("Article 3: small-claims settlements are revocable...".to_string()),
        })
        .await;

    assert_eq!(bare.risk_bucket, with_context.risk_bucket);
    assert_eq!(bare.flags_red, with_context.flags_red);
    assert_eq!(bare.risk_score, with_context.risk_score);
}
