//! Risk triage pipeline: normalize, score, bucket, explain, question, compose.
//!
//! A strictly sequential call chain with one data-dependent branch (the
//! clarifying-question stage). The rule engine decides the bucket; the
//! text-generation collaborator only ever phrases explanations around it.

pub mod domain;
mod explain;
pub mod filter;
mod policy;
mod questions;
mod report;
pub mod router;
mod rules;

#[cfg(test)]
mod tests;

pub use domain::{field, Facts, RiskBucket, FACT_FIELDS, UNKNOWN};
pub use filter::{DirectiveFilter, DirectivePattern, FilterError, FORBIDDEN_DIRECTIVES};
pub use questions::QUESTION_PRIORITY;
pub use router::triage_router;

use crate::generation::TextGenerator;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// One analysis request: the caller's (possibly partial) facts plus optional
/// pre-ranked reference material from the retrieval side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisInput {
    #[serde(default)]
    pub facts: Facts,
    #[serde(default)]
    pub context: Option<String>,
}

/// Terminal artifact of one pipeline run. Built fresh per request and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub flags_red: Vec<String>,
    pub flags_yellow: Vec<String>,
    pub risk_score: u32,
    pub risk_bucket: RiskBucket,
    pub explanation: String,
    pub followup_questions: Vec<String>,
    pub final_answer: String,
}

/// Sequential triage pipeline. The generator capability is injected once at
/// construction; the explanation and question stages fall back to
/// deterministic templates whenever it fails, so `analyze` itself cannot.
pub struct TriageEngine {
    generator: Arc<dyn TextGenerator>,
    filter: DirectiveFilter,
}

impl TriageEngine {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Result<Self, FilterError> {
        Ok(Self {
            generator,
            filter: DirectiveFilter::standard()?,
        })
    }

    pub fn with_filter(generator: Arc<dyn TextGenerator>, filter: DirectiveFilter) -> Self {
        Self { generator, filter }
    }

    /// Run the six stages in order over one request. Holds no state across
    /// invocations, so concurrent requests never share flag lists or scores.
    pub async fn analyze(&self, input: AnalysisInput) -> RiskAssessment {
        let facts = input.facts.normalize();

        let (flags_red, flags_yellow, risk_score) = rules::score_facts(&facts);
        let risk_bucket = policy::classify_bucket(&flags_red, &flags_yellow);
        debug!(bucket = %risk_bucket, score = risk_score, "facts classified");

        let explanation = explain::generate(
            self.generator.as_ref(),
            &self.filter,
            &facts,
            risk_bucket,
            &flags_red,
            &flags_yellow,
            input.context.as_deref(),
        )
        .await;

        // The single branch: clarifying questions only when the bucket is
        // not GREEN and a priority field is still unresolved.
        let targets = questions::unresolved_targets(&facts);
        let followup_questions = if risk_bucket != RiskBucket::Green && !targets.is_empty() {
            questions::generate(self.generator.as_ref(), &facts, &targets).await
        } else {
            Vec::new()
        };

        let final_answer = report::compose(&explanation, &followup_questions);

        RiskAssessment {
            flags_red,
            flags_yellow,
            risk_score,
            risk_bucket,
            explanation,
            followup_questions,
            final_answer,
        }
    }
}
