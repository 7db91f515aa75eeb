use std::sync::Arc;

use crate::generation::{GenerationError, NullTextGenerator, TextGenerator};
use crate::workflows::triage::domain::field;
use crate::workflows::triage::{Facts, TriageEngine};
use async_trait::async_trait;

/// Generator that replays a fixed response, for exercising the primary path.
pub(crate) struct CannedTextGenerator {
    pub(crate) response: &'static str,
}

#[async_trait]
impl TextGenerator for CannedTextGenerator {
    async fn generate(&self, _system: &str, _user: &str) -> Result<String, GenerationError> {
        Ok(self.response.to_string())
    }
}

/// Engine with the collaborator forced unavailable.
pub(crate) fn offline_engine() -> TriageEngine {
    TriageEngine::new(Arc::new(NullTextGenerator)).expect("directive table compiles")
}

pub(crate) fn canned_engine(response: &'static str) -> TriageEngine {
    TriageEngine::new(Arc::new(CannedTextGenerator { response })).expect("directive table compiles")
}

/// Facts where every attribute holds a value that triggers no predicate.
pub(crate) fn quiet_facts() -> Facts {
    Facts::new()
        .with(field::ACCIDENT_TYPE, "rear_end")
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
        .with(field::NOTES, "")
}
