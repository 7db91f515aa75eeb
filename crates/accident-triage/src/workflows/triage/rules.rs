//! Deterministic predicate battery over normalized facts.
//!
//! Predicates run in declared order and append a label per match, so
//! identical facts always reproduce the same flag lists. Out-of-vocabulary
//! values match nothing, which degrades toward "more unknown" rather than
//! rejecting the request.

use super::domain::{field, Facts};

/// `facts -> (flags_red, flags_yellow, risk_score)` where the score is
/// `100 * |red| + 10 * |yellow|`.
pub(crate) fn score_facts(facts: &Facts) -> (Vec<String>, Vec<String>, u32) {
    let mut red: Vec<String> = Vec::new();
    let mut yellow: Vec<String> = Vec::new();

    // Red: any single match dominates the classification.
    if matches!(facts.value(field::INJURY), "ambiguous" | "present") {
        red.push("possible bodily injury (ambiguous/present)".to_string());
    }
    if matches!(facts.value(field::PAIN_NOW), "persistent" | "worsening") {
        red.push("pain persisting or worsening".to_string());
    }
    if matches!(facts.value(field::HOSPITAL_VISIT), "scheduled" | "completed") {
        red.push("hospital visit scheduled or completed".to_string());
    }
    if facts.value(field::OPPONENT_MENTIONS_HOSPITAL) == "yes" {
        red.push("opponent raised a hospital visit or pain".to_string());
    }
    if facts.value(field::OPPONENT_MENTIONS_INSURANCE) == "yes" {
        red.push("opponent raised or demanded insurance processing".to_string());
    }
    if facts.value(field::EVIDENCE) == "none" {
        red.push("no evidence secured (photos/dashcam missing)".to_string());
    }
    // Unknown damage counts as potentially severe here, while unknown speed
    // below is only a caution.
    if matches!(facts.value(field::VEHICLE_DAMAGE), "dented" | "broken" | "unknown") {
        red.push("damage extent unclear or potentially severe".to_string());
    }

    // Yellow: caution signals for a private settlement.
    if matches!(facts.value(field::ADAS_SENSOR), "present" | "unknown") {
        yellow.push("possible sensor/ADAS involvement (present/unknown)".to_string());
    }
    if matches!(facts.value(field::VEHICLE_TYPE), "imported" | "electric") {
        yellow.push("repair costs vary widely for this vehicle class (imported/electric)".to_string());
    }
    if matches!(facts.value(field::OPPONENT_ATTITUDE), "ambiguous" | "aggressive") {
        yellow.push("dispute risk from the opponent's attitude (ambiguous/aggressive)".to_string());
    }
    if facts.value(field::SPEED) == "unknown" {
        yellow.push("collision intensity unknown".to_string());
    }
    if facts.value(field::EVIDENCE) == "partial" {
        yellow.push("evidence only partially secured".to_string());
    }

    let score = red.len() as u32 * 100 + yellow.len() as u32 * 10;
    (red, yellow, score)
}
