//! Clarifying questions for unresolved facts; at most three, highest risk first.

use super::domain::{field, Facts};
use crate::generation::TextGenerator;
use tracing::warn;

/// Fields worth asking about, ordered by how strongly an unknown value
/// distorts the classification.
pub const QUESTION_PRIORITY: [&str; 11] = [
    field::INJURY,
    field::PAIN_NOW,
    field::HOSPITAL_VISIT,
    field::OPPONENT_MENTIONS_HOSPITAL,
    field::OPPONENT_MENTIONS_INSURANCE,
    field::VEHICLE_DAMAGE,
    field::EVIDENCE,
    field::ADAS_SENSOR,
    field::VEHICLE_TYPE,
    field::OPPONENT_ATTITUDE,
    field::SPEED,
];

pub(crate) const MAX_QUESTIONS: usize = 3;

const QUESTION_SYSTEM_PROMPT: &str = "\
You do not draw conclusions; you only write questions.
Write short closed-ended questions (yes/no or a small set of choices) that narrow down the unresolved fields.
One question per line, three at most. Never ask about money.";

/// Unknown priority fields in priority order, capped at [`MAX_QUESTIONS`].
pub(crate) fn unresolved_targets(facts: &Facts) -> Vec<&'static str> {
    QUESTION_PRIORITY
        .iter()
        .copied()
        .filter(|key| facts.is_unknown(key))
        .take(MAX_QUESTIONS)
        .collect()
}

/// Generate up to three questions for the given targets. Collaborator
/// failures (or unparseable output) fall back to the canned question table.
pub(crate) async fn generate(
    generator: &dyn TextGenerator,
    facts: &Facts,
    targets: &[&'static str],
) -> Vec<String> {
    if targets.is_empty() {
        return Vec::new();
    }

    let request = question_request(facts, targets);
    match generator.generate(QUESTION_SYSTEM_PROMPT, &request).await {
        Ok(text) => {
            let parsed = parse_questions(&text);
            if parsed.is_empty() {
                fallback_questions(targets)
            } else {
                parsed
            }
        }
        Err(err) => {
            warn!(error = %err, "text generator unavailable, using templated questions");
            fallback_questions(targets)
        }
    }
}

fn question_request(facts: &Facts, targets: &[&'static str]) -> String {
    let mut out = String::from("[unresolved fields]\n");
    for target in targets {
        out.push_str(&format!("- {target}\n"));
    }
    out.push_str("\n[current facts]\n");
    for (key, value) in facts.iter() {
        out.push_str(&format!("{key}: {value}\n"));
    }
    out.push_str("\nWrite at most three questions, one per line.");
    out
}

/// Up to three non-empty lines, leading list markers trimmed.
fn parse_questions(text: &str) -> Vec<String> {
    let mut questions = Vec::new();
    for line in text.lines() {
        let trimmed = trim_list_marker(line.trim());
        if trimmed.is_empty() {
            continue;
        }
        questions.push(trimmed.to_string());
        if questions.len() >= MAX_QUESTIONS {
            break;
        }
    }
    questions
}

fn trim_list_marker(line: &str) -> &str {
    let rest = line
        .trim_start_matches(|c: char| matches!(c, '-' | '*' | '•'))
        .trim_start();
    // "1." / "2)" style prefixes
    let without_digits = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    if without_digits.len() < rest.len() {
        let mut chars = without_digits.chars();
        if let Some('.') | Some(')') = chars.next() {
            return chars.as_str().trim_start();
        }
    }
    rest
}

fn fallback_questions(targets: &[&'static str]) -> Vec<String> {
    targets
        .iter()
        .filter_map(|target| fallback_question(target))
        .map(str::to_string)
        .collect()
}

fn fallback_question(key: &str) -> Option<&'static str> {
    let question = match key {
        field::INJURY => "Was anyone hurt? (none / ambiguous / present)",
        field::PAIN_NOW => "How is the pain right now? (none / mild / persistent / worsening)",
        field::HOSPITAL_VISIT => {
            "Has a hospital visit been scheduled or completed? (none / scheduled / completed)"
        }
        field::OPPONENT_MENTIONS_HOSPITAL => {
            "Did the other party mention a hospital visit or pain? (no / yes)"
        }
        field::OPPONENT_MENTIONS_INSURANCE => {
            "Did the other party mention or demand insurance processing? (no / yes)"
        }
        field::VEHICLE_DAMAGE => "How severe is the vehicle damage? (none / scratch / dented / broken)",
        field::EVIDENCE => {
            "How much evidence is secured, such as photos or dashcam footage? (sufficient / partial / none)"
        }
        field::ADAS_SENSOR => {
            "Are there parking sensors, radar, or cameras near the point of contact? (none / present)"
        }
        field::VEHICLE_TYPE => "What kind of vehicle is it? (domestic / imported / electric)",
        field::OPPONENT_ATTITUDE => {
            "How is the other party behaving? (amicable / ambiguous / aggressive)"
        }
        field::SPEED => "How hard was the impact? (low / medium / high)",
        _ => return None,
    };
    Some(question)
}
