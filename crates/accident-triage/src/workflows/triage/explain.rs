//! Explanation stage: collaborator-backed prose with a deterministic fallback.

use super::domain::{field, Facts, RiskBucket};
use super::filter::DirectiveFilter;
use crate::generation::TextGenerator;
use tracing::{debug, warn};

const EXPLAIN_SYSTEM_PROMPT: &str = "\
You assist with minor traffic accident triage but you never make the decision.
Never issue a directive conclusion such as telling the user to file an insurance claim or to settle privately.
Take the bucket (GREEN/YELLOW/RED) and the flags exactly as given and describe only the risk factors behind them.
Structure the answer as: traffic-light status, positive signals, risk signals, records worth keeping, and a note that the final choice rests with the user.";

/// Produce the explanation text. Collaborator output is stripped through the
/// directive filter; any collaborator failure degrades to the template.
pub(crate) async fn generate(
    generator: &dyn TextGenerator,
    filter: &DirectiveFilter,
    facts: &Facts,
    bucket: RiskBucket,
    flags_red: &[String],
    flags_yellow: &[String],
    context: Option<&str>,
) -> String {
    let request = explain_request(facts, bucket, flags_red, flags_yellow, context);
    match generator.generate(EXPLAIN_SYSTEM_PROMPT, &request).await {
        Ok(text) => {
            debug!(chars = text.len(), "collaborator explanation received");
            filter.strip(&text)
        }
        Err(err) => {
            warn!(error = %err, "text generator unavailable, using templated explanation");
            fallback_explanation(facts, bucket, flags_red, flags_yellow)
        }
    }
}

fn explain_request(
    facts: &Facts,
    bucket: RiskBucket,
    flags_red: &[String],
    flags_yellow: &[String],
    context: Option<&str>,
) -> String {
    let mut out = String::from("[facts]\n");
    for (key, value) in facts.iter() {
        out.push_str(&format!("{key}: {value}\n"));
    }

    out.push_str(&format!("\n[bucket]\n{bucket}\n\n[red flags]\n"));
    push_flag_lines(&mut out, flags_red);
    out.push_str("\n[yellow flags]\n");
    push_flag_lines(&mut out, flags_yellow);

    if let Some(context) = context {
        out.push_str(&format!("\n[reference material]\n{context}\n"));
    }

    out.push_str("\nDescribe the risk factors above without any directive conclusion.");
    out
}

fn push_flag_lines(out: &mut String, flags: &[String]) {
    if flags.is_empty() {
        out.push_str("(none)\n");
        return;
    }
    for flag in flags {
        out.push_str(&format!("- {flag}\n"));
    }
}

/// Deterministic template used whenever the collaborator is unavailable.
fn fallback_explanation(
    facts: &Facts,
    bucket: RiskBucket,
    flags_red: &[String],
    flags_yellow: &[String],
) -> String {
    let mut positives: Vec<&str> = Vec::new();
    if facts.value(field::INJURY) == "none" {
        positives.push("no sign of bodily injury");
    }
    if facts.value(field::PAIN_NOW) == "none" {
        positives.push("no pain at the moment");
    }
    if facts.value(field::HOSPITAL_VISIT) == "none" {
        positives.push("no hospital visit planned or made");
    }
    if facts.value(field::EVIDENCE) == "sufficient" {
        positives.push("evidence secured (photos/dashcam)");
    }
    if matches!(facts.value(field::VEHICLE_DAMAGE), "none" | "scratch") {
        positives.push("damage likely limited to the surface");
    }

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("Risk status: {bucket} (a signal, not a decision)"));
    lines.push(String::new());
    lines.push("Positive signals:".to_string());
    if positives.is_empty() {
        lines.push("- too little information; further confirmation would help".to_string());
    } else {
        lines.push(format!("- {}", positives.join(", ")));
    }
    lines.push(String::new());
    lines.push("Risk signals:".to_string());
    for flag in flags_red {
        lines.push(format!("- [red] {flag}"));
    }
    for flag in flags_yellow {
        lines.push(format!("- [yellow] {flag}"));
    }
    if flags_red.is_empty() && flags_yellow.is_empty() {
        lines.push("- no notable risk signals".to_string());
    }
    lines.push(String::new());
    lines.push(
        "This is decision-support information only; the final choice and responsibility rest with the user."
            .to_string(),
    );
    lines.join("\n")
}
