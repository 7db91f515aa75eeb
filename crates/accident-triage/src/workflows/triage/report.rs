//! Final report assembly. Formatting only: this stage never alters the
//! bucket, the flags, or the score.

const RECORD_KEEPING: &str = "\
Records to keep when settling privately:
- Photos of both license plates, close-ups of the contact points, and the wider scene
- The original dashcam footage, stored in a second location if possible
- A written exchange (text or messenger) confirming no injuries and no further claims";

const CONVERSION_TRIGGERS: &str = "\
Signals that move a private settlement back to insurance:
- New pain or a hospital mention, by either party
- Repair costs running past the estimate (sensors, inner bumper structure, wider paint work)
- The other party's attitude turning: refusing records, disputing fault, escalating demands
- Evidence lost or missing";

const DISCLAIMER: &str =
    "This is general decision-support information; the final choice and its outcome rest with the user.";

/// Concatenate the final answer in fixed order; the questions section is
/// omitted when empty.
pub(crate) fn compose(explanation: &str, questions: &[String]) -> String {
    let mut out = String::new();
    out.push_str(explanation.trim());
    out.push_str("\n\n---\n\n");
    out.push_str(RECORD_KEEPING);
    out.push_str("\n\n");
    out.push_str(CONVERSION_TRIGGERS);

    if !questions.is_empty() {
        out.push_str("\n\nQuestions worth answering (each answer sharpens the assessment):\n");
        for question in questions {
            out.push_str(&format!("- {question}\n"));
        }
        out.push('\n');
        out.push_str(DISCLAIMER);
    } else {
        out.push_str("\n\n");
        out.push_str(DISCLAIMER);
    }

    out
}
