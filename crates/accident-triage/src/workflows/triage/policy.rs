//! Bucket assignment from flag counts; first rule wins.

use super::domain::RiskBucket;

/// Any red flag forces RED regardless of the yellow count; a lone yellow
/// flag is not enough to leave GREEN. Derivable from the flag lists alone.
pub(crate) fn classify_bucket(flags_red: &[String], flags_yellow: &[String]) -> RiskBucket {
    if !flags_red.is_empty() {
        RiskBucket::Red
    } else if flags_yellow.len() >= 2 {
        RiskBucket::Yellow
    } else {
        RiskBucket::Green
    }
}
