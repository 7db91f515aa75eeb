//! Structured accident facts and the three-level risk classification.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Sentinel stored for any categorical attribute the caller left unresolved.
pub const UNKNOWN: &str = "unknown";

/// The closed attribute set. Each doc line lists the recognized vocabulary;
/// anything outside it simply fails to match the rule predicates.
pub mod field {
    /// stop_and_go | parking | lane_change | rear_end | other | unknown
    pub const ACCIDENT_TYPE: &str = "accident_type";
    /// low | medium | high | unknown
    pub const SPEED: &str = "speed";
    /// none | ambiguous | present | unknown
    pub const INJURY: &str = "injury";
    /// none | mild | persistent | worsening | unknown
    pub const PAIN_NOW: &str = "pain_now";
    /// none | scheduled | completed | unknown
    pub const HOSPITAL_VISIT: &str = "hospital_visit";
    /// none | scratch | dented | broken | unknown
    pub const VEHICLE_DAMAGE: &str = "vehicle_damage";
    /// none | present | unknown
    pub const ADAS_SENSOR: &str = "adas_sensor";
    /// domestic | imported | electric | unknown
    pub const VEHICLE_TYPE: &str = "vehicle_type";
    /// sufficient | partial | none | unknown
    pub const EVIDENCE: &str = "evidence";
    /// amicable | ambiguous | aggressive | unknown
    pub const OPPONENT_ATTITUDE: &str = "opponent_attitude";
    /// no | yes | unknown
    pub const OPPONENT_MENTIONS_HOSPITAL: &str = "opponent_mentions_hospital";
    /// no | yes | unknown
    pub const OPPONENT_MENTIONS_INSURANCE: &str = "opponent_mentions_insurance";
    /// free text
    pub const NOTES: &str = "notes";
}

/// Fixed attribute keys in declaration order.
pub const FACT_FIELDS: [&str; 13] = [
    field::ACCIDENT_TYPE,
    field::SPEED,
    field::INJURY,
    field::PAIN_NOW,
    field::HOSPITAL_VISIT,
    field::VEHICLE_DAMAGE,
    field::ADAS_SENSOR,
    field::VEHICLE_TYPE,
    field::EVIDENCE,
    field::OPPONENT_ATTITUDE,
    field::OPPONENT_MENTIONS_HOSPITAL,
    field::OPPONENT_MENTIONS_INSURANCE,
    field::NOTES,
];

/// One accident situation as categorical tokens. Keys outside the fixed set
/// pass through untouched and are ignored by every pipeline stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Facts(BTreeMap<String, String>);

impl Facts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for one attribute.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    /// Current value of an attribute; empty for keys never set.
    pub fn value(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn is_unknown(&self, key: &str) -> bool {
        self.value(key) == UNKNOWN
    }

    /// Fill every fixed attribute missing from the map with the sentinel
    /// (empty string for notes). Existing values pass through unchanged, so
    /// normalizing an already-complete map is a no-op.
    pub fn normalize(mut self) -> Self {
        for key in FACT_FIELDS {
            let default = if key == field::NOTES { "" } else { UNKNOWN };
            self.0
                .entry(key.to_string())
                .or_insert_with(|| default.to_string());
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, String>> for Facts {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

/// Risk traffic light. Ordered so that `Green < Yellow < Red`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskBucket {
    Green,
    Yellow,
    Red,
}

impl RiskBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBucket::Green => "GREEN",
            RiskBucket::Yellow => "YELLOW",
            RiskBucket::Red => "RED",
        }
    }
}

impl fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
