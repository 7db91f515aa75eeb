use super::common::quiet_facts;
use crate::workflows::triage::domain::{field, Facts, RiskBucket, FACT_FIELDS, UNKNOWN};
use crate::workflows::triage::{policy, rules};

#[test]
fn normalizing_empty_facts_fills_every_fixed_key() {
    let facts = Facts::new().normalize();

    assert_eq!(facts.len(), FACT_FIELDS.len());
    for key in FACT_FIELDS {
        let expected = if key == field::NOTES { "" } else { UNKNOWN };
        assert_eq!(facts.value(key), expected, "default for {key}");
    }
}

#[test]
fn normalizing_complete_facts_is_a_noop() {
    let facts = quiet_facts();
    assert_eq!(facts.clone().normalize(), facts);
}

#[test]
fn normalization_keeps_unrecognized_keys() {
    let facts = Facts::new().with("weather", "rainy").normalize();
    assert_eq!(facts.value("weather"), "rainy");
    assert_eq!(facts.len(), FACT_FIELDS.len() + 1);
}

#[test]
fn quiet_facts_trigger_nothing() {
    let (red, yellow, score) = rules::score_facts(&quiet_facts());
    assert!(red.is_empty());
    assert!(yellow.is_empty());
    assert_eq!(score, 0);
}

#[test]
fn each_red_predicate_fires_alone() {
    let cases = [
        (field::INJURY, "ambiguous"),
        (field::INJURY, "present"),
        (field::PAIN_NOW, "persistent"),
        (field::PAIN_NOW, "worsening"),
        (field::HOSPITAL_VISIT, "scheduled"),
        (field::HOSPITAL_VISIT, "completed"),
        (field::OPPONENT_MENTIONS_HOSPITAL, "yes"),
        (field::OPPONENT_MENTIONS_INSURANCE, "yes"),
        (field::EVIDENCE, "none"),
        (field::VEHICLE_DAMAGE, "dented"),
        (field::VEHICLE_DAMAGE, "broken"),
        (field::VEHICLE_DAMAGE, "unknown"),
    ];

    for (key, value) in cases {
        let facts = quiet_facts().with(key, value);
        let (red, yellow, score) = rules::score_facts(&facts);
        assert_eq!(red.len(), 1, "{key}={value} should raise one red flag");
        assert!(yellow.is_empty(), "{key}={value} should raise no yellow flag");
        assert_eq!(score, 100);
    }
}

#[test]
fn each_yellow_predicate_fires_alone() {
    let cases = [
        (field::ADAS_SENSOR, "present"),
        (field::ADAS_SENSOR, "unknown"),
        (field::VEHICLE_TYPE, "imported"),
        (field::VEHICLE_TYPE, "electric"),
        (field::OPPONENT_ATTITUDE, "ambiguous"),
        (field::OPPONENT_ATTITUDE, "aggressive"),
        (field::SPEED, "unknown"),
        (field::EVIDENCE, "partial"),
    ];

    for (key, value) in cases {
        let facts = quiet_facts().with(key, value);
        let (red, yellow, score) = rules::score_facts(&facts);
        assert!(red.is_empty(), "{key}={value} should raise no red flag");
        assert_eq!(yellow.len(), 1, "{key}={value} should raise one yellow flag");
        assert_eq!(score, 10);
    }
}

#[test]
fn out_of_vocabulary_values_match_nothing() {
    let facts = quiet_facts()
        .with(field::INJURY, "severe!!")
        .with(field::SPEED, "warp");
    let (red, yellow, score) = rules::score_facts(&facts);
    assert!(red.is_empty());
    assert!(yellow.is_empty());
    assert_eq!(score, 0);
}

#[test]
fn score_is_weighted_flag_count() {
    let facts = quiet_facts()
        .with(field::INJURY, "present")
        .with(field::EVIDENCE, "none")
        .with(field::SPEED, "unknown")
        .with(field::VEHICLE_TYPE, "electric");
    let (red, yellow, score) = rules::score_facts(&facts);
    assert_eq!(score, red.len() as u32 * 100 + yellow.len() as u32 * 10);
    assert_eq!(score, 220);
}

#[test]
fn flag_order_matches_predicate_declaration_order() {
    let facts = quiet_facts()
        .with(field::PAIN_NOW, "worsening")
        .with(field::VEHICLE_DAMAGE, "broken")
        .with(field::INJURY, "present");
    let (red, _, _) = rules::score_facts(&facts);
    assert_eq!(red.len(), 3);
    assert!(red[0].contains("bodily injury"));
    assert!(red[1].contains("pain"));
    assert!(red[2].contains("damage"));

    // Re-evaluation reproduces the identical sequence.
    let (red_again, _, _) = rules::score_facts(&facts);
    assert_eq!(red, red_again);
}

#[test]
fn one_red_flag_dominates_any_yellow_count() {
    let red = vec!["r".to_string()];
    let yellow = vec!["y".to_string(); 5];
    assert_eq!(policy::classify_bucket(&red, &yellow), RiskBucket::Red);
}

#[test]
fn two_yellow_flags_reach_yellow() {
    let yellow = vec!["y1".to_string(), "y2".to_string()];
    assert_eq!(policy::classify_bucket(&[], &yellow), RiskBucket::Yellow);
}

#[test]
fn one_yellow_flag_stays_green() {
    let yellow = vec!["y1".to_string()];
    assert_eq!(policy::classify_bucket(&[], &yellow), RiskBucket::Green);
    assert_eq!(policy::classify_bucket(&[], &[]), RiskBucket::Green);
}
