//! # Topic Matcher Tests
//!
//! Checks the seeded priority list end to end and that custom rule lists keep
//! their order.

mod common;

use citizen_ai::{
    constants::DEFAULT_TOPIC,
    matcher::{default_rules, TopicMatcher, TopicRule},
};

#[test]
fn every_seeded_keyword_selects_its_own_topic() {
    let matcher = TopicMatcher::default();

    for rule in default_rules() {
        for keyword in &rule.keywords {
            assert_eq!(
                matcher.match_topic(keyword),
                rule.key,
                "bare keyword '{keyword}' matched the wrong topic"
            );
            let question = format!("How to apply for {keyword}?");
            assert_eq!(
                matcher.match_topic(&question),
                rule.key,
                "question '{question}' matched the wrong topic"
            );
        }
    }
}

#[test]
fn matching_ignores_case() {
    let matcher = TopicMatcher::default();
    assert_eq!(matcher.match_topic("How to apply for PAN card?"), "pan_card");
    assert_eq!(matcher.match_topic("AADHAAR UPDATE"), "aadhaar");
    assert_eq!(matcher.match_topic("Renew my Passport"), "passport");
}

#[test]
fn unmatched_query_resolves_to_default_topic() {
    let matcher = TopicMatcher::default();
    assert_eq!(matcher.match_topic("Good morning!"), DEFAULT_TOPIC);
    assert_eq!(matcher.match_topic(""), DEFAULT_TOPIC);
}

#[test]
fn overlapping_keywords_resolve_by_rule_order() {
    // "health insurance" is listed under both topics below; the first wins.
    let rules = vec![
        TopicRule::new("health_schemes", &["health insurance"]),
        TopicRule::new("ayushman_bharat", &["health insurance", "ayushman"]),
    ];
    let matcher = TopicMatcher::new(rules.clone());
    assert_eq!(matcher.match_topic("health insurance card"), "health_schemes");

    let reversed = TopicMatcher::new(rules.into_iter().rev().collect());
    assert_eq!(reversed.match_topic("health insurance card"), "ayushman_bharat");
}

#[test]
fn rules_can_be_read_from_json() {
    let json = r#"[
        {"key": "passport", "keywords": ["Passport", "visa"]},
        {"key": "pension", "keywords": ["pension"]}
    ]"#;
    let rules: Vec<TopicRule> = serde_json::from_str(json).unwrap();
    let matcher = TopicMatcher::new(rules);

    assert_eq!(matcher.rules().len(), 2);
    assert_eq!(matcher.match_topic("need a VISA"), "passport");
    assert_eq!(matcher.match_topic("my passport"), "passport");
    assert_eq!(matcher.match_topic("aadhaar"), DEFAULT_TOPIC);
}
