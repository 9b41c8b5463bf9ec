//! # Response Validator Tests

mod common;

use citizen_ai::validator::{
    assess, confidence, confidence_breakdown, is_adequate, AdequacyVerdict, RejectionReason,
};
use common::GOOD_PASSPORT_ANSWER;

const QUERY: &str = "How do I apply for a passport?";

#[test]
fn empty_and_short_candidates_are_rejected() {
    for query in [QUERY, "", "pan"] {
        assert!(!is_adequate("", query));
        assert!(!is_adequate("   \n\t", query));
        assert!(!is_adequate("ok sure", query));
    }
    assert_eq!(
        assess("one two three four", QUERY),
        AdequacyVerdict::Rejected(RejectionReason::TooShort)
    );
}

#[test]
fn ai_self_reference_is_rejected_at_any_length() {
    let short = "As an AI, I can help you with detailed step by step procedure and documents...";
    assert!(!is_adequate(short, QUERY));

    let long = format!("{GOOD_PASSPORT_ANSWER}\nAs an AI language model I may be wrong.");
    assert_eq!(
        assess(&long, QUERY),
        AdequacyVerdict::Rejected(RejectionReason::GenericAiResponse)
    );
}

#[test]
fn answers_need_two_domain_signals() {
    let vague = "The passport office is open on weekdays and staff are friendly there.";
    assert_eq!(
        assess(vague, QUERY),
        AdequacyVerdict::Rejected(RejectionReason::InsufficientDomainSignal)
    );

    let useful = "Fill the online form and carry the required papers to the passport office.";
    assert!(is_adequate(useful, QUERY));
}

#[test]
fn structured_answer_is_accepted_with_high_confidence() {
    assert!(is_adequate(GOOD_PASSPORT_ANSWER, QUERY));
    let score = confidence(GOOD_PASSPORT_ANSWER, QUERY);
    assert!(score >= 0.7, "score was {score}");
    assert!(score <= 1.0);
}

#[test]
fn confidence_components_respect_their_caps() {
    let breakdown = confidence_breakdown(GOOD_PASSPORT_ANSWER, QUERY);
    assert!((breakdown.length - 0.2).abs() < 1e-9);
    assert!((breakdown.specificity - 0.3).abs() < 1e-9);
    assert!((breakdown.structure - 0.2).abs() < 1e-9);
    assert!(breakdown.relevance > 0.0 && breakdown.relevance <= 0.3);
}

#[test]
fn confidence_grows_with_specificity_up_to_the_cap() {
    // 200+ characters of filler that shares no word with the query and names
    // no section, so only the specificity component varies.
    let filler = "zzz ".repeat(60);
    let markers = ["₹", "rupees", "days", "months", "form", "website"];

    let mut previous = confidence(&filler, "lorem");
    for n in 1..=markers.len() {
        let candidate = format!("{filler}{}", markers[..n].join(" "));
        let score = confidence(&candidate, "lorem");
        assert!(score >= previous, "{n} markers scored {score} < {previous}");
        if n <= 5 {
            assert!(score > previous, "marker {n} should raise the score");
        } else {
            assert_eq!(score, previous, "markers past the cap add nothing");
        }
        previous = score;
    }
}

#[test]
fn confidence_is_always_clamped() {
    for candidate in ["", "a", GOOD_PASSPORT_ANSWER] {
        let score = confidence(candidate, candidate);
        assert!((0.0..=1.0).contains(&score));
    }
}
