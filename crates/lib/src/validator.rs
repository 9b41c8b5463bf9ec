//! # Response Validator
//!
//! Decides whether a generated service answer may be shown to a citizen and how
//! much to trust it. Both checks are pure functions of the text.

use serde::Serialize;
use std::{collections::HashSet, fmt};

const MIN_WORDS: usize = 5;
const DEFLECTION_MAX_CHARS: usize = 100;
const MIN_DOMAIN_SIGNALS: usize = 2;
const MIN_CHARS: usize = 50;

const DEFLECTION_PHRASES: [&str; 10] = [
    "i don't know",
    "i'm not sure",
    "i cannot help",
    "i don't have information",
    "sorry, i can't",
    "i'm unable to",
    "i don't understand",
    "please contact",
    "visit the website",
    "call the helpline",
];

const GENERIC_AI_PHRASES: [&str; 6] = [
    "as an ai",
    "as a language model",
    "i'm a bot",
    "i'm an assistant",
    "i cannot provide",
    "please consult",
];

const DOMAIN_SIGNALS: [&str; 16] = [
    "step",
    "procedure",
    "document",
    "form",
    "apply",
    "visit",
    "required",
    "process",
    "fee",
    "time",
    "website",
    "helpline",
    "eligibility",
    "criteria",
    "certificate",
    "registration",
];

const SPECIFICITY_MARKERS: [&str; 11] = [
    "₹",
    "rupees",
    "days",
    "months",
    "form",
    "documents",
    "procedure",
    "steps",
    "website",
    "helpline",
    "office",
];

const STRUCTURE_MARKERS: [&str; 5] = ["summary", "procedure", "documents", "fees", "contact"];

// Component weights and caps of the confidence score.
const LENGTH_WEIGHT: f64 = 0.2;
const LENGTH_SATURATION_CHARS: f64 = 200.0;
const SPECIFICITY_WEIGHT: f64 = 0.3;
const SPECIFICITY_CAP: f64 = 5.0;
const RELEVANCE_WEIGHT: f64 = 0.3;
const STRUCTURE_WEIGHT: f64 = 0.2;
const STRUCTURE_CAP: f64 = 3.0;

/// Why a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    Empty,
    TooShort,
    Deflection,
    GenericAiResponse,
    InsufficientDomainSignal,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RejectionReason::Empty => "empty response",
            RejectionReason::TooShort => "fewer than five words",
            RejectionReason::Deflection => "short deflection",
            RejectionReason::GenericAiResponse => "generic AI self-reference",
            RejectionReason::InsufficientDomainSignal => "insufficient service detail",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdequacyVerdict {
    Accepted,
    Rejected(RejectionReason),
}

impl AdequacyVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AdequacyVerdict::Accepted)
    }
}

fn count_present(haystack: &str, needles: &[&str]) -> usize {
    needles.iter().filter(|n| haystack.contains(*n)).count()
}

/// Runs the rejection rules in order and stops at the first that applies.
///
/// `_original_query` is part of the contract; adequacy is currently judged on
/// the candidate alone.
pub fn assess(candidate: &str, _original_query: &str) -> AdequacyVerdict {
    let clean = candidate.trim();
    if clean.is_empty() {
        return AdequacyVerdict::Rejected(RejectionReason::Empty);
    }

    if clean.split_whitespace().count() < MIN_WORDS {
        return AdequacyVerdict::Rejected(RejectionReason::TooShort);
    }

    let lower = clean.to_lowercase();
    let chars = clean.chars().count();

    // Long answers may mention "visit the website" in passing; only short
    // deflections are rejected.
    if chars < DEFLECTION_MAX_CHARS && count_present(&lower, &DEFLECTION_PHRASES) > 0 {
        return AdequacyVerdict::Rejected(RejectionReason::Deflection);
    }

    if count_present(&lower, &GENERIC_AI_PHRASES) > 0 {
        return AdequacyVerdict::Rejected(RejectionReason::GenericAiResponse);
    }

    if count_present(&lower, &DOMAIN_SIGNALS) < MIN_DOMAIN_SIGNALS || chars < MIN_CHARS {
        return AdequacyVerdict::Rejected(RejectionReason::InsufficientDomainSignal);
    }

    AdequacyVerdict::Accepted
}

pub fn is_adequate(candidate: &str, original_query: &str) -> bool {
    assess(candidate, original_query).is_accepted()
}

/// The four weighted components of a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ConfidenceBreakdown {
    pub length: f64,
    pub specificity: f64,
    pub relevance: f64,
    pub structure: f64,
}

impl ConfidenceBreakdown {
    /// The sum of the components, clamped to `[0, 1]`.
    pub fn total(&self) -> f64 {
        (self.length + self.specificity + self.relevance + self.structure).clamp(0.0, 1.0)
    }
}

pub fn confidence_breakdown(candidate: &str, original_query: &str) -> ConfidenceBreakdown {
    let clean = candidate.trim().to_lowercase();
    if clean.is_empty() {
        return ConfidenceBreakdown::default();
    }

    let length = (clean.chars().count() as f64 / LENGTH_SATURATION_CHARS).min(1.0) * LENGTH_WEIGHT;

    let specific = count_present(&clean, &SPECIFICITY_MARKERS) as f64;
    let specificity = (specific / SPECIFICITY_CAP).min(1.0) * SPECIFICITY_WEIGHT;

    let query_lower = original_query.to_lowercase();
    let query_words: HashSet<&str> = query_lower.split_whitespace().collect();
    let candidate_words: HashSet<&str> = clean.split_whitespace().collect();
    let shared = query_words.intersection(&candidate_words).count() as f64;
    let relevance = shared / query_words.len().max(1) as f64 * RELEVANCE_WEIGHT;

    let sections = count_present(&clean, &STRUCTURE_MARKERS) as f64;
    let structure = (sections / STRUCTURE_CAP).min(1.0) * STRUCTURE_WEIGHT;

    ConfidenceBreakdown {
        length,
        specificity,
        relevance,
        structure,
    }
}

/// Confidence in `[0, 1]` that `candidate` answers `original_query` usefully.
pub fn confidence(candidate: &str, original_query: &str) -> f64 {
    confidence_breakdown(candidate, original_query).total()
}
