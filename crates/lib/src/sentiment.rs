//! # Sentiment Heuristic
//!
//! A weighted keyword scorer used when no backend is available and as the
//! secondary extractor when a backend's classification carries no label.

use serde::{Deserialize, Serialize};
use std::fmt;

const STRONG_WEIGHT: usize = 3;
const STANDARD_WEIGHT: usize = 1;

const STRONG_POSITIVE: [&str; 15] = [
    "excellent",
    "outstanding",
    "fantastic",
    "amazing",
    "wonderful",
    "brilliant",
    "superb",
    "perfect",
    "love",
    "great job",
    "well done",
    "highly satisfied",
    "extremely happy",
    "very good",
    "impressed",
];

const POSITIVE: [&str; 17] = [
    "good",
    "great",
    "nice",
    "satisfied",
    "happy",
    "pleased",
    "thank",
    "grateful",
    "appreciate",
    "helpful",
    "efficient",
    "quick",
    "easy",
    "smooth",
    "useful",
    "working",
    "solved",
];

const STRONG_NEGATIVE: [&str; 13] = [
    "terrible",
    "horrible",
    "awful",
    "disgusting",
    "pathetic",
    "worst",
    "hate",
    "extremely bad",
    "very poor",
    "completely useless",
    "totally disappointed",
    "absolutely terrible",
    "unacceptable",
];

const NEGATIVE: [&str; 17] = [
    "bad",
    "poor",
    "disappointed",
    "frustrated",
    "angry",
    "upset",
    "difficult",
    "slow",
    "complicated",
    "confusing",
    "problem",
    "issue",
    "error",
    "failed",
    "broken",
    "not working",
    "useless",
];

// Reported alongside the scores; never added to either polarity.
const NEUTRAL_MARKERS: [&str; 12] = [
    "okay",
    "fine",
    "average",
    "normal",
    "standard",
    "regular",
    "question",
    "how",
    "what",
    "when",
    "where",
    "information",
];

const INTERROGATIVE_MARKERS: [&str; 6] = ["?", "how", "what", "when", "where", "why"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

fn hits(text: &str, vocabulary: &[&str]) -> usize {
    vocabulary.iter().filter(|w| text.contains(*w)).count()
}

/// Polarity scores for a text, before the decision rules are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentimentScores {
    pub positive: usize,
    pub negative: usize,
    pub neutral_markers: usize,
}

pub fn score(text: &str) -> SentimentScores {
    let lower = text.to_lowercase();
    SentimentScores {
        positive: STRONG_WEIGHT * hits(&lower, &STRONG_POSITIVE)
            + STANDARD_WEIGHT * hits(&lower, &POSITIVE),
        negative: STRONG_WEIGHT * hits(&lower, &STRONG_NEGATIVE)
            + STANDARD_WEIGHT * hits(&lower, &NEGATIVE),
        neutral_markers: hits(&lower, &NEUTRAL_MARKERS),
    }
}

/// Which decision rule produced a heuristic label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentBasis {
    /// One polarity scored strictly higher than the other.
    Polarity,
    /// Equal polarity scores with at least one neutral marker present.
    NeutralTie,
    /// No decision from the scores, but the text reads as a question.
    Interrogative,
    Default,
}

/// Applies the decision rules in order and reports which one fired.
pub fn decide(text: &str) -> (SentimentLabel, SentimentBasis) {
    let scores = score(text);

    if scores.positive > scores.negative && scores.positive > 0 {
        return (SentimentLabel::Positive, SentimentBasis::Polarity);
    }
    if scores.negative > scores.positive && scores.negative > 0 {
        return (SentimentLabel::Negative, SentimentBasis::Polarity);
    }
    if scores.neutral_markers > 0 && scores.positive == scores.negative {
        return (SentimentLabel::Neutral, SentimentBasis::NeutralTie);
    }
    let lower = text.to_lowercase();
    if INTERROGATIVE_MARKERS.iter().any(|m| lower.contains(m)) {
        return (SentimentLabel::Neutral, SentimentBasis::Interrogative);
    }
    (SentimentLabel::Neutral, SentimentBasis::Default)
}

pub fn classify(text: &str) -> SentimentLabel {
    decide(text).0
}

/// The first of POSITIVE, NEGATIVE, NEUTRAL found in a backend completion,
/// case-insensitively.
pub fn find_label(model_output: &str) -> Option<SentimentLabel> {
    let upper = model_output.to_uppercase();
    [
        ("POSITIVE", SentimentLabel::Positive),
        ("NEGATIVE", SentimentLabel::Negative),
        ("NEUTRAL", SentimentLabel::Neutral),
    ]
    .into_iter()
    .find(|(token, _)| upper.contains(token))
    .map(|(_, label)| label)
}

/// Reads a label out of a backend completion, falling back to [`classify`] on
/// `original_text` when the completion names none.
pub fn extract_label(model_output: &str, original_text: &str) -> SentimentLabel {
    find_label(model_output).unwrap_or_else(|| classify(original_text))
}
