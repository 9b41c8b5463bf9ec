//! # Topic Matcher
//!
//! Maps a free-text question to a knowledge-base key. Rules are checked in an
//! explicit priority order and the first rule with a keyword contained in the
//! lower-cased question wins; nothing matching resolves to the default topic.

use crate::constants::DEFAULT_TOPIC;
use serde::{Deserialize, Serialize};

/// One topic key and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRule {
    pub key: String,
    pub keywords: Vec<String>,
}

impl TopicRule {
    pub fn new(key: &str, keywords: &[&str]) -> Self {
        Self {
            key: key.to_lowercase(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn hits(&self, query_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| !k.is_empty() && query_lower.contains(k.as_str()))
    }
}

/// The built-in priority list: identity documents and core schemes first,
/// then the broader welfare, licence, tax, travel and registry categories.
///
/// Keywords are plain substrings, so a keyword that contains an earlier
/// rule's keyword can never win ("registration" contains "ration"). The
/// seeded sets avoid such shadowing.
pub fn default_rules() -> Vec<TopicRule> {
    vec![
        TopicRule::new("aadhaar", &["aadhar", "aadhaar", "uid", "unique identification"]),
        TopicRule::new("pan_card", &["pan", "permanent account", "income tax"]),
        TopicRule::new("voter_id", &["voter", "election", "epic", "voting"]),
        TopicRule::new(
            "ayushman_bharat",
            &["ayushman", "pmjay", "health insurance", "medical"],
        ),
        TopicRule::new(
            "grievance_redressal",
            &["grievance", "complaint", "redressal", "cpgrams"],
        ),
        TopicRule::new("health_schemes", &["health scheme", "insurance", "cghs", "esic"]),
        TopicRule::new("ration_card", &["ration", "pds", "subsidy", "food security"]),
        TopicRule::new(
            "pension",
            &["pension", "retirement", "elderly", "senior", "old age"],
        ),
        TopicRule::new(
            "driving_license",
            &["license", "driving", "dl", "permit", "vehicle"],
        ),
        TopicRule::new("income_tax", &["tax", "income", "itr", "filing", "return"]),
        TopicRule::new("passport", &["passport", "travel", "document"]),
        TopicRule::new(
            "birth_death_certificate",
            &["birth", "death", "certificate", "registrar"],
        ),
    ]
}

#[derive(Debug, Clone)]
pub struct TopicMatcher {
    rules: Vec<TopicRule>,
}

impl Default for TopicMatcher {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl TopicMatcher {
    /// Builds a matcher over `rules`, checked in the given order. Keys and
    /// keywords are lower-cased, matching how the knowledge base stores keys.
    pub fn new(rules: Vec<TopicRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| TopicRule {
                keywords: rule.keywords.iter().map(|k| k.to_lowercase()).collect(),
                key: rule.key.to_lowercase(),
            })
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[TopicRule] {
        &self.rules
    }

    /// The key of the first rule hit by `query`, or the default topic.
    pub fn match_topic(&self, query: &str) -> &str {
        let query_lower = query.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.hits(&query_lower))
            .map(|rule| rule.key.as_str())
            .unwrap_or(DEFAULT_TOPIC)
    }
}
