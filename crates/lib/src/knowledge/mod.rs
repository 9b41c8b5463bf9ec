//! # Knowledge Base
//!
//! Curated answers keyed by topic. The built-in table is the guaranteed baseline;
//! an external JSON file (an object of `key -> answer text`) can extend or
//! override it at startup. Loading fails open: a missing or malformed file only
//! produces a log line and the baseline stays in effect.

pub mod builtin;

use crate::{constants::DEFAULT_TOPIC, errors::KnowledgeError};
use serde::Serialize;
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};
use tracing::{debug, info, warn};

/// Section markers every answer must contain, checked case-insensitively.
pub const REQUIRED_SECTIONS: [&str; 5] = ["summary", "procedure", "documents", "fees", "contact"];

/// Returns true if `text` is non-empty and carries all five answer sections.
pub fn is_well_formed(text: &str) -> bool {
    let lower = text.to_lowercase();
    !text.trim().is_empty() && REQUIRED_SECTIONS.iter().all(|s| lower.contains(s))
}

/// A named group of services, for UI listings.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ServiceCategory {
    pub name: String,
    pub services: Vec<String>,
}

/// An immutable topic → answer table.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: HashMap<String, String>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KnowledgeBase {
    /// The built-in table only.
    pub fn builtin() -> Self {
        let entries = builtin::entries()
            .into_iter()
            .map(|(key, text)| (key.to_string(), text.to_string()))
            .collect();
        Self { entries }
    }

    /// The built-in table with the entries of `path` merged over it.
    ///
    /// Never fails. A missing file is normal; an unreadable or malformed one is
    /// logged and ignored.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut knowledge = Self::builtin();

        if !path.exists() {
            debug!(path = %path.display(), "No external knowledge file, using built-in answers.");
            return knowledge;
        }

        match Self::read_file(path) {
            Ok(overrides) => {
                let merged = knowledge.merge(overrides);
                info!(path = %path.display(), merged, "Loaded external knowledge file.");
            }
            Err(e) => {
                warn!("Could not load external knowledge file, using built-in answers: {e}");
            }
        }
        knowledge
    }

    fn read_file(path: &Path) -> Result<HashMap<String, String>, KnowledgeError> {
        let content = fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| KnowledgeError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Merges `overrides` into the table and returns how many entries were taken.
    ///
    /// Entries that are empty or miss one of the answer sections are skipped,
    /// so every answer handed to a citizen keeps the fixed layout.
    pub fn merge(&mut self, overrides: HashMap<String, String>) -> usize {
        let mut merged = 0;
        for (key, text) in overrides {
            if !is_well_formed(&text) {
                warn!(topic = %key, "Skipping knowledge entry without the required sections.");
                continue;
            }
            self.entries.insert(key.to_lowercase(), text);
            merged += 1;
        }
        merged
    }

    /// The answer for `key` (case-insensitive), or the default help answer if
    /// `key` is unknown.
    pub fn lookup(&self, key: &str) -> &str {
        self.entries
            .get(&key.to_lowercase())
            .or_else(|| self.entries.get(DEFAULT_TOPIC))
            .map(String::as_str)
            .unwrap_or(builtin::DEFAULT_HELP)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_lowercase())
    }

    /// All topic keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Writes the current table to `path` as pretty JSON, ready for editing and
    /// reloading with [`KnowledgeBase::load`].
    pub fn save_template(&self, path: impl AsRef<Path>) -> Result<(), KnowledgeError> {
        let path = path.as_ref();
        let sorted: BTreeMap<&String, &String> = self.entries.iter().collect();
        let json = serde_json::to_string_pretty(&sorted).map_err(|source| {
            KnowledgeError::Parse {
                path: path.display().to_string(),
                source,
            }
        })?;
        fs::write(path, json).map_err(|source| KnowledgeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), "Saved knowledge template.");
        Ok(())
    }

    /// Help text for a UI category: the topic answer when `category` names a
    /// topic, the generic quick help otherwise.
    pub fn quick_help(&self, category: Option<&str>) -> &str {
        match category.map(str::to_lowercase) {
            Some(key) if self.entries.contains_key(&key) => self.lookup(&key),
            _ => builtin::QUICK_HELP,
        }
    }

    pub fn service_categories(&self) -> Vec<ServiceCategory> {
        builtin::service_categories()
            .into_iter()
            .map(|(name, services)| ServiceCategory {
                name: name.to_string(),
                services: services.into_iter().map(String::from).collect(),
            })
            .collect()
    }
}
