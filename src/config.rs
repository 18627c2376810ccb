// File: src/config.rs
use crate::error::{CorrectorError, Result};
use crate::fuzzy::edits::ENGLISH_ALPHABET;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What `correct` returns when no tier finds a known word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Return the query, exactly as given, as the sole suggestion.
    #[default]
    EchoInput,
    /// Return no suggestions.
    Empty,
}

/// Tunables for candidate generation and ranking.
///
/// Every field has a default, so a JSON config file only needs the keys it
/// overrides, e.g. `{ "max_results": 3, "fallback": "empty" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Upper bound on the number of suggestions returned; 0 disables the cap.
    ///
    /// The cap applies after ranking, so words tied on count at the boundary
    /// are cut in ascending string order: with a cap of 2, five equally
    /// frequent candidates yield only the first two alphabetically.
    pub max_results: usize,
    /// Highest tier searched: 0, 1 or 2.
    pub max_edit_distance: u8,
    /// Queries longer than this many characters skip distance-2 candidates.
    pub max_distance2_len: usize,
    pub fallback: FallbackPolicy,
    pub alphabet: String,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            max_edit_distance: 2,
            max_distance2_len: 20,
            fallback: FallbackPolicy::EchoInput,
            alphabet: ENGLISH_ALPHABET.to_string(),
        }
    }
}

impl CorrectorConfig {
    pub fn with_max_results(mut self, count: usize) -> Self {
        self.max_results = count;
        self
    }

    pub fn with_max_edit_distance(mut self, distance: u8) -> Self {
        self.max_edit_distance = distance.min(2);
        self
    }

    pub fn with_max_distance2_len(mut self, len: usize) -> Self {
        self.max_distance2_len = len;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Reads a JSON config file; missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| CorrectorError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: CorrectorConfig =
            serde_json::from_str(&text).map_err(|e| CorrectorError::Config {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        config.validate(path)
    }

    fn validate(mut self, path: &Path) -> Result<Self> {
        if self.max_edit_distance > 2 {
            return Err(CorrectorError::Config {
                path: path.to_path_buf(),
                reason: format!("max_edit_distance must be 0, 1 or 2, got {}", self.max_edit_distance),
            });
        }
        if self.alphabet.is_empty() {
            self.alphabet = ENGLISH_ALPHABET.to_string();
        }
        Ok(self)
    }
}
