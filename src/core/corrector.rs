// File: src/core/corrector.rs
use crate::config::{CorrectorConfig, FallbackPolicy};
use crate::core::model::FrequencyModel;
use crate::core::types::{Suggestion, Word};
use crate::fuzzy::edits::EditGenerator;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Ranks known words near a query against a [`FrequencyModel`].
///
/// Tiers are tried in order and the first one with any known word wins:
/// the exact word, then distance-1 candidates, then distance-2 candidates,
/// then the fallback policy. Within a tier candidates are ordered by
/// descending count, ties broken by ascending string order.
#[derive(Debug, Clone)]
pub struct Corrector {
    config: CorrectorConfig,
    edits: EditGenerator,
}

impl Default for Corrector {
    fn default() -> Self {
        Self::new(CorrectorConfig::default())
    }
}

impl Corrector {
    pub fn new(config: CorrectorConfig) -> Self {
        let edits = EditGenerator::with_alphabet(&config.alphabet);
        Self { config, edits }
    }

    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Suggested words, best first. Never fails; an empty model degrades to
    /// the fallback tier.
    pub fn correct(&self, model: &FrequencyModel, word: &str) -> Vec<Word> {
        self.suggest(model, word).into_iter().map(|s| s.word).collect()
    }

    /// The single most likely word, or the query as given when nothing
    /// better is known.
    pub fn best(&self, model: &FrequencyModel, word: &str) -> Word {
        self.correct(model, word)
            .into_iter()
            .next()
            .unwrap_or_else(|| word.to_string())
    }

    /// Like [`Corrector::correct`] but keeps the corpus count of each word.
    ///
    /// Lookup uses the normalized query; the fallback echo returns `query`
    /// exactly as passed in.
    pub fn suggest(&self, model: &FrequencyModel, query: &str) -> Vec<Suggestion> {
        let word = normalize(query);
        if word.is_empty() {
            return Vec::new();
        }

        let count = model.count(&word);
        if count > 0 {
            trace!(word = %word, count, "exact match");
            return vec![Suggestion::new(word, count)];
        }

        if self.config.max_edit_distance >= 1 {
            let known = self.known_distance1(model, &word);
            if !known.is_empty() {
                debug!(word = %word, candidates = known.len(), "distance-1 tier");
                return self.rank(known);
            }
        }

        if self.config.max_edit_distance >= 2 {
            if word.chars().count() > self.config.max_distance2_len {
                debug!(word = %word, limit = self.config.max_distance2_len, "query too long for distance-2 search");
            } else {
                let known = self.known_distance2(model, &word);
                if !known.is_empty() {
                    debug!(word = %word, candidates = known.len(), "distance-2 tier");
                    return self.rank(known);
                }
            }
        }

        debug!(word = %word, policy = ?self.config.fallback, "no known candidate");
        match self.config.fallback {
            FallbackPolicy::EchoInput => vec![Suggestion::new(query, 0)],
            FallbackPolicy::Empty => Vec::new(),
        }
    }

    fn known_distance1(&self, model: &FrequencyModel, word: &str) -> HashMap<Word, u64> {
        self.edits
            .distance1(word)
            .into_iter()
            .filter_map(|edit| {
                let count = model.count(&edit);
                (count > 0).then_some((edit, count))
            })
            .collect()
    }

    // Only known words are kept, so memory tracks the hits rather than the
    // full distance-2 neighbourhood.
    fn known_distance2(&self, model: &FrequencyModel, word: &str) -> HashMap<Word, u64> {
        let mut known = HashMap::new();
        self.edits.for_each_distance2(word, |edit| {
            if known.contains_key(edit) {
                return;
            }
            let count = model.count(edit);
            if count > 0 {
                known.insert(edit.to_string(), count);
            }
        });
        known
    }

    fn rank(&self, known: HashMap<Word, u64>) -> Vec<Suggestion> {
        let mut ranked: Vec<Suggestion> = known
            .into_iter()
            .map(|(word, count)| Suggestion { word, count })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        if self.config.max_results > 0 {
            ranked.truncate(self.config.max_results);
        }
        ranked
    }
}

/// Queries are matched case-insensitively and without surrounding space.
pub fn normalize(word: &str) -> Word {
    word.trim().to_ascii_lowercase()
}
