// File: src/core/model.rs
use crate::core::types::{Count, Word};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Word occurrence counts accumulated over one or more corpora.
///
/// Counts only ever grow; `invalidate` is the single way to reset them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyModel {
    counts: HashMap<Word, Count>,
    total: Count,
}

impl FrequencyModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a model from raw counts, e.g. after loading a cache.
    /// Zero counts are dropped so absence keeps meaning "never observed".
    /// Returns `None` when the counts sum past `Count::MAX`.
    pub fn from_counts(counts: HashMap<Word, Count>) -> Option<Self> {
        let counts: HashMap<Word, Count> = counts.into_iter().filter(|(_, c)| *c > 0).collect();
        let total = counts.values().try_fold(0, |sum: Count, &c| sum.checked_add(c))?;
        Some(Self { counts, total })
    }

    /// Adds one observation per token. Existing counts are kept.
    /// O(n) in the number of tokens.
    pub fn build<I>(&mut self, tokens: I)
    where
        I: IntoIterator,
        I::Item: Into<Word>,
    {
        for token in tokens {
            self.observe(token.into(), 1);
        }
    }

    /// Adds `count` observations of a single word.
    pub fn add(&mut self, word: &str, count: Count) {
        self.observe(word.to_string(), count);
    }

    /// Counts pin at `Count::MAX` instead of wrapping. Once the total is
    /// pinned it no longer equals the sum of counts.
    fn observe(&mut self, word: Word, count: Count) {
        if count == 0 {
            return;
        }
        let entry = self.counts.entry(word).or_insert(0);
        *entry = entry.checked_add(count).unwrap_or(Count::MAX);
        self.total = self.total.checked_add(count).unwrap_or(Count::MAX);
    }

    /// Folds another model's counts into this one.
    pub fn merge(&mut self, other: &FrequencyModel) {
        for (word, &count) in &other.counts {
            self.add(word, count);
        }
    }

    /// Drops every count.
    pub fn invalidate(&mut self) {
        self.counts.clear();
        self.total = 0;
    }

    pub fn count(&self, word: &str) -> Count {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Sum of all counts.
    pub fn total(&self) -> Count {
        self.total
    }

    /// Relative frequency of `word`, 0.0 on an empty model.
    pub fn probability(&self, word: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(word) as f64 / self.total as f64
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Count)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    pub(crate) fn counts(&self) -> &HashMap<Word, Count> {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenizer::tokenize;

    #[test]
    fn build_counts_tokens() {
        let mut model = FrequencyModel::new();
        model.build(tokenize("the quick brown fox the fox"));
        assert_eq!(model.count("the"), 2);
        assert_eq!(model.count("fox"), 2);
        assert_eq!(model.count("quick"), 1);
        assert_eq!(model.total(), 6);
        assert_eq!(model.len(), 4);
    }

    #[test]
    fn unseen_words_count_zero() {
        let model = FrequencyModel::new();
        assert_eq!(model.count("anything"), 0);
        assert!(!model.contains("anything"));
        assert_eq!(model.probability("anything"), 0.0);
    }

    #[test]
    fn build_is_cumulative() {
        let mut model = FrequencyModel::new();
        model.build(tokenize("cat dog"));
        model.build(tokenize("cat"));
        assert_eq!(model.count("cat"), 2);
        assert_eq!(model.count("dog"), 1);
        assert_eq!(model.total(), 3);
    }

    #[test]
    fn invalidate_is_the_only_reset() {
        let mut model = FrequencyModel::new();
        model.build(tokenize("cat dog"));
        model.invalidate();
        assert!(model.is_empty());
        assert_eq!(model.total(), 0);
        model.build(tokenize("dog"));
        assert_eq!(model.count("dog"), 1);
    }

    #[test]
    fn merge_adds_counts() {
        let mut a = FrequencyModel::new();
        a.build(tokenize("one two two"));
        let mut b = FrequencyModel::new();
        b.build(tokenize("two three"));
        a.merge(&b);
        assert_eq!(a.count("two"), 3);
        assert_eq!(a.count("three"), 1);
        assert_eq!(a.total(), 5);
    }

    #[test]
    fn from_counts_drops_zeroes_and_recomputes_total() {
        let counts = HashMap::from([
            ("a".to_string(), 3),
            ("b".to_string(), 0),
            ("c".to_string(), 1),
        ]);
        let model = FrequencyModel::from_counts(counts).unwrap();
        assert!(!model.contains("b"));
        assert_eq!(model.total(), 4);
        assert!((model.probability("a") - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn from_counts_rejects_overflowing_total() {
        let counts = HashMap::from([("a".to_string(), Count::MAX), ("b".to_string(), 5)]);
        assert!(FrequencyModel::from_counts(counts).is_none());
    }

    #[test]
    fn add_pins_at_max_instead_of_wrapping() {
        let mut model = FrequencyModel::new();
        model.add("a", Count::MAX);
        model.add("a", 5);
        model.build(tokenize("a b"));
        assert_eq!(model.count("a"), Count::MAX);
        assert_eq!(model.count("b"), 1);
        assert_eq!(model.total(), Count::MAX);
    }
}
