// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A lowercase ASCII word as produced by the tokenizer.
pub type Word = String;

/// Number of times a word was observed across every merged corpus.
pub type Count = u64;

/// A ranked correction candidate together with its corpus count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: Word,
    /// 0 when the suggestion is the unmatched input echoed back.
    pub count: Count,
}

impl Suggestion {
    pub fn new(word: impl Into<Word>, count: Count) -> Self {
        Self { word: word.into(), count }
    }
}

/// Where a successfully built model came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSource {
    /// Loaded from the persisted model cache.
    Cache,
    /// Tokenized from the corpus file.
    Corpus,
}
