// File: src/core/tokenizer.rs
use crate::core::types::Word;

/// Splits `text` into lowercase words.
///
/// A maximal run of ASCII letters is one token; every other character
/// (digits, punctuation, whitespace, non-ASCII) separates tokens. The returned
/// iterator borrows `text`, so scanning the same text again yields the same
/// sequence.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

/// Lazy iterator over the words of a text, in document order.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        let start = self.rest.find(|c: char| c.is_ascii_alphabetic())?;
        let run = &self.rest[start..];
        // Letters are single bytes, so the end of the run is a byte offset.
        let end = run
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(run.len());
        self.rest = &run[end..];
        Some(run[..end].to_ascii_lowercase())
    }
}
