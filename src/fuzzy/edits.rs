// File: src/fuzzy/edits.rs
use std::collections::HashSet;

pub const ENGLISH_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Generates every string within a small edit distance of a word using
/// deletions, adjacent transpositions, substitutions and insertions over a
/// fixed alphabet.
///
/// The generator knows nothing about the dictionary; filtering candidates is
/// the caller's job.
#[derive(Debug, Clone)]
pub struct EditGenerator {
    alphabet: Vec<char>,
}

impl Default for EditGenerator {
    fn default() -> Self {
        Self::with_alphabet(ENGLISH_ALPHABET)
    }
}

impl EditGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Duplicate letters in `alphabet` are ignored.
    pub fn with_alphabet(alphabet: &str) -> Self {
        let mut seen = HashSet::new();
        let alphabet = alphabet.chars().filter(|c| seen.insert(*c)).collect();
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// All distinct strings at edit distance 1 from `word`.
    pub fn distance1(&self, word: &str) -> HashSet<String> {
        let mut edits = HashSet::new();
        self.visit_distance1(word, |edit| {
            edits.insert(edit);
        });
        edits
    }

    /// All distinct strings within edit distance 2 of `word`: the distance-1
    /// set plus one more edit applied to each of its members.
    ///
    /// The result grows with roughly `(54 * |w|)^2` raw edits; prefer
    /// [`EditGenerator::for_each_distance2`] when only a filtered subset is
    /// needed.
    pub fn distance2(&self, word: &str) -> HashSet<String> {
        let mut edits = HashSet::new();
        self.for_each_distance2(word, |edit| {
            if !edits.contains(edit) {
                edits.insert(edit.to_string());
            }
        });
        edits
    }

    /// Streams every string within edit distance 2 of `word` to `visit`
    /// without materialising the whole set. The same string may be visited
    /// more than once.
    pub fn for_each_distance2(&self, word: &str, mut visit: impl FnMut(&str)) {
        for first in self.distance1(word) {
            visit(&first);
            self.visit_distance1(&first, |second| visit(&second));
        }
    }

    /// Emits raw distance-1 edits, duplicates included.
    fn visit_distance1(&self, word: &str, mut visit: impl FnMut(String)) {
        let chars: Vec<char> = word.chars().collect();
        let n = chars.len();

        // Deletions: n
        for i in 0..n {
            visit(splice(&chars[..i], None, &chars[i + 1..]));
        }

        // Transpositions: n - 1
        for i in 0..n.saturating_sub(1) {
            let mut swapped = chars.clone();
            swapped.swap(i, i + 1);
            visit(swapped.into_iter().collect());
        }

        // Substitutions: n * (|alphabet| - 1)
        for i in 0..n {
            for &letter in &self.alphabet {
                if letter != chars[i] {
                    visit(splice(&chars[..i], Some(letter), &chars[i + 1..]));
                }
            }
        }

        // Insertions: (n + 1) * |alphabet|
        for i in 0..=n {
            for &letter in &self.alphabet {
                visit(splice(&chars[..i], Some(letter), &chars[i..]));
            }
        }
    }
}

fn splice(head: &[char], middle: Option<char>, tail: &[char]) -> String {
    let mut out = String::with_capacity(head.len() + tail.len() + 1);
    out.extend(head);
    out.extend(middle);
    out.extend(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(n: usize) -> usize {
        n + n.saturating_sub(1) + n * 25 + (n + 1) * 26
    }

    #[test]
    fn distance1_respects_size_bound() {
        let generator = EditGenerator::new();
        for word in ["", "a", "ab", "fx", "hello", "spelling", "aaaaaaa"] {
            let edits = generator.distance1(word);
            assert!(
                edits.len() <= bound(word.chars().count()),
                "{word}: {} > {}",
                edits.len(),
                bound(word.chars().count())
            );
        }
    }

    #[test]
    fn distance1_of_empty_word_is_single_letters() {
        let edits = EditGenerator::new().distance1("");
        assert_eq!(edits.len(), 26);
        assert!(edits.contains("q"));
    }

    #[test]
    fn distance1_covers_each_operation() {
        let edits = EditGenerator::new().distance1("fox");
        assert!(edits.contains("ox"), "deletion");
        assert!(edits.contains("ofx"), "transposition");
        assert!(edits.contains("fix"), "substitution");
        assert!(edits.contains("foxy"), "insertion");
        assert!(!edits.contains("fox"), "substitution skips identical letters");
    }

    #[test]
    fn distance1_exact_count_for_distinct_letters() {
        // "ab": deletions {b, a}, transposition {ba}, substitutions 50,
        // insertions 78 with "aab", "abb" each produced twice and the
        // substitutions "aa"/"bb" not clashing with anything else.
        let edits = EditGenerator::new().distance1("ab");
        assert_eq!(edits.len(), 2 + 1 + 50 + 78 - 2);
    }

    #[test]
    fn distance2_contains_distance1_and_two_step_edits() {
        let generator = EditGenerator::new();
        let d1 = generator.distance1("speling");
        let d2 = generator.distance2("speling");
        assert!(d1.is_subset(&d2));
        assert!(d2.contains("spilling"));
        assert!(d2.contains("speling"), "delete then reinsert restores the word");
    }

    #[test]
    fn streaming_visits_everything_in_the_set() {
        let generator = EditGenerator::new();
        let d2 = generator.distance2("ab");
        let mut streamed = HashSet::new();
        generator.for_each_distance2("ab", |e| {
            streamed.insert(e.to_string());
        });
        assert_eq!(streamed, d2);
    }

    #[test]
    fn custom_alphabet_limits_substitutions_and_insertions() {
        let generator = EditGenerator::with_alphabet("xyx");
        assert_eq!(generator.alphabet(), &['x', 'y']);
        let edits = generator.distance1("a");
        let expected: HashSet<String> = ["", "x", "y", "xa", "ya", "ax", "ay"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(edits, expected);
    }
}
