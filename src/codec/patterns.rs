//! Repeated n-gram discovery for pattern codes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Shortest phrase worth a pattern code
pub const DEFAULT_MIN_WORDS: usize = 3;

/// Longest n-gram considered
pub const DEFAULT_MAX_WORDS: usize = 8;

/// Occurrences needed before a phrase counts as repeated
pub const DEFAULT_MIN_OCCURRENCES: usize = 2;

/// Pattern codes assigned per document, whatever the configuration
pub const MAX_PATTERN_CODES: usize = 10;

/// Candidates returned per scan
pub const MAX_CANDIDATES: usize = 20;

/// Upper bound on n-gram windows examined in one scan
pub const MAX_WINDOWS: usize = 4_000_000;

/// A recurring case-folded phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatedPhrase {
    /// Lowercased phrase, words joined by single spaces
    pub phrase: String,
    /// Sliding-window occurrences (overlaps included)
    pub count: usize,
    /// Words in the phrase
    pub words: usize,
}

impl RepeatedPhrase {
    /// Ranking score: approximate words saved before header cost
    pub fn score(&self) -> usize {
        self.words * self.count
    }
}

/// Sliding-window n-gram counter
#[derive(Debug, Clone)]
pub struct PatternFinder {
    min_words: usize,
    max_words: usize,
    min_occurrences: usize,
    max_candidates: usize,
}

impl Default for PatternFinder {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
            min_occurrences: DEFAULT_MIN_OCCURRENCES,
            max_candidates: MAX_CANDIDATES,
        }
    }
}

impl PatternFinder {
    /// Create finder with default bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Set shortest n-gram (at least 1)
    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words.max(1);
        self
    }

    /// Set longest n-gram
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Set occurrence threshold (at least 1)
    pub fn with_min_occurrences(mut self, min_occurrences: usize) -> Self {
        self.min_occurrences = min_occurrences.max(1);
        self
    }

    /// Set how many ranked candidates are returned
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Rank repeated phrases by `words * count`, highest first.
    ///
    /// Ties keep first-seen order (shorter n-grams are scanned first).
    pub fn find(&self, text: &str) -> Vec<RepeatedPhrase> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let max_words = self.window_ceiling(words.len());
        if max_words < self.min_words {
            return Vec::new();
        }

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut seen: Vec<RepeatedPhrase> = Vec::new();

        for len in self.min_words..=max_words {
            for window in words.windows(len) {
                let phrase = window.join(" ").to_lowercase();
                match index.get(&phrase) {
                    Some(&i) => seen[i].count += 1,
                    None => {
                        index.insert(phrase.clone(), seen.len());
                        seen.push(RepeatedPhrase {
                            phrase,
                            count: 1,
                            words: len,
                        });
                    }
                }
            }
        }

        let mut repeated: Vec<RepeatedPhrase> = seen
            .into_iter()
            .filter(|p| p.count >= self.min_occurrences)
            .collect();
        // Stable sort keeps first-seen order among equal scores
        repeated.sort_by(|a, b| b.score().cmp(&a.score()));
        repeated.truncate(self.max_candidates);

        tracing::debug!(
            words = words.len(),
            max_words,
            candidates = repeated.len(),
            "pattern scan"
        );
        repeated
    }

    /// Longest n-gram that fits the text and the window budget
    fn window_ceiling(&self, word_count: usize) -> usize {
        let mut max_words = self.max_words.min(word_count);
        while max_words >= self.min_words
            && word_count.saturating_mul(max_words - self.min_words + 1) > MAX_WINDOWS
        {
            max_words -= 1;
        }
        if max_words < self.max_words.min(word_count) {
            tracing::warn!(word_count, max_words, "pattern scan window reduced");
        }
        max_words
    }
}

/// Repeated phrases with the default 8-word ceiling and 20-candidate cut.
///
/// # Example
/// ```
/// use tokenshrink::codec::find_repeated_phrases;
///
/// let found = find_repeated_phrases("run the full suite. then run the full suite.", 3, 2);
/// assert_eq!(found[0].phrase, "run the full suite.");
/// assert_eq!(found[0].count, 2);
/// ```
pub fn find_repeated_phrases(
    text: &str,
    min_length: usize,
    min_occurrences: usize,
) -> Vec<RepeatedPhrase> {
    PatternFinder::new()
        .with_min_words(min_length)
        .with_min_occurrences(min_occurrences)
        .find(text)
}
