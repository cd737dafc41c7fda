//! Length-bucketed corpus index
//!
//! Groups the training vocabulary by word length so matchers get O(1) access
//! to the only words that could possibly fit a pattern.

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// The training corpus partitioned by word length
///
/// Immutable after build: every word sits in exactly one bucket, keyed by its
/// own length, in corpus order. Rebuilding means constructing a fresh index
/// and swapping it in whole, so concurrent readers never observe a partial
/// state.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    by_length: FxHashMap<usize, Vec<Word>>,
    word_count: usize,
}

impl CorpusIndex {
    /// Build an index from a pre-filtered corpus
    ///
    /// Assumes the loader already dropped non-alphabetic entries; no further
    /// validation happens here.
    #[must_use]
    pub fn build(words: impl IntoIterator<Item = Word>) -> Self {
        let mut by_length: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
        let mut word_count = 0;

        for word in words {
            by_length.entry(word.len()).or_default().push(word);
            word_count += 1;
        }

        Self {
            by_length,
            word_count,
        }
    }

    /// All corpus words of exactly this length, in corpus order
    ///
    /// Returns an empty slice when no bucket exists for the length.
    #[must_use]
    pub fn bucket(&self, length: usize) -> &[Word] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Total number of indexed words
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Whether the index holds no words
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// The shortest and longest indexed lengths, if any words exist
    #[must_use]
    pub fn length_range(&self) -> Option<(usize, usize)> {
        let min = self.by_length.keys().min()?;
        let max = self.by_length.keys().max()?;
        Some((*min, *max))
    }

    /// One-line human-readable summary for train-time reporting
    #[must_use]
    pub const fn summary(&self) -> IndexSummary<'_> {
        IndexSummary { index: self }
    }
}

/// Displayable summary of an index: corpus size and length range
pub struct IndexSummary<'a> {
    index: &'a CorpusIndex,
}

impl fmt::Display for IndexSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index.length_range() {
            Some((min, max)) => write!(
                f,
                "Corpus: {} words | Lengths: {min}..{max}",
                self.index.word_count()
            ),
            None => write!(f, "Corpus: 0 words"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(words: &[&str]) -> CorpusIndex {
        CorpusIndex::build(words.iter().map(|w| Word::new(*w).unwrap()))
    }

    #[test]
    fn build_partitions_by_length() {
        let index = corpus(&["cat", "bat", "horse", "at"]);

        assert_eq!(index.word_count(), 4);
        assert_eq!(index.bucket(3).len(), 2);
        assert_eq!(index.bucket(5).len(), 1);
        assert_eq!(index.bucket(2).len(), 1);
    }

    #[test]
    fn buckets_preserve_corpus_order() {
        let index = corpus(&["cat", "bat", "hat"]);

        let texts: Vec<&str> = index.bucket(3).iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CAT", "BAT", "HAT"]);
    }

    #[test]
    fn missing_bucket_is_empty_slice() {
        let index = corpus(&["cat"]);
        assert!(index.bucket(7).is_empty());
    }

    #[test]
    fn empty_corpus() {
        let index = CorpusIndex::build(std::iter::empty());
        assert!(index.is_empty());
        assert_eq!(index.length_range(), None);
        assert_eq!(index.summary().to_string(), "Corpus: 0 words");
    }

    #[test]
    fn length_range_spans_buckets() {
        let index = corpus(&["at", "cat", "elephant"]);
        assert_eq!(index.length_range(), Some((2, 8)));
    }

    #[test]
    fn summary_line() {
        let index = corpus(&["cat", "horse"]);
        assert_eq!(index.summary().to_string(), "Corpus: 2 words | Lengths: 3..5");
    }

    #[test]
    fn rebuild_replaces_whole_index() {
        let first = corpus(&["cat", "bat"]);
        let second = corpus(&["horse"]);

        // A rebuild is just a fresh value; the old one is untouched
        assert_eq!(first.word_count(), 2);
        assert_eq!(second.word_count(), 1);
        assert!(second.bucket(3).is_empty());
    }
}
