//! The prediction engine
//!
//! Owns the immutable corpus index and runs the cascade: exact match →
//! partial match when exact is weak → frequency aggregation → tiered
//! fallback. Every prediction is a pure function of (pattern, guessed set,
//! index), so a trained predictor can serve many games concurrently.

use crate::core::{Distribution, LetterSet, Pattern, Word};
use crate::engine::fallback::smart_fallback;
use crate::engine::frequency::letter_frequencies;
use crate::engine::index::CorpusIndex;
use crate::engine::matcher::{exact_matches, partial_matches};
use std::fmt;

/// Tuning knobs for the prediction cascade
///
/// The two constants come straight from the reference behavior and are
/// deliberately not re-derived; they are named here so callers can see and
/// override them rather than meet them as magic numbers.
#[derive(Debug, Clone, Copy)]
pub struct PredictorConfig {
    /// Below this many exact matches, widen the pool with partial matches
    pub weak_match_threshold: usize,

    /// Partial matches are truncated to this many words (cost bound, not a
    /// correctness requirement)
    pub partial_match_cap: usize,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            weak_match_threshold: 5,
            partial_match_cap: 50,
        }
    }
}

/// Which stage of the cascade produced a distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionSource {
    /// Structurally consistent corpus matches
    Exact { candidates: usize },

    /// Relaxed matches used as a frequency sampling pool
    Partial { candidates: usize },

    /// A heuristic fallback tier, by name
    Fallback { tier: &'static str },
}

impl fmt::Display for PredictionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact { candidates } => write!(f, "exact match ({candidates} candidates)"),
            Self::Partial { candidates } => write!(f, "partial match ({candidates} candidates)"),
            Self::Fallback { tier } => write!(f, "{tier} fallback"),
        }
    }
}

/// Corpus-trained letter predictor
///
/// Stateless per call: the only state is the index, built once by
/// [`train`](Self::train) and never mutated by predictions. Rebuilding
/// constructs a complete new index before the single assignment swaps it in;
/// callers sharing a predictor across threads should swap an `Arc` the same
/// way so in-flight reads keep their snapshot.
#[derive(Debug, Default)]
pub struct Predictor {
    index: CorpusIndex,
    config: PredictorConfig,
}

impl Predictor {
    /// Create an untrained predictor with the given configuration
    #[must_use]
    pub fn new(config: PredictorConfig) -> Self {
        Self {
            index: CorpusIndex::default(),
            config,
        }
    }

    /// Create and train a predictor in one step
    #[must_use]
    pub fn trained(words: impl IntoIterator<Item = Word>) -> Self {
        let mut predictor = Self::new(PredictorConfig::default());
        predictor.train(words);
        predictor
    }

    /// Index a corpus, replacing any previous index wholesale
    ///
    /// Emits a one-line summary of the indexed corpus.
    pub fn train(&mut self, words: impl IntoIterator<Item = Word>) {
        self.index = CorpusIndex::build(words);
        println!("{}", self.index.summary());
    }

    /// The active corpus index
    #[must_use]
    pub const fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Predict a letter probability distribution for a game position
    ///
    /// Never fails: when matching and aggregation yield no signal the
    /// fallback chain answers, and when all 26 letters are guessed the
    /// result is the empty distribution (no legal move).
    #[must_use]
    pub fn predict(&self, pattern: &Pattern, guessed: LetterSet) -> Distribution {
        self.predict_with_source(pattern, guessed).0
    }

    /// Predict, also reporting which cascade stage produced the answer
    #[must_use]
    pub fn predict_with_source(
        &self,
        pattern: &Pattern,
        guessed: LetterSet,
    ) -> (Distribution, PredictionSource) {
        let exact = exact_matches(&self.index, pattern, guessed);

        let (pool, source) = if exact.len() < self.config.weak_match_threshold {
            let partial = partial_matches(&self.index, pattern, self.config.partial_match_cap);
            let source = PredictionSource::Partial {
                candidates: partial.len(),
            };
            (partial, source)
        } else {
            let source = PredictionSource::Exact {
                candidates: exact.len(),
            };
            (exact, source)
        };

        if let Some(distribution) = letter_frequencies(&pool, pattern, guessed) {
            (distribution, source)
        } else {
            let (distribution, tier) = smart_fallback(pattern, guessed);
            (distribution, PredictionSource::Fallback { tier })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, SUM_TOLERANCE};

    fn trained(words: &[&str]) -> Predictor {
        Predictor::trained(words.iter().map(|w| Word::new(*w).unwrap()))
    }

    fn pattern(text: &str) -> Pattern {
        Pattern::parse(text).unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn five_exact_matches_use_exact_pool() {
        let predictor = trained(&["cat", "bat", "hat", "mat", "rat"]);
        let (dist, source) = predictor.predict_with_source(&pattern("_AT"), LetterSet::EMPTY);

        assert_eq!(source, PredictionSource::Exact { candidates: 5 });

        // Only the first letter varies; each candidate contributes equally
        for c in ['C', 'B', 'H', 'M', 'R'] {
            assert!((dist.get(letter(c)) - 0.2).abs() < 1e-9, "letter {c}");
        }
        assert!((dist.get(letter('A')) - 0.0).abs() < f64::EPSILON);
        assert!((dist.get(letter('T')) - 0.0).abs() < f64::EPSILON);
        assert!((dist.sum() - 1.0).abs() < SUM_TOLERANCE);
    }

    #[test]
    fn weak_exact_falls_back_to_partial_pool() {
        // Only CAT matches exactly once B is guessed (BAT contradicts the
        // blank), leaving fewer than five exact matches
        let predictor = trained(&["cat", "bat"]);
        let guessed = LetterSet::from_text("B");

        let (dist, source) = predictor.predict_with_source(&pattern("_AT"), guessed);

        // The partial pool readmits BAT for frequency purposes
        assert_eq!(source, PredictionSource::Partial { candidates: 2 });
        assert!((dist.get(letter('C')) - 1.0).abs() < 1e-9);
        assert!((dist.get(letter('B')) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_corpus_routes_to_fallback() {
        let predictor = trained(&[]);
        let (dist, source) = predictor.predict_with_source(&pattern("___"), LetterSet::EMPTY);

        assert_eq!(
            source,
            PredictionSource::Fallback { tier: "early-game" }
        );
        // E weighted highest in the early game
        assert_eq!(dist.top(1)[0].0, letter('E'));
        assert!((dist.sum() - 1.0).abs() < SUM_TOLERANCE);
    }

    #[test]
    fn missing_length_bucket_routes_to_fallback() {
        let predictor = trained(&["cat", "bat"]);
        let (_, source) = predictor.predict_with_source(&pattern("______"), LetterSet::EMPTY);

        assert!(matches!(source, PredictionSource::Fallback { .. }));
    }

    #[test]
    fn exhausted_pool_routes_to_fallback() {
        // One blank, and its only candidate letter is already guessed... a
        // contradiction exact matching rejects, and the partial pool's
        // frequencies collapse to zero
        let predictor = trained(&["cab"]);
        let guessed = LetterSet::from_text("B");

        let (_, source) = predictor.predict_with_source(&pattern("CA_"), guessed);
        assert!(matches!(source, PredictionSource::Fallback { .. }));
    }

    #[test]
    fn all_letters_guessed_yields_empty_distribution() {
        let predictor = trained(&[]);
        let (dist, _) = predictor.predict_with_source(&pattern("____"), LetterSet::FULL);

        assert!(dist.is_empty());
    }

    #[test]
    fn no_guessed_letter_in_any_distribution() {
        let predictor = trained(&["cat", "bat", "hat", "mat", "rat", "horse", "house"]);
        let guessed = LetterSet::from_text("ATE");

        for p in ["_AT", "H____", "___"] {
            let dist = predictor.predict(&pattern(p), guessed);
            for g in guessed.iter() {
                assert!(
                    (dist.get(g) - 0.0).abs() < f64::EPSILON,
                    "guessed {g} weighted for pattern {p}"
                );
            }
        }
    }

    #[test]
    fn predictions_are_deterministic() {
        let predictor = trained(&["cat", "bat", "hat", "horse", "house", "mouse"]);
        let guessed = LetterSet::from_text("SE");

        let first = predictor.predict(&pattern("_____"), guessed);
        let second = predictor.predict(&pattern("_____"), guessed);
        assert_eq!(first, second);
    }

    #[test]
    fn retrain_replaces_index() {
        let mut predictor = trained(&["cat"]);
        predictor.train([Word::new("horse").unwrap()]);

        assert_eq!(predictor.index().word_count(), 1);
        assert!(predictor.index().bucket(3).is_empty());
    }

    #[test]
    fn config_defaults_preserved() {
        let config = PredictorConfig::default();
        assert_eq!(config.weak_match_threshold, 5);
        assert_eq!(config.partial_match_cap, 50);
    }

    #[test]
    fn partial_pool_honors_cap() {
        let words: Vec<String> = (0..26)
            .map(|i| format!("{}AT", char::from(b'A' + i)))
            .collect();
        let mut predictor = Predictor::new(PredictorConfig {
            weak_match_threshold: 5,
            partial_match_cap: 10,
        });
        predictor.train(words.iter().map(|w| Word::new(w.as_str()).unwrap()));

        // Guessing most first letters leaves few exact matches, forcing the
        // capped partial pool
        let guessed = LetterSet::from_text("BCDEFGHIJKLMNOPQRSTUVWXYZ");
        let (_, source) = predictor.predict_with_source(&pattern("_AT"), guessed);

        assert_eq!(source, PredictionSource::Partial { candidates: 10 });
    }
}
