//! The letter-prediction engine
//!
//! Corpus-indexed pattern matching with a multi-tier fallback chain. The
//! cascade degrades gracefully: exact structural matches, then a relaxed
//! sampling pool, then game-phase heuristics, and finally a uniform guess
//! over whatever letters remain.

pub mod fallback;
pub mod frequency;
pub mod index;
pub mod matcher;
mod predictor;

pub use fallback::{FALLBACK_TIERS, FallbackTier, smart_fallback};
pub use frequency::letter_frequencies;
pub use index::CorpusIndex;
pub use matcher::{exact_matches, partial_matches};
pub use predictor::{PredictionSource, Predictor, PredictorConfig};
