//! Tiered heuristic fallback
//!
//! When matching yields no usable candidates, the engine degrades through a
//! fixed chain of heuristic tiers keyed to game phase (how much of the
//! pattern is still blank), ending in a uniform distribution over whatever
//! letters remain. Each tier is a strategy object behind a common trait, so
//! the chain is an ordered list rather than nested conditionals and new
//! tiers slot in without touching existing ones.

use crate::core::{Distribution, Letter, LetterSet, Pattern};

/// Blank ratio above which the game counts as early
const EARLY_RATIO: f64 = 0.6;

/// Blank ratio below which the game counts as late
const LATE_RATIO: f64 = 0.3;

/// Additive bonus for letters common in medial word positions
///
/// Applied by the early, mid, and global-frequency tiers before
/// renormalizing. The late tier leaves its consonant table untouched.
const MID_POSITION_PRIOR: [(char, f64); 9] = [
    ('A', 0.02),
    ('E', 0.03),
    ('I', 0.02),
    ('O', 0.02),
    ('N', 0.02),
    ('R', 0.02),
    ('S', 0.02),
    ('T', 0.02),
    ('L', 0.02),
];

/// Early-game vowel weights
const EARLY_VOWELS: [(char, f64); 5] = [
    ('E', 0.33),
    ('A', 0.27),
    ('I', 0.16),
    ('O', 0.16),
    ('U', 0.08),
];

/// Mid-game balanced mix of vowels and common consonants
const MID_MIX: [(char, f64); 12] = [
    ('E', 0.12),
    ('A', 0.10),
    ('I', 0.08),
    ('O', 0.08),
    ('U', 0.05),
    ('T', 0.10),
    ('R', 0.10),
    ('S', 0.09),
    ('N', 0.09),
    ('L', 0.07),
    ('D', 0.07),
    ('H', 0.05),
];

/// Late-game consonant focus
const LATE_CONSONANTS: [(char, f64); 9] = [
    ('T', 0.17),
    ('R', 0.15),
    ('S', 0.13),
    ('N', 0.13),
    ('L', 0.11),
    ('D', 0.10),
    ('H', 0.08),
    ('C', 0.07),
    ('M', 0.06),
];

/// Canonical English letter frequencies (percent)
const GLOBAL_FREQUENCY: [(char, f64); 26] = [
    ('E', 12.7),
    ('T', 9.06),
    ('A', 8.17),
    ('O', 7.51),
    ('I', 6.97),
    ('N', 6.75),
    ('S', 6.33),
    ('H', 6.09),
    ('R', 5.99),
    ('D', 4.25),
    ('L', 4.03),
    ('C', 2.78),
    ('U', 2.76),
    ('M', 2.41),
    ('W', 2.36),
    ('F', 2.23),
    ('G', 2.02),
    ('Y', 1.97),
    ('P', 1.93),
    ('B', 1.49),
    ('V', 0.98),
    ('K', 0.77),
    ('J', 0.15),
    ('X', 0.15),
    ('Q', 0.10),
    ('Z', 0.07),
];

/// A single fallback tier: produce a distribution or signal no-result
pub trait FallbackTier: Sync {
    /// Short name used in prediction-source reporting
    fn name(&self) -> &'static str;

    /// The tier's distribution, or `None` when the tier does not apply
    ///
    /// A phase tier declines when the blank ratio is outside its band or
    /// when every letter in its table is already guessed.
    fn distribution(&self, pattern: &Pattern, guessed: LetterSet) -> Option<Distribution>;
}

/// Early game: mostly blanks, vowels carry the signal
pub struct EarlyGame;

/// Mid game: balanced vowel/consonant mix
pub struct MidGame;

/// Late game: mostly revealed, common consonants finish words
pub struct LateGame;

/// Phase-independent English letter frequencies
pub struct GlobalFrequency;

/// Terminal tier: equal weight over whatever letters remain
pub struct Uniform;

impl FallbackTier for EarlyGame {
    fn name(&self) -> &'static str {
        "early-game"
    }

    fn distribution(&self, pattern: &Pattern, guessed: LetterSet) -> Option<Distribution> {
        if pattern.blank_ratio() <= EARLY_RATIO {
            return None;
        }
        table_distribution(&EARLY_VOWELS, guessed, true)
    }
}

impl FallbackTier for MidGame {
    fn name(&self) -> &'static str {
        "mid-game"
    }

    fn distribution(&self, pattern: &Pattern, guessed: LetterSet) -> Option<Distribution> {
        let ratio = pattern.blank_ratio();
        if !(LATE_RATIO..=EARLY_RATIO).contains(&ratio) {
            return None;
        }
        table_distribution(&MID_MIX, guessed, true)
    }
}

impl FallbackTier for LateGame {
    fn name(&self) -> &'static str {
        "late-game"
    }

    fn distribution(&self, pattern: &Pattern, guessed: LetterSet) -> Option<Distribution> {
        if pattern.blank_ratio() >= LATE_RATIO {
            return None;
        }
        table_distribution(&LATE_CONSONANTS, guessed, false)
    }
}

impl FallbackTier for GlobalFrequency {
    fn name(&self) -> &'static str {
        "global-frequency"
    }

    fn distribution(&self, _pattern: &Pattern, guessed: LetterSet) -> Option<Distribution> {
        table_distribution(&GLOBAL_FREQUENCY, guessed, true)
    }
}

impl FallbackTier for Uniform {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn distribution(&self, _pattern: &Pattern, guessed: LetterSet) -> Option<Distribution> {
        // Always yields: the empty distribution when no letters remain
        Some(Distribution::normalized(
            Letter::all()
                .filter(|&l| !guessed.contains(l))
                .map(|l| (l, 1.0)),
        ))
    }
}

/// The fallback tiers in evaluation order
///
/// First applicable non-empty tier wins; `Uniform` terminates the chain
/// unconditionally.
pub static FALLBACK_TIERS: [&dyn FallbackTier; 5] =
    [&EarlyGame, &MidGame, &LateGame, &GlobalFrequency, &Uniform];

/// Run the fallback chain, returning the distribution and producing tier
#[must_use]
pub fn smart_fallback(pattern: &Pattern, guessed: LetterSet) -> (Distribution, &'static str) {
    for tier in FALLBACK_TIERS {
        if let Some(dist) = tier.distribution(pattern, guessed) {
            return (dist, tier.name());
        }
    }
    unreachable!("uniform tier always yields a distribution")
}

/// Weight a table's unguessed letters, optionally adding the positional
/// prior, and renormalize
///
/// Returns `None` when every table letter is already guessed.
fn table_distribution(
    table: &[(char, f64)],
    guessed: LetterSet,
    apply_prior: bool,
) -> Option<Distribution> {
    let survivors: Vec<(Letter, f64)> = table
        .iter()
        .filter_map(|&(c, w)| Letter::from_char(c).map(|l| (l, w)))
        .filter(|&(l, _)| !guessed.contains(l))
        .map(|(l, w)| {
            if apply_prior {
                (l, w + prior_bonus(l))
            } else {
                (l, w)
            }
        })
        .collect();

    if survivors.is_empty() {
        None
    } else {
        Some(Distribution::normalized(survivors))
    }
}

fn prior_bonus(letter: Letter) -> f64 {
    MID_POSITION_PRIOR
        .iter()
        .find(|&&(c, _)| Letter::from_char(c) == Some(letter))
        .map_or(0.0, |&(_, bonus)| bonus)
}
