//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_entropy::core::Word;
/// use wordle_entropy::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let entropy = calculate_entropy(&guess, &candidate_refs);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    // Group candidates by pattern
    let pattern_counts = group_by_pattern(guess, candidates);

    // Calculate Shannon entropy
    shannon_entropy(&pattern_counts)
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use wordle_entropy::solver::entropy::shannon_entropy;
/// use rustc_hash::FxHashMap;
/// use wordle_entropy::core::Pattern;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Pattern::new(0), 25);
/// uniform.insert(Pattern::new(1), 25);
/// uniform.insert(Pattern::new(2), 25);
/// uniform.insert(Pattern::new(3), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
/// This enables sophisticated tiebreaking strategies.
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let mut pattern_groups: FxHashMap<Pattern, Vec<&Word>> = FxHashMap::default();

    // Group candidates by pattern
    for &candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        pattern_groups.entry(pattern).or_default().push(candidate);
    }

    let total = candidates.len() as f64;

    // Calculate entropy
    let entropy: f64 = pattern_groups
        .values()
        .map(|group| {
            let p = group.len() as f64 / total;
            -p * p.log2()
        })
        .sum();

    // Calculate expected remaining candidates
    let expected_remaining: f64 = pattern_groups
        .values()
        .map(|group| {
            let p = group.len() as f64 / total;
            p * group.len() as f64
        })
        .sum();

    // Find max partition size (minimax worst-case)
    let max_partition = pattern_groups
        .values()
        .map(std::vec::Vec::len)
        .max()
        .unwrap_or(0);

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}
