//! Letter frequency aggregation
//!
//! Turns a pool of candidate words into a normalized letter distribution.
//! Only letters standing at the pattern's blank positions carry signal — a
//! revealed position is already decided — and every occurrence counts, so
//! words repeating a letter across blanks contribute proportionally more
//! weight.

use crate::core::{Distribution, Letter, LetterSet, Pattern, Word};

/// Aggregate candidate words into a letter probability distribution
///
/// For each candidate, every letter at a blank position that is not yet
/// guessed increments that letter's count; counts are then normalized by the
/// total. Returns `None` when the total is zero (every candidate letter at a
/// blank is already guessed), which signals the caller to fall back to the
/// heuristic tiers.
#[must_use]
pub fn letter_frequencies(
    candidates: &[&Word],
    pattern: &Pattern,
    guessed: LetterSet,
) -> Option<Distribution> {
    let mut counts = [0u32; Letter::COUNT];

    for word in candidates {
        for (letter, cell) in word.letters().zip(pattern.cells()) {
            if cell.is_none() && !guessed.contains(letter) {
                counts[letter.index()] += 1;
            }
        }
    }

    if counts.iter().all(|&c| c == 0) {
        return None;
    }

    Some(Distribution::normalized(
        Letter::all().map(|l| (l, f64::from(counts[l.index()]))),
    ))
}
