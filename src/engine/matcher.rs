//! Structural pattern matchers
//!
//! Two passes over a length bucket: the exact matcher enforces both the
//! revealed-position and blank-exclusion rules; the partial matcher relaxes
//! the exclusion rule to widen the sampling pool when exact matches are
//! scarce.

use crate::core::{Letter, LetterSet, Pattern, Word};
use crate::engine::index::CorpusIndex;

/// Find corpus words fully consistent with the pattern and guessed set
///
/// A candidate qualifies when every revealed position matches exactly AND no
/// blank position holds an already-guessed letter. A guessed letter is either
/// revealed everywhere it occurs or absent from the target, so a candidate
/// with a guessed letter under a blank contradicts the game state.
///
/// Results are in corpus order. An absent length bucket yields no matches.
#[must_use]
pub fn exact_matches<'a>(
    index: &'a CorpusIndex,
    pattern: &Pattern,
    guessed: LetterSet,
) -> Vec<&'a Word> {
    index
        .bucket(pattern.len())
        .iter()
        .filter(|word| is_exact_match(word, pattern, guessed))
        .collect()
}

/// Find corpus words matching only the revealed positions
///
/// Intentionally over-admits candidates that may contain ruled-out letters;
/// the result is a sampling pool for frequency signal, not a hypothesis set.
/// Truncated to the first `cap` matches in corpus order to bound cost on
/// large corpora.
#[must_use]
pub fn partial_matches<'a>(
    index: &'a CorpusIndex,
    pattern: &Pattern,
    cap: usize,
) -> Vec<&'a Word> {
    index
        .bucket(pattern.len())
        .iter()
        .filter(|word| matches_revealed(word, pattern))
        .take(cap)
        .collect()
}

fn is_exact_match(word: &Word, pattern: &Pattern, guessed: LetterSet) -> bool {
    word.letters()
        .zip(pattern.cells())
        .all(|(letter, cell)| match cell {
            Some(revealed) => letter == revealed,
            None => !guessed.contains(letter),
        })
}

fn matches_revealed(word: &Word, pattern: &Pattern) -> bool {
    word.letters()
        .zip(pattern.cells())
        .all(|(letter, cell)| cell.is_none_or(|revealed| revealed == letter))
}

/// Letters fixed by the pattern's revealed positions
///
/// Useful for display; the matchers work position-by-position and do not
/// need it.
#[must_use]
pub fn revealed_letters(pattern: &Pattern) -> LetterSet {
    pattern.cells().flatten().collect::<LetterSet>()
}
