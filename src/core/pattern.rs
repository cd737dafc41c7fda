//! Masked word patterns
//!
//! A `Pattern` is the caller's current knowledge of the target word: one cell
//! per position, either a revealed letter or a blank rendered as `_`.

use super::letter::{Letter, LetterSet};
use super::word::Word;
use std::fmt;

/// The placeholder character for unrevealed positions
pub const PLACEHOLDER: char = '_';

/// A partially revealed word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<Option<Letter>>,
}

/// Error type for unparsable patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    symbol: char,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pattern may only contain letters and '{PLACEHOLDER}', got '{}'",
            self.symbol
        )
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Parse a pattern from text such as `_A_E` or `c_t`
    ///
    /// Letters are case-normalized; `_` marks an unrevealed position.
    ///
    /// # Errors
    /// Returns `PatternError` on any symbol that is neither a letter nor the
    /// placeholder.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    ///
    /// let pattern = Pattern::parse("_A_E").unwrap();
    /// assert_eq!(pattern.len(), 4);
    /// assert_eq!(pattern.blanks(), 2);
    /// ```
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let cells = text
            .chars()
            .map(|c| {
                if c == PLACEHOLDER {
                    Ok(None)
                } else {
                    Letter::from_char(c)
                        .map(Some)
                        .ok_or(PatternError { symbol: c })
                }
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { cells })
    }

    /// Derive the pattern a game would show for a target and guessed set
    ///
    /// Every position holding a guessed letter is revealed, all others are
    /// blank.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{LetterSet, Pattern, Word};
    ///
    /// let target = Word::new("cat").unwrap();
    /// let guessed = LetterSet::from_text("AT");
    /// assert_eq!(Pattern::reveal(&target, guessed).to_string(), "_AT");
    /// ```
    #[must_use]
    pub fn reveal(target: &Word, guessed: LetterSet) -> Self {
        let cells = target
            .letters()
            .map(|l| guessed.contains(l).then_some(l))
            .collect();

        Self { cells }
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the pattern has zero positions (degenerate input)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at a position: `Some(letter)` if revealed, `None` if blank
    #[inline]
    #[must_use]
    pub fn cell(&self, position: usize) -> Option<Letter> {
        self.cells[position]
    }

    /// Iterate the cells in order
    pub fn cells(&self) -> impl Iterator<Item = Option<Letter>> + '_ {
        self.cells.iter().copied()
    }

    /// Number of unrevealed positions
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Fraction of positions still unrevealed
    ///
    /// Defined as 1.0 for the zero-length pattern so degenerate input lands
    /// in the early-game fallback tier.
    #[must_use]
    pub fn blank_ratio(&self) -> f64 {
        if self.cells.is_empty() {
            1.0
        } else {
            self.blanks() as f64 / self.cells.len() as f64
        }
    }

    /// Whether every position is revealed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(letter) => write!(f, "{letter}")?,
                None => write!(f, "{PLACEHOLDER}")?,
            }
        }
        Ok(())
    }
}
