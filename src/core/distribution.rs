//! Letter probability distributions
//!
//! The engine's output type. Backed by a fixed 26-slot array so that equal
//! inputs always produce bit-identical values and iteration order is
//! alphabetical by construction, never incidental map order.

use super::letter::Letter;

/// Tolerance for the sum-to-one invariant
pub const SUM_TOLERANCE: f64 = 1e-6;

/// A probability distribution over letters
///
/// Invariants: when non-empty, the weights sum to 1.0 within
/// [`SUM_TOLERANCE`]; every weight is non-negative. The empty distribution
/// (all weights zero) means "no letters remain to guess".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Distribution {
    weights: [f64; Letter::COUNT],
}

impl Distribution {
    /// The empty distribution
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a normalized distribution from raw non-negative weights
    ///
    /// Weights for the same letter accumulate. A zero (or empty) total yields
    /// the empty distribution.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Distribution, Letter};
    ///
    /// let e = Letter::from_char('E').unwrap();
    /// let t = Letter::from_char('T').unwrap();
    /// let dist = Distribution::normalized([(e, 3.0), (t, 1.0)]);
    ///
    /// assert!((dist.get(e) - 0.75).abs() < 1e-9);
    /// assert!((dist.get(t) - 0.25).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn normalized(raw: impl IntoIterator<Item = (Letter, f64)>) -> Self {
        let mut weights = [0.0; Letter::COUNT];
        for (letter, weight) in raw {
            weights[letter.index()] += weight;
        }

        let total: f64 = weights.iter().sum();
        if total > 0.0 {
            for weight in &mut weights {
                *weight /= total;
            }
        }

        Self { weights }
    }

    /// The weight assigned to a letter (0.0 if absent)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: Letter) -> f64 {
        self.weights[letter.index()]
    }

    /// Iterate `(letter, weight)` pairs with positive weight, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (Letter, f64)> + '_ {
        Letter::all()
            .map(|l| (l, self.get(l)))
            .filter(|&(_, w)| w > 0.0)
    }

    /// Number of letters with positive weight
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether no letter has positive weight
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.iter().all(|&w| w <= 0.0)
    }

    /// Sum of all weights (1.0 within tolerance unless empty)
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// The `n` heaviest letters, descending by weight
    ///
    /// Equal weights rank alphabetically, so the result is deterministic.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(Letter, f64)> {
        let mut entries: Vec<(Letter, f64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn normalized_sums_to_one() {
        let dist = Distribution::normalized([(letter('A'), 2.0), (letter('B'), 3.0)]);
        assert!((dist.sum() - 1.0).abs() < SUM_TOLERANCE);
        assert!((dist.get(letter('A')) - 0.4).abs() < 1e-9);
        assert!((dist.get(letter('B')) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn normalized_accumulates_duplicates() {
        let dist = Distribution::normalized([
            (letter('E'), 1.0),
            (letter('E'), 1.0),
            (letter('T'), 2.0),
        ]);
        assert!((dist.get(letter('E')) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn normalized_zero_total_is_empty() {
        let dist = Distribution::normalized([]);
        assert!(dist.is_empty());
        assert_eq!(dist.len(), 0);
        assert!((dist.sum() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn get_absent_letter_is_zero() {
        let dist = Distribution::normalized([(letter('A'), 1.0)]);
        assert!((dist.get(letter('Z')) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn iter_is_alphabetical() {
        let dist = Distribution::normalized([
            (letter('Z'), 1.0),
            (letter('A'), 1.0),
            (letter('M'), 1.0),
        ]);
        let order: String = dist.iter().map(|(l, _)| l.as_char()).collect();
        assert_eq!(order, "AMZ");
    }

    #[test]
    fn top_orders_by_weight_then_alphabet() {
        let dist = Distribution::normalized([
            (letter('T'), 2.0),
            (letter('B'), 1.0),
            (letter('A'), 1.0),
        ]);

        let top = dist.top(3);
        assert_eq!(top[0].0, letter('T'));
        // Tied weights break alphabetically
        assert_eq!(top[1].0, letter('A'));
        assert_eq!(top[2].0, letter('B'));
    }

    #[test]
    fn top_truncates() {
        let dist = Distribution::normalized([
            (letter('A'), 1.0),
            (letter('B'), 2.0),
            (letter('C'), 3.0),
        ]);
        assert_eq!(dist.top(2).len(), 2);
        assert_eq!(dist.top(2)[0].0, letter('C'));
    }

    #[test]
    fn determinism_bit_identical() {
        let build = || {
            Distribution::normalized([
                (letter('E'), 12.7),
                (letter('T'), 9.06),
                (letter('A'), 8.17),
            ])
        };
        assert_eq!(build(), build());
    }
}
