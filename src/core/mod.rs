//! Core domain types for Hangman prediction
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod distribution;
mod letter;
mod pattern;
mod word;

pub use distribution::{Distribution, SUM_TOLERANCE};
pub use letter::{Letter, LetterSet};
pub use pattern::{PLACEHOLDER, Pattern, PatternError};
pub use word::{Word, WordError};
