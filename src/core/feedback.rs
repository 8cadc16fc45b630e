//! Guess evaluation and per-letter feedback
//!
//! Each position of a guess receives one [`LetterVerdict`]:
//! - `Correct` (green): right letter, right position
//! - `Present` (yellow): letter is in the secret at another position
//! - `Absent` (gray): no unclaimed occurrence of the letter remains
//!
//! Duplicate letters are resolved the standard way: positional matches claim
//! their secret letter first, then displaced matches claim the remaining ones
//! left to right, so a secret letter is never credited twice.

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for one letter of a guess
///
/// Variants are ordered by precedence, so `Correct > Present > Absent`.
/// An unknown letter is represented by the absence of a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterVerdict {
    Absent,
    Present,
    Correct,
}

impl LetterVerdict {
    /// Lowercase name used in persisted board snapshots
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        }
    }

    /// Parse a persisted state name; the empty string means unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "absent" => Some(Self::Absent),
            "present" => Some(Self::Present),
            "correct" => Some(Self::Correct),
            _ => None,
        }
    }

    /// Emoji square for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdicts for a complete guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterVerdict; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const PERFECT: Self = Self([LetterVerdict::Correct; WORD_LENGTH]);

    /// Wrap precomputed verdicts
    #[must_use]
    pub const fn new(verdicts: [LetterVerdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Start with every verdict `Absent` and a mutable copy of the secret
    /// 2. First pass: exact position matches become `Correct` and consume their secret letter
    /// 3. Second pass: remaining guess letters become `Present` if an unconsumed
    ///    occurrence exists, consuming the first such occurrence
    ///
    /// # Examples
    /// ```
    /// use daily_word::core::{Feedback, LetterVerdict::*, Word};
    ///
    /// let secret = Word::new("lemon").unwrap();
    /// let guess = Word::new("melon").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// assert_eq!(feedback.verdicts(), &[Present, Correct, Present, Correct, Correct]);
    /// assert_eq!(feedback.score(), 5);
    /// assert!(!feedback.is_win());
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut verdicts = [LetterVerdict::Absent; WORD_LENGTH];
        let mut remaining: [Option<u8>; WORD_LENGTH] = (*secret.chars()).map(Some);

        // First pass: greens
        for (i, &letter) in guess.chars().iter().enumerate() {
            if remaining[i] == Some(letter) {
                verdicts[i] = LetterVerdict::Correct;
                remaining[i] = None;
            }
        }

        // Second pass: yellows from whatever the greens left behind
        for (i, &letter) in guess.chars().iter().enumerate() {
            if verdicts[i] == LetterVerdict::Correct {
                continue;
            }
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
                verdicts[i] = LetterVerdict::Present;
                *slot = None;
            }
        }

        Self(verdicts)
    }

    /// Per-position verdicts
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[LetterVerdict; WORD_LENGTH] {
        &self.0
    }

    /// Number of letters that are not `Absent`
    #[must_use]
    pub fn score(&self) -> u8 {
        self.0
            .iter()
            .filter(|&&v| v != LetterVerdict::Absent)
            .count() as u8
    }

    /// Number of `Correct` letters
    #[must_use]
    pub fn count_correct(&self) -> u8 {
        self.0
            .iter()
            .filter(|&&v| v == LetterVerdict::Correct)
            .count() as u8
    }

    /// Every position correct
    ///
    /// Stricter than `score() == WORD_LENGTH`: an anagram of the secret scores
    /// full marks without winning.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.count_correct() as usize == WORD_LENGTH
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use daily_word::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut verdicts = [LetterVerdict::Absent; WORD_LENGTH];
        for (slot, ch) in verdicts.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterVerdict::Correct,
                'Y' | 'y' | '🟨' => LetterVerdict::Present,
                '-' | '_' | '⬜' => LetterVerdict::Absent,
                _ => return None,
            };
        }

        Some(Self(verdicts))
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
