//! Secret candidates and acceptable guesses

use super::embedded::{ALLOWED, ANSWERS};
use super::loader::words_from_slice;
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Ordered secret candidates plus the set of words a player may guess
///
/// Every candidate is also an acceptable guess; [`Dictionary::new`] enforces it.
#[derive(Debug, Clone)]
pub struct Dictionary {
    candidates: Vec<Word>,
    acceptable: FxHashSet<Word>,
}

impl Dictionary {
    /// Build from explicit lists
    ///
    /// # Examples
    /// ```
    /// use daily_word::core::Word;
    /// use daily_word::wordlists::Dictionary;
    ///
    /// let lemon = Word::new("lemon").unwrap();
    /// let dict = Dictionary::new(vec![lemon.clone()], Vec::new());
    /// assert!(dict.is_acceptable(&lemon));
    /// ```
    #[must_use]
    pub fn new(candidates: Vec<Word>, acceptable: impl IntoIterator<Item = Word>) -> Self {
        let mut acceptable: FxHashSet<Word> = acceptable.into_iter().collect();
        acceptable.extend(candidates.iter().cloned());
        Self {
            candidates,
            acceptable,
        }
    }

    /// Dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Accept additional guess words, e.g. from a user word list
    #[must_use]
    pub fn with_extra_guesses(mut self, words: impl IntoIterator<Item = Word>) -> Self {
        self.acceptable.extend(words);
        self
    }

    /// Secret candidates in selection order
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn is_acceptable(&self, word: &Word) -> bool {
        self.acceptable.contains(word)
    }

    /// Case-insensitive lookup of raw text
    #[must_use]
    pub fn accepts(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.is_acceptable(&word))
    }

    /// Number of acceptable guesses
    #[must_use]
    pub fn acceptable_len(&self) -> usize {
        self.acceptable.len()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{ALLOWED_COUNT, ANSWERS_COUNT};

    #[test]
    fn embedded_candidates_keep_file_order() {
        let dict = Dictionary::embedded();
        assert_eq!(dict.candidates().len(), ANSWERS_COUNT);
        assert_eq!(dict.candidates()[0].text(), ANSWERS[0]);
        assert_eq!(dict.acceptable_len(), ALLOWED_COUNT);
    }

    #[test]
    fn candidates_are_always_acceptable() {
        let candidate = Word::new("zzzzz").unwrap();
        let dict = Dictionary::new(vec![candidate.clone()], [Word::new("lemon").unwrap()]);
        assert!(dict.is_acceptable(&candidate));
        assert_eq!(dict.acceptable_len(), 2);
    }

    #[test]
    fn accepts_is_case_insensitive() {
        let dict = Dictionary::embedded();
        assert!(dict.accepts("LEMON"));
        assert!(dict.accepts("melon"));
        assert!(!dict.accepts("xqzvw"));
        assert!(!dict.accepts("lemons"));
    }

    #[test]
    fn extra_guesses_extend_acceptable_set() {
        let dict = Dictionary::embedded().with_extra_guesses([Word::new("xqzvw").unwrap()]);
        assert!(dict.accepts("xqzvw"));
    }
}
