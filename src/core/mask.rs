//! Letter mask representation
//!
//! A `LetterMask` packs the set of distinct letters of a word into the low
//! 26 bits of a `u32`, with bit `i` standing for the letter `'a' + i`.

use std::fmt;
use thiserror::Error;

/// Every bit that can belong to a letter of the alphabet
pub const ALL_LETTERS: LetterMask = LetterMask(0x03FF_FFFF);

/// Letters counted towards the alphabet bonus: everything except k, w, y and z
///
/// Defined as an explicit 26-bit complement so no bit above `z` is ever set.
pub const AVAILABLE_MASK: LetterMask = LetterMask(
    ALL_LETTERS.0
        ^ (1 << (b'k' - b'a'))
        ^ (1 << (b'w' - b'a'))
        ^ (1 << (b'y' - b'a'))
        ^ (1 << (b'z' - b'a')),
);

/// Set of distinct lowercase letters present in a word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterMask(u32);

/// Error type for words that cannot be masked
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("word is empty")]
    Empty,
    #[error("word contains '{0}', only lowercase a-z is allowed")]
    InvalidCharacter(char),
}

impl LetterMask {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Compute the mask of a word
    ///
    /// # Errors
    /// Returns `MaskError` if the word is empty or contains anything other
    /// than lowercase ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use syllable_bot::core::LetterMask;
    ///
    /// let mask = LetterMask::of("abba").unwrap();
    /// assert_eq!(mask.bits(), 0b11);
    /// assert_eq!(mask, LetterMask::of("ab").unwrap());
    ///
    /// assert!(LetterMask::of("Abba").is_err());
    /// ```
    pub fn of(word: &str) -> Result<Self, MaskError> {
        if word.is_empty() {
            return Err(MaskError::Empty);
        }

        word.chars().try_fold(Self::EMPTY, |mask, c| {
            if c.is_ascii_lowercase() {
                Ok(Self(mask.0 | 1 << (c as u8 - b'a')))
            } else {
                Err(MaskError::InvalidCharacter(c))
            }
        })
    }

    /// Wrap raw bits, discarding anything above bit 25
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & ALL_LETTERS.0)
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether `letter` belongs to the set
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter - b'a')) != 0
    }

    /// Letters in the set, in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = char> {
        (b'a'..=b'z')
            .filter(move |&letter| self.contains(letter))
            .map(char::from)
    }

    /// Scoring letters a word spends: `popcount(mask & AVAILABLE)`
    #[inline]
    #[must_use]
    pub const fn cost(self) -> u32 {
        self.intersection(AVAILABLE_MASK).count()
    }

    /// New scoring letters gained by adding this word to `bonus`
    #[inline]
    #[must_use]
    pub const fn progress(self, bonus: Self) -> u32 {
        bonus.union(self).cost() - bonus.cost()
    }
}

impl fmt::Display for LetterMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
