//! Syllable extraction
//!
//! A syllable is any contiguous 2-4 letter fragment of a word. The game
//! prompts with one of these and the player must answer with a word containing it.

use std::iter::FusedIterator;

/// Shortest syllable the game prompts with
pub const MIN_SYLLABLE_LEN: usize = 2;

/// Longest syllable the game prompts with
pub const MAX_SYLLABLE_LEN: usize = 4;

/// Lazy iterator over the syllables of a word
///
/// Yields every 2-letter window left to right, then every 3-letter window,
/// then every 4-letter window. Windows longer than the word are skipped.
#[derive(Debug, Clone)]
pub struct Syllables<'a> {
    word: &'a str,
    window: usize,
    start: usize,
}

/// Decompose a word into its syllables
///
/// Non-ASCII input yields nothing, since such words can never be indexed.
///
/// # Examples
/// ```
/// use syllable_bot::core::syllables;
///
/// let all: Vec<&str> = syllables("bomb").collect();
/// assert_eq!(all, ["bo", "om", "mb", "bom", "omb", "bomb"]);
/// ```
#[must_use]
pub fn syllables(word: &str) -> Syllables<'_> {
    let window = if word.is_ascii() {
        MIN_SYLLABLE_LEN
    } else {
        MAX_SYLLABLE_LEN + 1
    };

    Syllables {
        word,
        window,
        start: 0,
    }
}

impl<'a> Iterator for Syllables<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while self.window <= MAX_SYLLABLE_LEN && self.window <= self.word.len() {
            if self.start + self.window <= self.word.len() {
                let syllable = &self.word[self.start..self.start + self.window];
                self.start += 1;
                return Some(syllable);
            }
            self.window += 1;
            self.start = 0;
        }
        None
    }
}

impl FusedIterator for Syllables<'_> {}

/// Check whether a prompt is something the game could ask for
#[must_use]
pub fn is_valid_syllable(syllable: &str) -> bool {
    (MIN_SYLLABLE_LEN..=MAX_SYLLABLE_LEN).contains(&syllable.len())
        && syllable.bytes().all(|b| b.is_ascii_lowercase())
}
