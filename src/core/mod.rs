//! Core domain types for syllable search
//!
//! Letter masks, syllable extraction, the word corpus and per-round state.
//! Everything here is deterministic.

mod corpus;
mod mask;
mod state;
mod syllable;

pub use corpus::{Corpus, CorpusEntry, FREQUENCY_HEADER, WordId, build_corpus};
pub use mask::{ALL_LETTERS, AVAILABLE_MASK, LetterMask, MaskError};
pub use state::{RoundState, StateError, check_lives};
pub use syllable::{MAX_SYLLABLE_LEN, MIN_SYLLABLE_LEN, Syllables, is_valid_syllable, syllables};
