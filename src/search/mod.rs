//! Syllable search
//!
//! The per-round syllable index and the ranking that picks a word from it.

mod index;
mod ranking;

pub use index::{DEFAULT_MAX_WORD_LENGTH, SyllableIndex, build_index};
pub use ranking::{RankKey, Ranked, Ranker, RankerConfig};
