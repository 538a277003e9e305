//! Search command
//!
//! Ranks every word of the corpus containing a syllable for a given round
//! state.

use crate::core::{Corpus, LetterMask, MaskError, RoundState, StateError, is_valid_syllable};
use crate::search::{DEFAULT_MAX_WORD_LENGTH, Ranker, RankerConfig, SyllableIndex};
use thiserror::Error;

/// Why a search could not run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("'{0}' is not a syllable (2 to 4 letters a-z)")]
    InvalidSyllable(String),
    #[error("invalid bonus letters: {0}")]
    InvalidBonus(#[from] MaskError),
    #[error(transparent)]
    State(#[from] StateError),
}

/// Configuration for a search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub syllable: String,
    /// Letters already banked toward the bonus life
    pub bonus: Option<String>,
    pub lives: u32,
    pub max_lives: u32,
    pub top: usize,
    pub human_mode: bool,
    pub max_word_length: usize,
    pub ranker: RankerConfig,
}

impl SearchConfig {
    /// Search for `syllable` at full lives with nothing banked
    #[must_use]
    pub fn new(syllable: impl Into<String>) -> Self {
        Self {
            syllable: syllable.into(),
            bonus: None,
            lives: 2,
            max_lives: 3,
            top: 10,
            human_mode: false,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            ranker: RankerConfig::default(),
        }
    }
}

/// One ranked candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub word: String,
    pub progress: u32,
    pub cost: u32,
    pub frequency: u64,
}

/// Result of a search
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub syllable: String,
    pub state: RoundState,
    /// How many words contain the syllable
    pub total_candidates: usize,
    /// Best candidates first, at most `top` of them
    pub hits: Vec<SearchHit>,
}

impl SearchResult {
    /// The word the bot would play
    #[must_use]
    pub fn best(&self) -> Option<&SearchHit> {
        self.hits.first()
    }
}

/// Rank the candidates for a syllable
///
/// # Errors
///
/// Returns a `SearchError` if the syllable or bonus letters are malformed, or
/// if the lives make no sense.
///
/// # Examples
/// ```
/// use syllable_bot::commands::{SearchConfig, search_syllable};
/// use syllable_bot::core::Corpus;
///
/// let mut corpus = Corpus::new();
/// corpus.add_words(["quartz", "equator", "bomb"]);
///
/// let config = SearchConfig { lives: 1, max_lives: 2, ..SearchConfig::new("QUA") };
/// let result = search_syllable(&corpus, &config).unwrap();
/// assert_eq!(result.total_candidates, 2);
/// assert_eq!(result.best().unwrap().word, "equator");
/// ```
pub fn search_syllable(
    corpus: &Corpus,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    let syllable = config.syllable.trim().to_lowercase();
    if !is_valid_syllable(&syllable) {
        return Err(SearchError::InvalidSyllable(config.syllable.clone()));
    }

    let mut state = RoundState::new(config.lives, config.max_lives, config.human_mode)?;
    if let Some(bonus) = config.bonus.as_deref().filter(|b| !b.is_empty()) {
        state.bank(LetterMask::of(&bonus.to_lowercase())?);
    }

    let index = SyllableIndex::build(corpus, config.max_word_length, config.human_mode);
    let ranked = Ranker::new(config.ranker).rank_all(&index, &syllable, &state);
    let total_candidates = ranked.len();

    let hits = ranked
        .into_iter()
        .take(config.top)
        .map(|r| SearchHit {
            word: r.entry.word.clone(),
            progress: r.progress,
            cost: r.cost,
            frequency: r.entry.frequency,
        })
        .collect();

    Ok(SearchResult {
        syllable,
        state,
        total_candidates,
        hits,
    })
}
