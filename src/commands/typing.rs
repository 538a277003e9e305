//! Typing preview command
//!
//! Shows the keystrokes the typist would produce for a word.

use crate::core::{LetterMask, MaskError, RoundState, StateError, syllables};
use crate::typist::{Action, Playback, Typist, TypistConfig, playback};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypingError {
    #[error("cannot type '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: MaskError,
    },
    #[error("'{word}' does not contain '{syllable}'")]
    SyllableNotInWord { word: String, syllable: String },
    #[error(transparent)]
    State(#[from] StateError),
}

/// Configuration for a typing preview
#[derive(Debug, Clone)]
pub struct TypingConfig {
    pub word: String,
    /// Prompt the word answers; its first syllable when absent
    pub syllable: Option<String>,
    pub lives: u32,
    pub max_lives: u32,
    /// Fixed seed for a reproducible preview
    pub seed: Option<u64>,
    pub typist: TypistConfig,
}

impl TypingConfig {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            syllable: None,
            lives: 2,
            max_lives: 3,
            seed: None,
            typist: TypistConfig::default(),
        }
    }
}

/// Result of a typing preview
#[derive(Debug, Clone)]
pub struct TypingResult {
    pub word: String,
    pub syllable: String,
    pub actions: Vec<Action>,
    pub playback: Playback,
}

impl TypingResult {
    /// True when the typist gave up before submitting
    #[must_use]
    pub const fn gave_up(&self) -> bool {
        !self.playback.submitted
    }
}

/// Plan a human-like attempt at typing a word
///
/// # Errors
///
/// Returns a `TypingError` if the word is not admissible, does not contain
/// the syllable, or the lives make no sense.
///
/// # Examples
/// ```
/// use syllable_bot::commands::{TypingConfig, preview_typing};
///
/// let config = TypingConfig { seed: Some(3), lives: 1, ..TypingConfig::new("bomb") };
/// let result = preview_typing(&config).unwrap();
/// assert_eq!(result.syllable, "bo");
/// assert!(result.playback.submitted);
/// assert_eq!(result.playback.text, "bomb");
/// ```
pub fn preview_typing(config: &TypingConfig) -> Result<TypingResult, TypingError> {
    let word = config.word.trim().to_lowercase();
    LetterMask::of(&word).map_err(|source| TypingError::InvalidWord {
        word: word.clone(),
        source,
    })?;

    let syllable = match &config.syllable {
        Some(s) => s.trim().to_lowercase(),
        None => syllables(&word).next().unwrap_or(word.as_str()).to_string(),
    };
    if !word.contains(&syllable) {
        return Err(TypingError::SyllableNotInWord { word, syllable });
    }

    let state = RoundState::new(config.lives, config.max_lives, true)?;

    let mut typist = match config.seed {
        Some(seed) => Typist::seeded(config.typist, seed),
        None => Typist::from_os_rng(config.typist),
    };
    let actions = typist.act(&word, &syllable, true, state.lives, state.max_lives)?;
    let playback = playback(&actions);

    Ok(TypingResult {
        word,
        syllable,
        actions,
        playback,
    })
}
