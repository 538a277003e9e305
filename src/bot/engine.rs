//! Per-round bot state machine

use crate::core::{Corpus, LetterMask, RoundState, StateError};
use crate::search::{DEFAULT_MAX_WORD_LENGTH, Ranker, RankerConfig, SyllableIndex};
use crate::typist::{Action, RandomSource, Typist, TypistConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use thiserror::Error;

/// Where the bot is within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the round to start
    Idle,
    /// Ready to answer a syllable
    Armed,
    /// Actions were handed out and the outcome is not known yet
    Pending,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Armed => write!(f, "armed"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

/// Errors signalling that the caller and the bot disagree about the round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BotError {
    #[error(transparent)]
    State(#[from] StateError),
    #[error("round has not started")]
    NotStarted,
    #[error("round already started")]
    AlreadyStarted,
    #[error("cannot search for a word while {0}")]
    NotArmed(Phase),
    #[error("round is over")]
    RoundOver,
}

/// Everything that shapes how the bot plays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotConfig {
    pub human_mode: bool,
    /// Longest word indexed in human mode
    pub max_word_length: usize,
    pub ranker: RankerConfig,
    pub typist: TypistConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            human_mode: false,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            ranker: RankerConfig::default(),
            typist: TypistConfig::default(),
        }
    }
}

impl BotConfig {
    #[must_use]
    pub fn human() -> Self {
        Self {
            human_mode: true,
            ..Self::default()
        }
    }
}

/// Bot for a single round
///
/// Owns the round's syllable index and state. Events must be delivered one
/// at a time, in the order the game produced them.
#[derive(Debug)]
pub struct Bot<'a, R = StdRng> {
    index: SyllableIndex<'a>,
    ranker: Ranker,
    typist: Typist<R>,
    human_mode: bool,
    state: Option<RoundState>,
    phase: Phase,
    pending_word: Option<&'a str>,
}

impl<'a> Bot<'a, StdRng> {
    /// Bot whose typing is reproducible
    #[must_use]
    pub fn seeded(corpus: &'a Corpus, config: BotConfig, seed: u64) -> Self {
        Self::new(corpus, config, StdRng::seed_from_u64(seed))
    }

    /// Bot seeded from the operating system
    #[must_use]
    pub fn from_os_rng(corpus: &'a Corpus, config: BotConfig) -> Self {
        Self::new(corpus, config, StdRng::from_os_rng())
    }
}

impl<'a, R: RandomSource> Bot<'a, R> {
    /// Build a fresh index from `corpus` and wait for the round to start
    #[must_use]
    pub fn new(corpus: &'a Corpus, config: BotConfig, rng: R) -> Self {
        Self {
            index: SyllableIndex::build(corpus, config.max_word_length, config.human_mode),
            ranker: Ranker::new(config.ranker),
            typist: Typist::new(config.typist, rng),
            human_mode: config.human_mode,
            state: None,
            phase: Phase::Idle,
            pending_word: None,
        }
    }

    /// Round started with the given lives
    ///
    /// # Errors
    /// Fails if the round already started or the lives make no sense.
    pub fn on_start(&mut self, lives: u32, max_lives: u32) -> Result<(), BotError> {
        if self.phase != Phase::Idle {
            return Err(BotError::AlreadyStarted);
        }

        self.state = Some(RoundState::new(lives, max_lives, self.human_mode)?);
        self.phase = Phase::Armed;
        tracing::info!(lives, max_lives, human_mode = self.human_mode, "round started");
        Ok(())
    }

    /// Our turn: pick a word for `syllable` and plan how to type it
    ///
    /// Returns no actions when nothing in the index contains the syllable.
    ///
    /// # Errors
    /// Fails unless the bot is armed, or if the round state holds lives no
    /// round can have.
    ///
    /// # Examples
    /// ```
    /// use syllable_bot::bot::{Bot, BotConfig, Phase};
    /// use syllable_bot::core::Corpus;
    /// use syllable_bot::typist::{Action, Key};
    ///
    /// let mut corpus = Corpus::new();
    /// corpus.add_words(["quartz", "equator"]);
    ///
    /// let mut bot = Bot::seeded(&corpus, BotConfig::default(), 1);
    /// bot.on_start(2, 2).unwrap();
    ///
    /// let actions = bot.on_search_syllable("qua").unwrap();
    /// assert_eq!(actions, [Action::Press(Key::Line("quartz".to_string()))]);
    /// assert_eq!(bot.phase(), Phase::Pending);
    /// ```
    pub fn on_search_syllable(&mut self, syllable: &str) -> Result<Vec<Action>, BotError> {
        if self.phase != Phase::Armed {
            return Err(BotError::NotArmed(self.phase));
        }
        let state = self.state()?;

        let Some(entry) = self.ranker.best(&self.index, syllable, &state) else {
            tracing::warn!(syllable, "no word found");
            return Ok(Vec::new());
        };

        tracing::info!(
            syllable,
            word = entry.word.as_str(),
            cost = entry.mask.cost(),
            progress = entry.mask.progress(state.bonus_mask),
            "chose word"
        );

        let actions = self.typist.act(
            &entry.word,
            syllable,
            state.human_mode,
            state.lives,
            state.max_lives,
        )?;
        self.pending_word = Some(entry.word.as_str());
        self.phase = Phase::Pending;
        Ok(actions)
    }

    /// Our word was accepted: bank its letters and retire it
    ///
    /// # Errors
    /// Fails before the round starts.
    pub fn on_correct_word(&mut self, word: &str) -> Result<(), BotError> {
        let state = self.state_mut()?;
        match LetterMask::of(word) {
            Ok(mask) => state.bank(mask),
            Err(err) => tracing::warn!(word, %err, "accepted word has no letter mask"),
        }
        self.retire(word);
        Ok(())
    }

    /// Somebody played `word`: it can no longer be used this round
    ///
    /// # Errors
    /// Fails before the round starts.
    pub fn on_use_word(&mut self, word: &str) -> Result<(), BotError> {
        self.state()?;
        self.retire(word);
        Ok(())
    }

    /// Alphabet completed: the bank resets and a life comes back
    ///
    /// # Errors
    /// Fails before the round starts.
    pub fn on_bonus_life(&mut self) -> Result<(), BotError> {
        let state = self.state_mut()?;
        state.bonus_life();
        tracing::info!(lives = state.lives, "bonus life");
        Ok(())
    }

    /// # Errors
    /// Fails before the round starts, or when no lives are left to lose.
    pub fn on_lost_life(&mut self) -> Result<(), BotError> {
        let state = self.state_mut()?;
        state.lose_life()?;
        tracing::info!(lives = state.lives, "lost a life");
        Ok(())
    }

    /// The turn moved on without a verdict on our word
    ///
    /// # Errors
    /// Fails before the round starts.
    pub fn on_turn_end(&mut self) -> Result<(), BotError> {
        self.state()?;
        self.pending_word = None;
        self.phase = Phase::Armed;
        Ok(())
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Round state, once the round has started
    #[must_use]
    pub const fn round_state(&self) -> Option<&RoundState> {
        self.state.as_ref()
    }

    /// Word chosen by the last search, until its outcome is known
    #[must_use]
    pub const fn pending_word(&self) -> Option<&'a str> {
        self.pending_word
    }

    #[must_use]
    pub const fn index(&self) -> &SyllableIndex<'a> {
        &self.index
    }

    fn retire(&mut self, word: &str) {
        let buckets = self.index.remove(word);
        tracing::debug!(word, buckets, "word retired");
        self.pending_word = None;
        self.phase = Phase::Armed;
    }

    fn state(&self) -> Result<RoundState, BotError> {
        self.state.ok_or(BotError::NotStarted)
    }

    fn state_mut(&mut self) -> Result<&mut RoundState, BotError> {
        self.state.as_mut().ok_or(BotError::NotStarted)
    }
}
