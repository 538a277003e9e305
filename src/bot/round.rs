//! Game event dispatch for one round

use super::engine::{Bot, BotConfig, BotError};
use crate::core::Corpus;
use crate::typist::{Action, RandomSource};
use rand::rngs::StdRng;

/// Identifies a player in the room
pub type PeerId = u32;

/// Events the game server sends during a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Start {
        holder: PeerId,
        syllable: String,
        lives: u32,
        max_lives: u32,
    },
    NextTurn {
        holder: PeerId,
        syllable: String,
    },
    /// Contents of a player's input field
    PlayerWord {
        peer: PeerId,
        text: String,
    },
    CorrectWord {
        peer: PeerId,
    },
    FailWord {
        peer: PeerId,
    },
    BonusAlphabet {
        peer: PeerId,
    },
    LivesLost {
        peer: PeerId,
    },
    End,
}

/// Feeds game events to a [`Bot`] on behalf of one player
///
/// The last word shown in anybody's input field is what correct and failed
/// word events refer to.
///
/// # Examples
/// ```
/// use syllable_bot::bot::{BotConfig, GameEvent, Round};
/// use syllable_bot::core::Corpus;
/// use syllable_bot::typist::{Action, Key};
///
/// let mut corpus = Corpus::new();
/// corpus.add_words(["quartz", "equator"]);
///
/// let mut round = Round::seeded(&corpus, BotConfig::default(), 1, 7);
/// let actions = round
///     .apply(GameEvent::Start { holder: 7, syllable: "qua".into(), lives: 2, max_lives: 2 })
///     .unwrap();
/// assert_eq!(actions, [Action::Press(Key::Line("quartz".into()))]);
/// ```
#[derive(Debug)]
pub struct Round<'a, R = StdRng> {
    bot: Bot<'a, R>,
    me: PeerId,
    holder: Option<PeerId>,
    syllable: String,
    last_word: String,
    finished: bool,
}

impl<'a> Round<'a, StdRng> {
    /// Round played by `me` with reproducible typing
    #[must_use]
    pub fn seeded(corpus: &'a Corpus, config: BotConfig, seed: u64, me: PeerId) -> Self {
        Self::new(Bot::seeded(corpus, config, seed), me)
    }
}

impl<'a, R: RandomSource> Round<'a, R> {
    #[must_use]
    pub const fn new(bot: Bot<'a, R>, me: PeerId) -> Self {
        Self {
            bot,
            me,
            holder: None,
            syllable: String::new(),
            last_word: String::new(),
            finished: false,
        }
    }

    /// Apply one event, returning the actions to perform if it is now our turn
    ///
    /// # Errors
    /// Fails once the round is over, or when the event contradicts the bot's
    /// view of the round.
    pub fn apply(&mut self, event: GameEvent) -> Result<Vec<Action>, BotError> {
        if self.finished {
            return Err(BotError::RoundOver);
        }
        tracing::trace!(?event, "game event");

        match event {
            GameEvent::Start {
                holder,
                syllable,
                lives,
                max_lives,
            } => {
                self.bot.on_start(lives, max_lives)?;
                self.begin_turn(holder, syllable)
            }
            GameEvent::NextTurn { holder, syllable } => {
                self.bot.on_turn_end()?;
                self.begin_turn(holder, syllable)
            }
            GameEvent::PlayerWord { text, .. } => {
                self.last_word = text.to_lowercase();
                Ok(Vec::new())
            }
            GameEvent::CorrectWord { peer } => {
                let word = self.played_word(peer);
                if peer == self.me {
                    self.bot.on_correct_word(&word)?;
                } else {
                    self.bot.on_use_word(&word)?;
                }
                Ok(Vec::new())
            }
            GameEvent::FailWord { peer } => {
                let word = self.played_word(peer);
                self.bot.on_use_word(&word)?;
                // The bomb stays with whoever failed
                if peer == self.me && self.holder == Some(self.me) {
                    self.bot.on_search_syllable(&self.syllable)
                } else {
                    Ok(Vec::new())
                }
            }
            GameEvent::BonusAlphabet { peer } => {
                if peer == self.me {
                    self.bot.on_bonus_life()?;
                }
                Ok(Vec::new())
            }
            GameEvent::LivesLost { peer } => {
                if peer == self.me {
                    self.bot.on_lost_life()?;
                }
                Ok(Vec::new())
            }
            GameEvent::End => {
                self.finished = true;
                tracing::info!("round over");
                Ok(Vec::new())
            }
        }
    }

    fn begin_turn(&mut self, holder: PeerId, syllable: String) -> Result<Vec<Action>, BotError> {
        self.holder = Some(holder);
        self.syllable = syllable;
        self.last_word.clear();

        if holder == self.me {
            self.bot.on_search_syllable(&self.syllable)
        } else {
            Ok(Vec::new())
        }
    }

    /// Word a verdict refers to; our own pending word if the input field was never shown
    fn played_word(&self, peer: PeerId) -> String {
        match self.bot.pending_word() {
            Some(pending) if peer == self.me && self.last_word.is_empty() => pending.to_string(),
            _ => self.last_word.clone(),
        }
    }

    #[must_use]
    pub const fn bot(&self) -> &Bot<'a, R> {
        &self.bot
    }

    #[must_use]
    pub fn syllable(&self) -> &str {
        &self.syllable
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.holder == Some(self.me)
    }
}
