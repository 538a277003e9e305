//! Per-round player state

use super::LetterMask;
use thiserror::Error;

/// Errors raised when the caller hands over impossible round state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("max lives must be at least 1")]
    NoMaxLives,
    #[error("{lives} lives exceeds the maximum of {max_lives}")]
    TooManyLives { lives: u32, max_lives: u32 },
    #[error("cannot lose a life with none left")]
    NoLivesLeft,
}

/// Reject life counts no round can have
///
/// # Errors
/// Returns `StateError` if `max_lives` is 0 or `lives` exceeds it.
pub const fn check_lives(lives: u32, max_lives: u32) -> Result<(), StateError> {
    if max_lives == 0 {
        return Err(StateError::NoMaxLives);
    }
    if lives > max_lives {
        return Err(StateError::TooManyLives { lives, max_lives });
    }
    Ok(())
}

/// What the bot knows about itself during a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    /// Letters banked toward the alphabet bonus in the current life
    pub bonus_mask: LetterMask,
    pub lives: u32,
    pub max_lives: u32,
    /// Emulate a human player: prefer common words and type them imperfectly
    pub human_mode: bool,
}

impl RoundState {
    /// Create state for a fresh round
    ///
    /// # Errors
    /// Returns `StateError` if `max_lives` is 0 or `lives` exceeds it.
    pub const fn new(lives: u32, max_lives: u32, human_mode: bool) -> Result<Self, StateError> {
        if let Err(err) = check_lives(lives, max_lives) {
            return Err(err);
        }

        Ok(Self {
            bonus_mask: LetterMask::EMPTY,
            lives,
            max_lives,
            human_mode,
        })
    }

    /// True when another life would still be useful
    #[inline]
    #[must_use]
    pub const fn needs_lives(&self) -> bool {
        self.lives < self.max_lives
    }

    /// Bank the letters of a word that was just accepted
    pub const fn bank(&mut self, mask: LetterMask) {
        self.bonus_mask = self.bonus_mask.union(mask);
    }

    /// Alphabet completed: the bank empties and a life is restored, up to the cap
    pub const fn bonus_life(&mut self) {
        self.bonus_mask = LetterMask::EMPTY;
        if self.lives < self.max_lives {
            self.lives += 1;
        }
    }

    /// # Errors
    /// Returns `StateError::NoLivesLeft` if lives are already at 0.
    pub const fn lose_life(&mut self) -> Result<(), StateError> {
        if self.lives == 0 {
            return Err(StateError::NoLivesLeft);
        }
        self.lives -= 1;
        Ok(())
    }
}
