//! The bot
//!
//! [`Bot`] answers syllables and tracks lives and banked letters for one
//! round. [`Round`] translates game events into calls on a bot.

mod engine;
mod round;

pub use engine::{Bot, BotConfig, BotError, Phase};
pub use round::{GameEvent, PeerId, Round};
