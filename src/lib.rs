//! Syllable Bot
//!
//! Word search and human-like typing for Bomb Party style games, where each
//! turn asks for a word containing a short syllable.
//!
//! # Quick Start
//!
//! ```rust
//! use syllable_bot::bot::{Bot, BotConfig};
//! use syllable_bot::core::Corpus;
//! use syllable_bot::typist::playback;
//!
//! let mut corpus = Corpus::new();
//! corpus.add_words(["quartz", "equator"]);
//!
//! let mut bot = Bot::seeded(&corpus, BotConfig::default(), 0);
//! bot.on_start(1, 2).unwrap();
//!
//! // A life is missing, so the word banking the most letters wins
//! let actions = bot.on_search_syllable("qua").unwrap();
//! assert_eq!(playback(&actions).text, "equator");
//! ```

// Core domain types
pub mod core;

// Syllable index and ranking
pub mod search;

// Keystroke generation
pub mod typist;

// Round state machine and event dispatch
pub mod bot;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
