//! Benchmark command
//!
//! Self-play: the bot answers random prompts on its own for many rounds and
//! the outcomes are tallied. Rounds run in parallel, each with its own index,
//! bot and seeded generator.

use crate::bot::{Bot, BotConfig, BotError};
use crate::core::{AVAILABLE_MASK, Corpus};
use crate::search::SyllableIndex;
use crate::typist::playback;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Prompts are only drawn from syllables at least this many words contain
const MIN_PROMPT_WORDS: usize = 5;

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub rounds: usize,
    /// Turns per round, unless the bot runs out of lives first
    pub turns: usize,
    pub lives: u32,
    pub max_lives: u32,
    pub seed: u64,
    pub bot: BotConfig,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            rounds: 100,
            turns: 50,
            lives: 2,
            max_lives: 3,
            seed: 0,
            bot: BotConfig::default(),
            show_progress: false,
        }
    }
}

/// Tally of one simulated round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundOutcome {
    pub turns: usize,
    pub words_played: usize,
    /// Turns with no word found or an attempt abandoned
    pub misses: usize,
    pub bonus_lives: usize,
    pub total_cost: u64,
    pub survived: bool,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub rounds: usize,
    pub prompt_pool: usize,
    pub turns: usize,
    pub words_played: usize,
    pub misses: usize,
    pub bonus_lives: usize,
    pub rounds_survived: usize,
    /// Scoring letters spent per word played
    pub average_cost: f64,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Syllables common enough to be used as prompts, sorted
#[must_use]
pub fn prompt_pool(corpus: &Corpus, config: &BotConfig) -> Vec<String> {
    let index = SyllableIndex::build(corpus, config.max_word_length, config.human_mode);
    let mut pool: Vec<String> = index
        .syllables()
        .filter(|syllable| index.bucket_len(syllable) >= MIN_PROMPT_WORDS)
        .map(str::to_string)
        .collect();
    pool.sort_unstable();
    pool
}

/// Play one round against random prompts
///
/// # Errors
///
/// Returns a `BotError` if the configured lives are invalid.
pub fn simulate_round(
    corpus: &Corpus,
    pool: &[String],
    config: &BenchmarkConfig,
    round: u64,
) -> Result<RoundOutcome, BotError> {
    let seed = config.seed.wrapping_add(round);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut bot = Bot::seeded(corpus, config.bot, seed.rotate_left(32));
    bot.on_start(config.lives, config.max_lives)?;

    let mut outcome = RoundOutcome::default();
    // Starting without lives is a round already lost
    if config.lives == 0 {
        return Ok(outcome);
    }
    if pool.is_empty() {
        outcome.survived = true;
        return Ok(outcome);
    }

    for _ in 0..config.turns {
        outcome.turns += 1;
        let syllable = &pool[rng.random_range(0..pool.len())];
        let actions = bot.on_search_syllable(syllable)?;

        match bot.pending_word() {
            Some(word) if playback(&actions).submitted => {
                outcome.words_played += 1;
                outcome.total_cost += u64::from(corpus.get(word).map_or(0, |e| e.mask.cost()));
                bot.on_correct_word(word)?;

                let banked = bot.round_state().map(|state| state.bonus_mask);
                if banked.is_some_and(|mask| mask.intersection(AVAILABLE_MASK) == AVAILABLE_MASK) {
                    bot.on_bonus_life()?;
                    outcome.bonus_lives += 1;
                }
            }
            _ => {
                outcome.misses += 1;
                bot.on_turn_end()?;
                bot.on_lost_life()?;
                if bot.round_state().is_some_and(|state| state.lives == 0) {
                    return Ok(outcome);
                }
            }
        }
    }

    outcome.survived = true;
    Ok(outcome)
}

/// Run the benchmark
///
/// # Errors
///
/// Returns a `BotError` if the configured lives are invalid.
pub fn run_benchmark(
    corpus: &Corpus,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, BotError> {
    let start = Instant::now();
    let pool = prompt_pool(corpus, &config.bot);
    tracing::info!(prompts = pool.len(), rounds = config.rounds, "starting benchmark");

    let pb = if config.show_progress {
        ProgressBar::new(config.rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("playing rounds");

    let outcomes = (0..config.rounds as u64)
        .into_par_iter()
        .map(|round| {
            let outcome = simulate_round(corpus, &pool, config, round);
            pb.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("done");
    let duration = start.elapsed();

    let words_played = outcomes.iter().map(|o| o.words_played).sum::<usize>();
    let total_cost = outcomes.iter().map(|o| o.total_cost).sum::<u64>();

    Ok(BenchmarkResult {
        rounds: outcomes.len(),
        prompt_pool: pool.len(),
        turns: outcomes.iter().map(|o| o.turns).sum(),
        words_played,
        misses: outcomes.iter().map(|o| o.misses).sum(),
        bonus_lives: outcomes.iter().map(|o| o.bonus_lives).sum(),
        rounds_survived: outcomes.iter().filter(|o| o.survived).count(),
        average_cost: if words_played == 0 {
            0.0
        } else {
            total_cost as f64 / words_played as f64
        },
        duration,
        rounds_per_second: outcomes.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
