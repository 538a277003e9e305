//! Syllable Bot - CLI
//!
//! Word search, typing previews, a hand-driven event loop and self-play
//! benchmarks for Bomb Party style games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use syllable_bot::{
    bot::{BotConfig, PeerId},
    commands::{
        BenchmarkConfig, SearchConfig, TypingConfig, preview_typing, run_benchmark, run_simple,
        search_syllable,
    },
    core::Corpus,
    output::{print_benchmark_result, print_search_result, print_typing_result},
    search::{DEFAULT_MAX_WORD_LENGTH, RankerConfig},
    typist::TypistConfig,
    wordlists::load_corpus,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "syllable_bot",
    about = "Finds words for syllable prompts and types them like a person would",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, whitespace separated (repeatable; default: embedded sample)
    #[arg(short, long, global = true)]
    dictionary: Vec<PathBuf>,

    /// Frequency table with a 'rank' header line
    #[arg(short, long, global = true)]
    frequencies: Option<PathBuf>,

    /// Play like a human: prefer familiar words and type them out with mistakes
    #[arg(long, global = true)]
    human: bool,

    /// Longest word used in human mode
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_WORD_LENGTH)]
    max_word_length: usize,

    /// More logging (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the words containing a syllable
    Search {
        /// The prompt syllable
        syllable: String,

        /// Letters already banked toward the bonus life
        #[arg(short, long)]
        bonus: Option<String>,

        #[arg(short, long, default_value = "2")]
        lives: u32,

        #[arg(short, long, default_value = "3")]
        max_lives: u32,

        /// Number of candidates to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Preview the keystrokes for typing a word
    Type {
        /// The word to type
        word: String,

        /// Prompt the word answers (default: its first two letters)
        #[arg(short, long)]
        syllable: Option<String>,

        #[arg(short, long, default_value = "2")]
        lives: u32,

        #[arg(short, long, default_value = "3")]
        max_lives: u32,

        /// Seed for a reproducible preview
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Simple CLI mode (type game events, see the bot's answers)
    Simple {
        /// Our own peer id
        #[arg(long, default_value = "1")]
        me: PeerId,

        /// Seed for reproducible typing
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Self-play over random prompts
    Benchmark {
        /// Number of rounds
        #[arg(short = 'n', long, default_value = "100")]
        rounds: usize,

        /// Turns per round
        #[arg(short, long, default_value = "50")]
        turns: usize,

        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let corpus = load_corpus(&cli.dictionary, cli.frequencies.as_deref())
        .context("failed to load word lists")?;

    let config = BotConfig {
        human_mode: cli.human,
        max_word_length: cli.max_word_length,
        ranker: RankerConfig::default(),
        typist: TypistConfig::default(),
    };

    // Default to the event loop if no command given
    let command = cli.command.unwrap_or(Commands::Simple { me: 1, seed: None });

    match command {
        Commands::Search {
            syllable,
            bonus,
            lives,
            max_lives,
            top,
        } => run_search_command(
            &corpus,
            &SearchConfig {
                bonus,
                lives,
                max_lives,
                top,
                human_mode: config.human_mode,
                max_word_length: config.max_word_length,
                ranker: config.ranker,
                ..SearchConfig::new(syllable)
            },
        ),
        Commands::Type {
            word,
            syllable,
            lives,
            max_lives,
            seed,
        } => run_type_command(&TypingConfig {
            syllable,
            lives,
            max_lives,
            seed,
            typist: config.typist,
            ..TypingConfig::new(word)
        }),
        Commands::Simple { me, seed } => run_simple(&corpus, config, me, seed),
        Commands::Benchmark {
            rounds,
            turns,
            seed,
        } => run_benchmark_command(
            &corpus,
            &BenchmarkConfig {
                rounds,
                turns,
                seed,
                bot: config,
                show_progress: true,
                ..BenchmarkConfig::default()
            },
        ),
    }
}

fn run_search_command(corpus: &Corpus, config: &SearchConfig) -> Result<()> {
    let result = search_syllable(corpus, config)?;
    print_search_result(&result);
    Ok(())
}

fn run_type_command(config: &TypingConfig) -> Result<()> {
    let result = preview_typing(config)?;
    print_typing_result(&result);
    Ok(())
}

fn run_benchmark_command(corpus: &Corpus, config: &BenchmarkConfig) -> Result<()> {
    println!(
        "Running {} rounds of {} turns over {} words...",
        config.rounds,
        config.turns,
        corpus.len()
    );

    let result = run_benchmark(corpus, config).context("benchmark failed")?;
    print_benchmark_result(&result);
    Ok(())
}
