//! Command implementations

pub mod benchmark;
pub mod search;
pub mod simple;
pub mod typing;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, RoundOutcome, run_benchmark};
pub use search::{SearchConfig, SearchError, SearchHit, SearchResult, search_syllable};
pub use simple::{ParseError, ReplCommand, parse_command, run_simple};
pub use typing::{TypingConfig, TypingError, TypingResult, preview_typing};
