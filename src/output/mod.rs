//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_actions, print_benchmark_result, print_search_result, print_typing_result};
