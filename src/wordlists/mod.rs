//! Word lists
//!
//! An embedded sample dictionary plus loaders for lists on disk.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE_FREQUENCIES, SAMPLE_WORDS};
pub use loader::{LoadError, load_corpus, read_list, sample_corpus};
