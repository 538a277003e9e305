//! Word list loading utilities
//!
//! Dictionaries are plain text with whitespace-separated words. Frequency
//! tables are ranked rows under a header line, as accepted by
//! [`Corpus::add_frequencies`].

use super::{SAMPLE_FREQUENCIES, SAMPLE_WORDS};
use crate::core::{Corpus, build_corpus};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading word lists from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} contains no usable words", .path.display())]
    NoWords { path: PathBuf },
}

/// Read a whole list file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be opened or is not UTF-8.
pub fn read_list<P: AsRef<Path>>(path: P) -> Result<String, LoadError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Build a corpus from dictionary files and an optional frequency table
///
/// With no dictionaries the embedded sample list is used instead.
///
/// # Errors
///
/// Returns a `LoadError` if a file cannot be read, or if a dictionary holds
/// no admissible word at all.
///
/// # Examples
/// ```no_run
/// use syllable_bot::wordlists::loader::load_corpus;
/// use std::path::PathBuf;
///
/// let corpus = load_corpus(&[PathBuf::from("data/sample_words.txt")], None).unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_corpus(dictionaries: &[PathBuf], frequencies: Option<&Path>) -> Result<Corpus, LoadError> {
    if dictionaries.is_empty() {
        let mut corpus = sample_corpus();
        if let Some(path) = frequencies {
            let table = read_list(path)?;
            corpus.add_frequencies(table.lines());
        }
        return Ok(corpus);
    }

    let lists = dictionaries
        .iter()
        .map(|path| {
            let text = read_list(path)?;
            if Corpus::new().add_words(text.to_lowercase().split_whitespace()) == 0 {
                return Err(LoadError::NoWords { path: path.clone() });
            }
            Ok(text)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let table = frequencies.map(read_list).transpose()?;
    let corpus = build_corpus(&lists, table.as_deref());

    tracing::info!(
        words = corpus.len(),
        dictionaries = dictionaries.len(),
        frequencies = table.is_some(),
        "corpus loaded"
    );
    Ok(corpus)
}

/// Corpus built from the embedded sample lists
///
/// # Examples
/// ```
/// use syllable_bot::wordlists::loader::sample_corpus;
///
/// let corpus = sample_corpus();
/// assert!(corpus.get("quartz").is_some());
/// assert!(corpus.get("café").is_none());
/// ```
#[must_use]
pub fn sample_corpus() -> Corpus {
    let mut corpus = Corpus::new();
    corpus.add_words(SAMPLE_WORDS.iter().map(|word| word.to_lowercase()));
    corpus.add_frequencies(SAMPLE_FREQUENCIES);

    tracing::debug!(words = corpus.len(), "sample corpus loaded");
    corpus
}
