//! Syllable index
//!
//! Maps every syllable to the corpus words containing it. One index is built
//! per round and shrinks as words get played.

use crate::core::{Corpus, CorpusEntry, WordId, syllables};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Longest word considered when emulating a human player
pub const DEFAULT_MAX_WORD_LENGTH: usize = 12;

/// Syllable to candidate words, borrowing entries from a shared corpus
///
/// Each bucket keeps corpus order, so ranking ties resolve the same way
/// every time.
#[derive(Debug, Clone)]
pub struct SyllableIndex<'a> {
    corpus: &'a Corpus,
    buckets: FxHashMap<String, Vec<WordId>>,
}

impl<'a> SyllableIndex<'a> {
    /// Index every corpus word under each of its syllables
    ///
    /// When `human_mode` is set, words longer than `max_word_length` are left
    /// out, since nobody types those under time pressure.
    ///
    /// # Examples
    /// ```
    /// use syllable_bot::core::Corpus;
    /// use syllable_bot::search::SyllableIndex;
    ///
    /// let mut corpus = Corpus::new();
    /// corpus.add_words(["quartz", "equator", "aqua"]);
    ///
    /// let index = SyllableIndex::build(&corpus, 12, false);
    /// let words: Vec<&str> = index.lookup("qua").map(|e| e.word.as_str()).collect();
    /// assert_eq!(words, ["quartz", "equator", "aqua"]);
    /// assert_eq!(index.lookup("xyz").count(), 0);
    /// ```
    #[must_use]
    pub fn build(corpus: &'a Corpus, max_word_length: usize, human_mode: bool) -> Self {
        let postings: Vec<(WordId, Vec<&str>)> = corpus
            .entries()
            .par_iter()
            .enumerate()
            .filter(|(_, entry)| !human_mode || entry.word.len() <= max_word_length)
            .map(|(id, entry)| (id as WordId, syllables(&entry.word).collect()))
            .collect();

        let mut buckets: FxHashMap<String, Vec<WordId>> = FxHashMap::default();
        for (id, word_syllables) in postings {
            for syllable in word_syllables {
                let bucket = buckets.entry(syllable.to_string()).or_default();
                // Repeated syllables within one word ("banana") land back to back
                if bucket.last() != Some(&id) {
                    bucket.push(id);
                }
            }
        }

        tracing::debug!(
            words = corpus.len(),
            syllables = buckets.len(),
            human_mode,
            "built syllable index"
        );

        Self { corpus, buckets }
    }

    /// Candidates for a syllable, empty when nothing contains it
    pub fn lookup(&self, syllable: &str) -> impl Iterator<Item = &'a CorpusEntry> + '_ {
        let corpus = self.corpus;
        self.buckets
            .get(syllable)
            .into_iter()
            .flatten()
            .map(move |&id| corpus.entry(id))
    }

    /// Drop a played word from every bucket it sits in
    ///
    /// Unknown words and words already removed are ignored. Returns the
    /// number of buckets the word was removed from.
    pub fn remove(&mut self, word: &str) -> usize {
        let Some(id) = self.corpus.id_of(word) else {
            return 0;
        };

        let mut removed = 0;
        for syllable in syllables(word) {
            if let Some(bucket) = self.buckets.get_mut(syllable) {
                if let Some(position) = bucket.iter().position(|&other| other == id) {
                    bucket.remove(position);
                    removed += 1;
                }
            }
        }
        removed
    }

    /// Check whether `word` is still a candidate for `syllable`
    #[must_use]
    pub fn contains(&self, syllable: &str, word: &str) -> bool {
        self.corpus.id_of(word).is_some_and(|id| {
            self.buckets
                .get(syllable)
                .is_some_and(|bucket| bucket.contains(&id))
        })
    }

    /// Number of candidates left for a syllable
    #[must_use]
    pub fn bucket_len(&self, syllable: &str) -> usize {
        self.buckets.get(syllable).map_or(0, Vec::len)
    }

    /// Number of distinct syllables ever indexed, including emptied ones
    #[must_use]
    pub fn syllable_count(&self) -> usize {
        self.buckets.len()
    }

    /// Syllables that still have at least one candidate, in arbitrary order
    pub fn syllables(&self) -> impl Iterator<Item = &str> {
        self.buckets
            .iter()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(syllable, _)| syllable.as_str())
    }
}

/// Shorthand for [`SyllableIndex::build`]
#[must_use]
pub fn build_index(corpus: &Corpus, max_word_length: usize, human_mode: bool) -> SyllableIndex<'_> {
    SyllableIndex::build(corpus, max_word_length, human_mode)
}
