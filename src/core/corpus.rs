//! Word corpus
//!
//! The corpus holds every admissible word once, together with its letter mask
//! and usage frequency. It is built at startup and only read afterwards.

use super::LetterMask;
use rustc_hash::FxHashMap;

/// Index of a word inside a [`Corpus`]
pub type WordId = u32;

/// Token that marks the header line of a frequency table
pub const FREQUENCY_HEADER: &str = "rank";

/// A single admissible word with its derived data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub word: String,
    pub mask: LetterMask,
    /// Usage frequency, 0 when unknown
    pub frequency: u64,
}

impl CorpusEntry {
    /// Frequency bucket used by human-mode ranking
    ///
    /// 2 for common words, 1 for known but rare words, 0 for unknown words.
    #[inline]
    #[must_use]
    pub const fn frequency_level(&self) -> u8 {
        match self.frequency {
            0 => 0,
            1..=400 => 1,
            _ => 2,
        }
    }
}

/// Deduplicated collection of admissible words
///
/// Iteration follows first-insertion order, which keeps every structure
/// derived from the corpus reproducible.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
    ids: FxHashMap<String, WordId>,
}

impl Corpus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add words, silently dropping any that are not pure lowercase a-z
    ///
    /// A word that is already present is reset to frequency 0 but keeps its
    /// original position. Returns how many new words were added.
    ///
    /// # Examples
    /// ```
    /// use syllable_bot::core::Corpus;
    ///
    /// let mut corpus = Corpus::new();
    /// let added = corpus.add_words(["bomb", "party", "o'clock", "bomb"]);
    /// assert_eq!(added, 2);
    /// assert_eq!(corpus.len(), 2);
    /// ```
    pub fn add_words<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.entries.len();

        for word in words {
            let word = word.as_ref();
            let Ok(mask) = LetterMask::of(word) else {
                continue;
            };

            if let Some(&id) = self.ids.get(word) {
                let entry = &mut self.entries[id as usize];
                entry.mask = mask;
                entry.frequency = 0;
            } else {
                let id = self.entries.len() as WordId;
                self.ids.insert(word.to_string(), id);
                self.entries.push(CorpusEntry {
                    word: word.to_string(),
                    mask,
                    frequency: 0,
                });
            }
        }

        self.entries.len() - before
    }

    /// Apply a ranked frequency table
    ///
    /// Lines before the header (the first line containing the token `rank`)
    /// are ignored. Each following row is `rank word frequency`, separated by
    /// whitespace, commas or tabs. Rows that do not parse or that name a word
    /// outside the corpus are skipped. Returns how many words were updated.
    ///
    /// # Examples
    /// ```
    /// use syllable_bot::core::Corpus;
    ///
    /// let mut corpus = Corpus::new();
    /// corpus.add_words(["the", "bomb"]);
    ///
    /// let table = "Top words\nrank,word,count\n1,the,5000\n2,zebra,10\nbad row\n";
    /// assert_eq!(corpus.add_frequencies(table.lines()), 1);
    /// assert_eq!(corpus.get("the").unwrap().frequency, 5000);
    /// assert_eq!(corpus.get("bomb").unwrap().frequency, 0);
    /// ```
    pub fn add_frequencies<I, S>(&mut self, rows: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut updated = 0;
        let mut in_table = false;

        for row in rows {
            let row = row.as_ref();

            if !in_table {
                in_table = split_row(row)
                    .any(|field| field.eq_ignore_ascii_case(FREQUENCY_HEADER));
                continue;
            }

            let Some((word, frequency)) = parse_frequency_row(row) else {
                continue;
            };

            if let Some(&id) = self.ids.get(word.as_str()) {
                self.entries[id as usize].frequency = frequency;
                updated += 1;
            }
        }

        updated
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&CorpusEntry> {
        self.id_of(word).map(|id| &self.entries[id as usize])
    }

    #[inline]
    #[must_use]
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.ids.get(word).copied()
    }

    /// Look up an entry by id
    ///
    /// # Panics
    /// Panics if `id` did not come from this corpus.
    #[inline]
    #[must_use]
    pub fn entry(&self, id: WordId) -> &CorpusEntry {
        &self.entries[id as usize]
    }

    /// All entries in insertion order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CorpusEntry> {
        self.entries.iter()
    }
}

/// Build a corpus from several word lists and an optional frequency table
///
/// Word lists are whitespace-separated text and are lowercased before masking.
#[must_use]
pub fn build_corpus<W, F>(word_lists: &[W], frequency_rows: Option<F>) -> Corpus
where
    W: AsRef<str>,
    F: AsRef<str>,
{
    let mut corpus = Corpus::new();

    for list in word_lists {
        let text = list.as_ref().to_lowercase();
        let added = corpus.add_words(text.split_whitespace());
        tracing::info!(added, words = corpus.len(), "word list loaded");
    }

    if let Some(rows) = frequency_rows {
        let updated = corpus.add_frequencies(rows.as_ref().lines());
        tracing::info!(updated, "frequencies loaded");
    }

    corpus
}

fn split_row(row: &str) -> impl Iterator<Item = &str> {
    row.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
}

fn parse_frequency_row(row: &str) -> Option<(String, u64)> {
    let mut fields = split_row(row);
    let _rank: u64 = fields.next()?.parse().ok()?;
    let word = fields.next()?.to_lowercase();
    let frequency = fields.next()?.parse().ok()?;
    Some((word, frequency))
}
