//! Candidate ranking
//!
//! Picks the word to play for a syllable. Every variant of the ranking
//! (bonus-only, lives-aware, frequency-aware) is one [`Ranker`] with
//! different [`RankerConfig`] switches.
//!
//! # Keys
//! All components are maximised, compared lexicographically:
//! - machine, lives missing: `(progress, -cost)`
//! - machine, lives full: `(-cost)`
//! - human, lives missing: `(frequency level, progress, -cost)`
//! - human, lives full: `(frequency level, -length, -cost)`

use super::SyllableIndex;
use crate::core::{CorpusEntry, RoundState};
use std::cmp::Reverse;

/// Switches selecting a ranking variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankerConfig {
    /// Bucket human-mode candidates by usage frequency first
    pub use_frequency: bool,
    /// Stop chasing bonus letters once lives are full. When off, the ranker
    /// always behaves as if a life were missing.
    pub lives_aware: bool,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            use_frequency: true,
            lives_aware: true,
        }
    }
}

/// Composite ranking key, higher is better
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey(u8, i64, i64);

/// A candidate together with the numbers that ranked it
#[derive(Debug, Clone, Copy)]
pub struct Ranked<'a> {
    pub entry: &'a CorpusEntry,
    pub key: RankKey,
    /// New bonus letters the word would bank
    pub progress: u32,
    /// Bonus-eligible letters the word spends
    pub cost: u32,
}

/// Multi-criteria candidate selector
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    config: RankerConfig,
}

impl Ranker {
    #[must_use]
    pub const fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    /// Compute the ranking key of one candidate
    #[must_use]
    pub fn key(&self, entry: &CorpusEntry, state: &RoundState) -> RankKey {
        let cost = i64::from(entry.mask.cost());
        let progress = i64::from(entry.mask.progress(state.bonus_mask));
        let chase_bonus = !self.config.lives_aware || state.needs_lives();

        if state.human_mode {
            let level = if self.config.use_frequency {
                entry.frequency_level()
            } else {
                0
            };
            if chase_bonus {
                RankKey(level, progress, -cost)
            } else {
                RankKey(level, -(entry.word.len() as i64), -cost)
            }
        } else if chase_bonus {
            RankKey(0, progress, -cost)
        } else {
            RankKey(0, -cost, 0)
        }
    }

    /// Select the best candidate, or `None` when there are none
    ///
    /// Ties go to the candidate that comes first.
    pub fn select<'a, I>(&self, candidates: I, state: &RoundState) -> Option<&'a CorpusEntry>
    where
        I: IntoIterator<Item = &'a CorpusEntry>,
    {
        let mut best: Option<(&CorpusEntry, RankKey)> = None;

        for entry in candidates {
            let key = self.key(entry, state);
            if best.is_none_or(|(_, best_key)| key > best_key) {
                best = Some((entry, key));
            }
        }

        best.map(|(entry, _)| entry)
    }

    /// Best word in the index for a syllable
    ///
    /// # Examples
    /// ```
    /// use syllable_bot::core::{Corpus, RoundState};
    /// use syllable_bot::search::{Ranker, SyllableIndex};
    ///
    /// let mut corpus = Corpus::new();
    /// corpus.add_words(["quartz", "equator"]);
    /// let index = SyllableIndex::build(&corpus, 12, false);
    ///
    /// // Full lives: spend as few bonus letters as possible
    /// let state = RoundState::new(2, 2, false).unwrap();
    /// let best = Ranker::default().best(&index, "qua", &state).unwrap();
    /// assert_eq!(best.word, "quartz");
    ///
    /// // A life is missing: bank as many new letters as possible
    /// let state = RoundState::new(1, 2, false).unwrap();
    /// let best = Ranker::default().best(&index, "qua", &state).unwrap();
    /// assert_eq!(best.word, "equator");
    /// ```
    #[must_use]
    pub fn best<'a>(
        &self,
        index: &SyllableIndex<'a>,
        syllable: &str,
        state: &RoundState,
    ) -> Option<&'a CorpusEntry> {
        self.select(index.lookup(syllable), state)
    }

    /// Every candidate for a syllable, best first
    #[must_use]
    pub fn rank_all<'a>(
        &self,
        index: &SyllableIndex<'a>,
        syllable: &str,
        state: &RoundState,
    ) -> Vec<Ranked<'a>> {
        let mut ranked: Vec<Ranked<'a>> = index
            .lookup(syllable)
            .map(|entry| Ranked {
                entry,
                key: self.key(entry, state),
                progress: entry.mask.progress(state.bonus_mask),
                cost: entry.mask.cost(),
            })
            .collect();

        // Stable sort keeps index order among equal keys
        ranked.sort_by_key(|r| Reverse(r.key));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Corpus, LetterMask};

    fn corpus(words: &[&str]) -> Corpus {
        let mut corpus = Corpus::new();
        corpus.add_words(words);
        corpus
    }

    fn state(lives: u32, max_lives: u32, human_mode: bool) -> RoundState {
        RoundState::new(lives, max_lives, human_mode).unwrap()
    }

    fn pick<'a>(
        index: &SyllableIndex<'a>,
        syllable: &str,
        state: &RoundState,
    ) -> Option<&'a str> {
        Ranker::default()
            .best(index, syllable, state)
            .map(|e| e.word.as_str())
    }

    #[test]
    fn quartz_equator_full_lives_prefers_cheaper() {
        let corpus = corpus(&["quartz", "equator"]);
        let index = SyllableIndex::build(&corpus, 12, false);

        // quartz spends 5 scoring letters, equator 7
        assert_eq!(pick(&index, "qua", &state(3, 3, false)), Some("quartz"));
    }

    #[test]
    fn missing_life_prefers_progress() {
        let corpus = corpus(&["quartz", "equator"]);
        let index = SyllableIndex::build(&corpus, 12, false);
        assert_eq!(pick(&index, "qua", &state(2, 3, false)), Some("equator"));
    }

    #[test]
    fn progress_ignores_banked_letters() {
        let corpus = corpus(&["equator", "quartz"]);
        let index = SyllableIndex::build(&corpus, 12, false);

        // e and o are banked, so both words gain 5 letters and cost decides
        let mut s = state(2, 3, false);
        s.bank(LetterMask::of("eo").unwrap());
        assert_eq!(pick(&index, "qua", &s), Some("quartz"));
    }

    #[test]
    fn progress_tie_broken_by_lower_cost() {
        let corpus = corpus(&["abcx", "abc"]);
        let index = SyllableIndex::build(&corpus, 12, false);

        // x is already banked, so both gain a, b, c; abc spends fewer letters
        let mut s = state(1, 3, false);
        s.bank(LetterMask::of("x").unwrap());
        assert_eq!(pick(&index, "ab", &s), Some("abc"));
    }

    #[test]
    fn free_letters_do_not_count_as_cost() {
        let corpus = corpus(&["fizz", "fig"]);
        let index = SyllableIndex::build(&corpus, 12, false);
        // fizz costs f, i = 2; fig costs 3
        assert_eq!(pick(&index, "fi", &state(3, 3, false)), Some("fizz"));
    }

    #[test]
    fn ties_go_to_first_candidate() {
        let corpus = corpus(&["stop", "pots", "tops"]);
        let index = SyllableIndex::build(&corpus, 12, false);
        assert_eq!(pick(&index, "op", &state(3, 3, false)), Some("stop"));
        assert_eq!(pick(&index, "to", &state(1, 3, false)), Some("stop"));
    }

    #[test]
    fn no_candidate_is_none() {
        let corpus = corpus(&["quartz"]);
        let index = SyllableIndex::build(&corpus, 12, false);
        assert_eq!(pick(&index, "xx", &state(3, 3, false)), None);
    }

    #[test]
    fn machine_mode_never_trades_progress_away() {
        let corpus = corpus(&["cat", "catalog", "scatter", "cathedral", "education"]);
        let index = SyllableIndex::build(&corpus, 12, false);
        let s = state(1, 3, false);

        let best = Ranker::default().best(&index, "cat", &s).unwrap();
        let best_progress = best.mask.progress(s.bonus_mask);
        for entry in index.lookup("cat") {
            assert!(entry.mask.progress(s.bonus_mask) <= best_progress);
        }
    }

    #[test]
    fn lives_unaware_always_chases_bonus() {
        let corpus = corpus(&["quartz", "equator"]);
        let index = SyllableIndex::build(&corpus, 12, false);
        let ranker = Ranker::new(RankerConfig {
            lives_aware: false,
            ..RankerConfig::default()
        });

        let best = ranker.best(&index, "qua", &state(3, 3, false)).unwrap();
        assert_eq!(best.word, "equator");
    }

    #[test]
    fn human_mode_prefers_common_words() {
        let mut corpus = corpus(&["equator", "quartz", "aqua"]);
        corpus.add_frequencies(["rank word count", "1 aqua 900", "2 quartz 50"]);
        let index = SyllableIndex::build(&corpus, 12, true);

        // aqua is the only level-2 word, so it wins despite low progress
        assert_eq!(pick(&index, "qua", &state(1, 3, true)), Some("aqua"));
    }

    #[test]
    fn human_mode_full_lives_prefers_short_words() {
        let mut corpus = corpus(&["equator", "quartz", "squad"]);
        corpus.add_frequencies([
            "rank word count",
            "1 equator 500",
            "2 quartz 500",
            "3 squad 500",
        ]);
        let index = SyllableIndex::build(&corpus, 12, true);

        assert_eq!(pick(&index, "qua", &state(3, 3, true)), Some("squad"));
    }

    #[test]
    fn human_mode_missing_life_uses_progress_within_level() {
        let mut corpus = corpus(&["squad", "equator", "quartz"]);
        corpus.add_frequencies([
            "rank word count",
            "1 squad 500",
            "2 equator 500",
            "3 quartz 5",
        ]);
        let index = SyllableIndex::build(&corpus, 12, true);

        assert_eq!(pick(&index, "qua", &state(2, 3, true)), Some("equator"));
    }

    #[test]
    fn human_mode_without_frequency_ignores_levels() {
        let mut corpus = corpus(&["equator", "aqua"]);
        corpus.add_frequencies(["rank word count", "1 aqua 900"]);
        let index = SyllableIndex::build(&corpus, 12, true);
        let ranker = Ranker::new(RankerConfig {
            use_frequency: false,
            ..RankerConfig::default()
        });

        let best = ranker.best(&index, "qua", &state(1, 3, true)).unwrap();
        assert_eq!(best.word, "equator");
    }

    #[test]
    fn rank_all_orders_best_first() {
        let corpus = corpus(&["equator", "quartz", "aqua"]);
        let index = SyllableIndex::build(&corpus, 12, false);
        let ranked = Ranker::default().rank_all(&index, "qua", &state(3, 3, false));

        let words: Vec<&str> = ranked.iter().map(|r| r.entry.word.as_str()).collect();
        assert_eq!(words, ["aqua", "quartz", "equator"]);
        assert_eq!(ranked[0].cost, 3);
        assert!(ranked.windows(2).all(|w| w[0].key >= w[1].key));
    }

    #[test]
    fn rank_all_agrees_with_best() {
        let corpus = corpus(&["cat", "catalog", "scatter", "cathedral", "education"]);
        let index = SyllableIndex::build(&corpus, 12, false);
        let ranker = Ranker::default();

        for s in [state(1, 3, false), state(3, 3, false)] {
            let best = ranker.best(&index, "cat", &s).unwrap();
            let ranked = ranker.rank_all(&index, "cat", &s);
            assert_eq!(ranked[0].entry.word, best.word);
        }
    }
}
