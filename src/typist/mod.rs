//! Human-like typing
//!
//! Turns a chosen word into a timed sequence of key presses. In machine mode
//! the word is submitted instantly. In human mode the typist hesitates before
//! starting, types with jittered delays, makes bursts of mistakes that it then
//! backspaces over, and now and then gives up partway as if time ran out.

mod action;
mod random;

pub use action::{Action, Key, Playback, playback};
pub use random::{RandomSource, ScriptedSource};

use crate::core::{StateError, check_lives};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seconds shaved off the initial hesitation per letter of the word
const INITIAL_DELAY_PER_LETTER: f64 = 0.02;

/// Seconds shaved off each keystroke per letter still to type
const SPEEDUP_PER_REMAINING_LETTER: f64 = 0.001;

/// Seconds shaved off each keystroke per mistake burst already made
const SPEEDUP_PER_PREVIOUS_ERROR: f64 = 0.01;

/// Chance that a later key in a mistake burst is the upcoming correct letter
const TYPE_AHEAD_PROBABILITY: f64 = 0.7;

/// Timing and accuracy parameters, all times in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypistConfig {
    /// Chance of finishing a word at full lives
    pub word_accuracy: f64,
    /// Chance of hitting the right key on each letter
    pub keystroke_accuracy: f64,
    pub keystroke_delay_avg: f64,
    pub keystroke_delay_std: f64,
    pub initial_delay_avg: f64,
    pub initial_delay_std: f64,
    /// Pause after noticing a mistake, before backspacing
    pub backtrack_delay_avg: f64,
    pub backtrack_delay_std: f64,
    /// Rate of the exponential distribution for extra keys in a mistake burst
    pub error_count_lambda: f64,
}

impl Default for TypistConfig {
    fn default() -> Self {
        Self {
            word_accuracy: 0.95,
            keystroke_accuracy: 0.96,
            keystroke_delay_avg: 0.09,
            keystroke_delay_std: 0.03,
            initial_delay_avg: 0.85,
            initial_delay_std: 0.25,
            backtrack_delay_avg: 0.25,
            backtrack_delay_std: 0.07,
            error_count_lambda: 1.8,
        }
    }
}

impl TypistConfig {
    /// Chance that an attempt is carried through to submission
    ///
    /// Scales linearly from `word_accuracy` at full lives up to certainty at
    /// one life left. With a single life possible there is no scale, so the
    /// attempt is always carried through.
    ///
    /// # Errors
    /// Returns `StateError` if `max_lives` is 0 or `lives` exceeds it.
    pub fn completion_probability(&self, lives: u32, max_lives: u32) -> Result<f64, StateError> {
        check_lives(lives, max_lives)?;
        if max_lives == 1 {
            return Ok(1.0);
        }
        let slope = (1.0 - self.word_accuracy) / f64::from(max_lives - 1);
        Ok(1.0 - slope * (f64::from(lives) - 1.0))
    }
}

/// Generates action sequences for words
#[derive(Debug, Clone)]
pub struct Typist<R = StdRng> {
    config: TypistConfig,
    rng: R,
}

impl Typist<StdRng> {
    /// Typist with a reproducible random stream
    #[must_use]
    pub fn seeded(config: TypistConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Typist seeded from the operating system
    #[must_use]
    pub fn from_os_rng(config: TypistConfig) -> Self {
        Self::new(config, StdRng::from_os_rng())
    }
}

impl<R: RandomSource> Typist<R> {
    #[must_use]
    pub const fn new(config: TypistConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Plan how to deliver `word`, which contains `syllable`
    ///
    /// # Examples
    /// ```
    /// use syllable_bot::typist::{Action, Key, Typist, TypistConfig};
    ///
    /// let mut typist = Typist::seeded(TypistConfig::default(), 7);
    ///
    /// let actions = typist.act("quartz", "qua", false, 2, 3).unwrap();
    /// assert_eq!(actions, [Action::Press(Key::Line("quartz".to_string()))]);
    ///
    /// let actions = typist.act("quartz", "qua", true, 1, 3).unwrap();
    /// assert!(actions.last().is_some_and(Action::is_submit));
    ///
    /// assert!(typist.act("quartz", "qua", true, 4, 3).is_err());
    /// ```
    ///
    /// # Errors
    /// Returns `StateError` if `max_lives` is 0 or `lives` exceeds it, in
    /// either mode.
    pub fn act(
        &mut self,
        word: &str,
        syllable: &str,
        human_mode: bool,
        lives: u32,
        max_lives: u32,
    ) -> Result<Vec<Action>, StateError> {
        let completion = self.config.completion_probability(lives, max_lives)?;
        if !human_mode {
            return Ok(vec![Action::Press(Key::Line(word.to_string()))]);
        }

        let letters: Vec<char> = word.chars().collect();
        let mut actions = Vec::with_capacity(letters.len() * 2 + 2);

        let hesitation = self.rng.normal(
            self.config.initial_delay_avg - INITIAL_DELAY_PER_LETTER * letters.len() as f64,
            self.config.initial_delay_std,
        );
        actions.push(Action::wait_secs(hesitation));

        let doomed = max_lives > 1 && self.rng.uniform() > completion;

        if doomed {
            let syllable_end = word
                .find(syllable)
                .map_or(0, |start| start + syllable.len())
                .min(letters.len());
            let fail_index = self.rng.index_inclusive(syllable_end, letters.len());
            tracing::debug!(word, fail_index, "giving up partway");

            self.type_letters(&letters, fail_index, &mut actions);
        } else {
            self.type_letters(&letters, letters.len(), &mut actions);
            actions.push(Action::Press(Key::Submit));
        }

        Ok(actions)
    }

    /// Type `letters[..upto]`, with occasional mistake bursts
    fn type_letters(&mut self, letters: &[char], upto: usize, actions: &mut Vec<Action>) {
        let mut previous_errors = 0_u32;

        for (i, &letter) in letters.iter().enumerate().take(upto) {
            let remaining = letters.len() - i;

            if self.rng.uniform() < 1.0 - self.config.keystroke_accuracy {
                let extra = self.rng.exponential(self.config.error_count_lambda).round();
                let mistakes = 1 + extra.max(0.0) as usize;

                for j in 0..mistakes {
                    actions.push(self.keystroke_wait(remaining, previous_errors));
                    let typed_ahead = j > 0
                        && i + j < letters.len()
                        && self.rng.uniform() < TYPE_AHEAD_PROBABILITY;
                    let key = if typed_ahead {
                        letters[i + j]
                    } else {
                        self.rng.letter()
                    };
                    actions.push(Action::Press(Key::Char(key)));
                }

                actions.push(Action::wait_secs(self.rng.normal(
                    self.config.backtrack_delay_avg,
                    self.config.backtrack_delay_std,
                )));
                for _ in 0..mistakes {
                    actions.push(self.keystroke_wait(remaining, previous_errors));
                    actions.push(Action::Press(Key::Backspace));
                }

                previous_errors += 1;
            }

            actions.push(self.keystroke_wait(remaining, previous_errors));
            actions.push(Action::Press(Key::Char(letter)));
        }
    }

    fn keystroke_wait(&mut self, remaining: usize, previous_errors: u32) -> Action {
        let mean = self.config.keystroke_delay_avg
            - SPEEDUP_PER_REMAINING_LETTER * remaining as f64
            - SPEEDUP_PER_PREVIOUS_ERROR * f64::from(previous_errors);
        Action::wait_secs(self.rng.normal(mean, self.config.keystroke_delay_std))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn presses(actions: &[Action]) -> Vec<&Key> {
        actions
            .iter()
            .filter_map(|action| match action {
                Action::Press(key) => Some(key),
                Action::Wait(_) => None,
            })
            .collect()
    }

    fn submits(actions: &[Action]) -> usize {
        actions.iter().filter(|a| a.is_submit()).count()
    }

    #[test]
    fn machine_mode_is_one_instant_press() {
        let mut typist = Typist::new(TypistConfig::default(), ScriptedSource::constant(0.99));
        let actions = typist.act("equator", "qua", false, 1, 3).unwrap();

        assert_eq!(actions, [Action::Press(Key::Line("equator".to_string()))]);
        assert!(!actions.iter().any(Action::is_wait));
    }

    #[test]
    fn completion_probability_scales_with_lives() {
        let config = TypistConfig {
            word_accuracy: 0.9,
            ..TypistConfig::default()
        };
        let p = |lives| config.completion_probability(lives, 3).unwrap();
        assert!((p(3) - 0.9).abs() < 1e-9);
        assert!((p(2) - 0.95).abs() < 1e-9);
        assert!((p(1) - 1.0).abs() < 1e-9);
        assert!(p(0) > 1.0);
    }

    #[test]
    fn completion_probability_single_life_is_certain() {
        let config = TypistConfig::default();
        assert_eq!(config.completion_probability(1, 1), Ok(1.0));
        assert_eq!(config.completion_probability(0, 1), Ok(1.0));
    }

    #[test]
    fn clean_human_typing() {
        // 0.5 never dooms at 1 life and never trips a keystroke mistake
        let mut typist = Typist::new(TypistConfig::default(), ScriptedSource::constant(0.5));
        let actions = typist.act("bomb", "om", true, 1, 3).unwrap();

        let keys = presses(&actions);
        assert_eq!(
            keys,
            [
                &Key::Char('b'),
                &Key::Char('o'),
                &Key::Char('m'),
                &Key::Char('b'),
                &Key::Submit
            ]
        );
        // Hesitation plus one wait per letter
        assert_eq!(actions.iter().filter(|a| a.is_wait()).count(), 5);
        assert!(actions[0].is_wait());
        assert!(actions.last().is_some_and(Action::is_submit));
    }

    #[test]
    fn delays_follow_configured_means() {
        let config = TypistConfig::default();
        let mut typist = Typist::new(config, ScriptedSource::constant(0.5));
        let actions = typist.act("bomb", "om", true, 1, 3).unwrap();

        let expected_hesitation = config.initial_delay_avg - 0.02 * 4.0;
        assert_eq!(actions[0], Action::wait_secs(expected_hesitation));

        // First letter has 4 remaining, last has 1
        assert_eq!(actions[1], Action::wait_secs(config.keystroke_delay_avg - 0.004));
        assert_eq!(actions[7], Action::wait_secs(config.keystroke_delay_avg - 0.001));
    }

    #[test]
    fn doomed_attempt_stops_without_submit() {
        // First uniform (0.99) exceeds 0.95 completion at full lives,
        // second places the fail index, the rest keep keystrokes clean
        let mut typist = Typist::new(
            TypistConfig::default(),
            ScriptedSource::new([0.99, 0.0], 0.5),
        );
        let actions = typist.act("quartz", "qua", true, 3, 3).unwrap();

        assert_eq!(submits(&actions), 0);
        // fail index is the end of "qua"
        assert_eq!(playback(&actions).text, "qua");
    }

    #[test]
    fn doomed_attempt_can_type_whole_word() {
        let mut typist = Typist::new(
            TypistConfig::default(),
            ScriptedSource::new([0.99, 0.999], 0.5),
        );
        let actions = typist.act("quartz", "qua", true, 3, 3).unwrap();

        let result = playback(&actions);
        assert_eq!(result.text, "quartz");
        assert!(!result.submitted);
    }

    #[test]
    fn fail_index_starts_after_syllable_occurrence() {
        let mut typist = Typist::new(
            TypistConfig::default(),
            ScriptedSource::new([0.99, 0.0], 0.5),
        );
        let actions = typist.act("equator", "tor", true, 3, 3).unwrap();
        assert_eq!(playback(&actions).text, "equator");
        assert_eq!(submits(&actions), 0);
    }

    #[test]
    fn single_max_life_never_dooms() {
        let mut typist = Typist::new(TypistConfig::default(), ScriptedSource::constant(0.5));
        let actions = typist.act("quartz", "qua", true, 1, 1).unwrap();
        assert_eq!(submits(&actions), 1);
        assert!(actions.last().is_some_and(Action::is_submit));
    }

    #[test]
    fn mistake_burst_is_backspaced() {
        // Script: doom check (0.5 passes at 1 life), then letter 0 trips a mistake
        // (0.0 < 0.04), one extra mistake key with no type-ahead (0.9), rest clean
        let mut typist = Typist::new(
            TypistConfig::default(),
            ScriptedSource::new([0.5, 0.0, 0.9], 0.5)
                .with_exponential(1.0)
                .with_letter('z'),
        );
        let actions = typist.act("bomb", "om", true, 1, 3).unwrap();

        let keys = presses(&actions);
        assert_eq!(
            keys,
            [
                &Key::Char('z'),
                &Key::Char('z'),
                &Key::Backspace,
                &Key::Backspace,
                &Key::Char('b'),
                &Key::Char('o'),
                &Key::Char('m'),
                &Key::Char('b'),
                &Key::Submit,
            ]
        );
        let result = playback(&actions);
        assert_eq!(result.text, "bomb");
        assert_eq!(result.backspaces, 2);
    }

    #[test]
    fn mistake_burst_types_ahead() {
        // Second mistake key copies the upcoming letter (0.1 < 0.7)
        let mut typist = Typist::new(
            TypistConfig::default(),
            ScriptedSource::new([0.5, 0.0, 0.1], 0.5)
                .with_exponential(1.0)
                .with_letter('z'),
        );
        let actions = typist.act("bomb", "om", true, 1, 3).unwrap();

        let keys = presses(&actions);
        assert_eq!(
            &keys[..4],
            [
                &Key::Char('z'),
                &Key::Char('o'),
                &Key::Backspace,
                &Key::Backspace
            ]
        );
    }

    #[test]
    fn backtrack_pause_precedes_backspaces() {
        let config = TypistConfig::default();
        let mut typist = Typist::new(
            config,
            ScriptedSource::new([0.5, 0.0], 0.5).with_exponential(0.0),
        );
        let actions = typist.act("ox", "ox", true, 1, 3).unwrap();

        // hesitation, wait, wrong key, backtrack pause, wait, backspace
        assert_eq!(actions[3], Action::wait_secs(config.backtrack_delay_avg));
        assert_eq!(actions[5], Action::Press(Key::Backspace));
    }

    #[test]
    fn later_keystrokes_speed_up_after_errors() {
        let config = TypistConfig::default();
        let mut typist = Typist::new(
            config,
            ScriptedSource::new([0.5, 0.0], 0.5).with_exponential(0.0),
        );
        let actions = typist.act("ox", "ox", true, 1, 3).unwrap();

        // The correct 'o' after one burst: 2 remaining, 1 previous error
        let expected = Action::wait_secs(config.keystroke_delay_avg - 0.002 - 0.01);
        assert_eq!(actions[6], expected);
        assert_eq!(actions[7], Action::Press(Key::Char('o')));
    }

    #[test]
    fn seeded_human_typing_always_reaches_word_or_stops() {
        let mut typist = Typist::seeded(TypistConfig::default(), 1234);

        for lives in 1..=3 {
            for _ in 0..200 {
                let actions = typist.act("equator", "qua", true, lives, 3).unwrap();
                let result = playback(&actions);
                match submits(&actions) {
                    0 => assert!("equator".starts_with(&result.text), "{}", result.text),
                    1 => {
                        assert_eq!(result.text, "equator");
                        assert!(actions.last().is_some_and(Action::is_submit));
                    }
                    n => panic!("{n} submits"),
                }
            }
        }
    }

    #[test]
    fn one_life_left_never_gives_up() {
        let mut typist = Typist::seeded(TypistConfig::default(), 99);
        for _ in 0..500 {
            let actions = typist.act("quartz", "qua", true, 1, 3).unwrap();
            assert_eq!(submits(&actions), 1);
        }
    }

    #[test]
    fn seeded_typists_are_reproducible() {
        let mut a = Typist::seeded(TypistConfig::default(), 5);
        let mut b = Typist::seeded(TypistConfig::default(), 5);
        assert_eq!(
            a.act("bomb", "om", true, 2, 3).unwrap(),
            b.act("bomb", "om", true, 2, 3).unwrap()
        );
    }

    #[test]
    fn impossible_lives_are_rejected() {
        let mut typist = Typist::new(TypistConfig::default(), ScriptedSource::constant(0.5));

        assert_eq!(
            typist.act("quartz", "qua", true, 5, 0),
            Err(StateError::NoMaxLives)
        );
        assert_eq!(
            typist.act("quartz", "qua", true, 9, 3),
            Err(StateError::TooManyLives {
                lives: 9,
                max_lives: 3
            })
        );
        // Machine mode checks too
        assert_eq!(
            typist.act("quartz", "qua", false, 1, 0),
            Err(StateError::NoMaxLives)
        );
        assert_eq!(
            TypistConfig::default().completion_probability(4, 3),
            Err(StateError::TooManyLives {
                lives: 4,
                max_lives: 3
            })
        );
    }

    #[test]
    fn give_up_rate_tracks_word_accuracy() {
        let config = TypistConfig::default();
        let mut typist = Typist::seeded(config, 2024);
        let runs: u32 = 20_000;

        let rate = |typist: &mut Typist, lives: u32| {
            let gave_up = (0..runs)
                .filter(|_| submits(&typist.act("equator", "qua", true, lives, 3).unwrap()) == 0)
                .count();
            gave_up as f64 / f64::from(runs)
        };

        let full = rate(&mut typist, 3);
        assert!((full - (1.0 - config.word_accuracy)).abs() < 0.01, "{full}");

        let half = rate(&mut typist, 2);
        assert!((half - (1.0 - config.word_accuracy) / 2.0).abs() < 0.01, "{half}");
    }

    #[test]
    fn mistake_rate_tracks_keystroke_accuracy() {
        let config = TypistConfig::default();
        let mut typist = Typist::seeded(config, 77);
        let word = "equator";
        let runs = 5_000;

        // At one life every attempt types the whole word
        let mut bursts = 0;
        for _ in 0..runs {
            let actions = typist.act(word, "qua", true, 1, 3).unwrap();
            let keys = presses(&actions);
            bursts += keys
                .windows(2)
                .filter(|pair| *pair[0] != Key::Backspace && *pair[1] == Key::Backspace)
                .count();
        }

        let rate = bursts as f64 / (runs * word.len()) as f64;
        assert!((rate - (1.0 - config.keystroke_accuracy)).abs() < 0.01, "{rate}");
    }

    #[test]
    fn waits_are_never_negative() {
        let config = TypistConfig {
            keystroke_delay_avg: 0.0,
            initial_delay_avg: 0.0,
            ..TypistConfig::default()
        };
        let mut typist = Typist::new(config, ScriptedSource::constant(0.5));
        let actions = typist.act("quartz", "qua", true, 1, 3).unwrap();
        assert!(
            actions
                .iter()
                .all(|a| !matches!(a, Action::Wait(d) if *d > Duration::from_secs(1)))
        );
        assert_eq!(actions[0], Action::Wait(Duration::ZERO));
    }
}
