//! Randomness used by the typist
//!
//! The typist draws from a [`RandomSource`] so tests can pin its behaviour.
//! Any `rand::Rng` is a source; [`ScriptedSource`] replays fixed values.

use rand::Rng;
use rand_distr::{Distribution, Exp, Normal};
use std::collections::VecDeque;

/// The draws the typist needs
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn uniform(&mut self) -> f64;

    /// Normally distributed value
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64;

    /// Exponentially distributed value with rate `lambda`
    fn exponential(&mut self, lambda: f64) -> f64;

    /// Uniform integer in `low..=high`
    fn index_inclusive(&mut self, low: usize, high: usize) -> usize;

    /// Uniform lowercase letter
    fn letter(&mut self) -> char;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self) -> f64 {
        self.random()
    }

    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        Normal::new(mean, std_dev).map_or(mean, |dist| dist.sample(self))
    }

    fn exponential(&mut self, lambda: f64) -> f64 {
        Exp::new(lambda).map_or(0.0, |dist| dist.sample(self))
    }

    fn index_inclusive(&mut self, low: usize, high: usize) -> usize {
        if low >= high {
            low
        } else {
            self.random_range(low..=high)
        }
    }

    fn letter(&mut self) -> char {
        char::from(self.random_range(b'a'..=b'z'))
    }
}

/// Deterministic source replaying scripted uniform draws
///
/// Normal draws return their mean and exponential draws return a fixed
/// value, so every delay is predictable. Uniform draws come from the script
/// and fall back to `fallback` once it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    uniforms: VecDeque<f64>,
    fallback: f64,
    exponential: f64,
    letter: char,
}

impl ScriptedSource {
    /// Source whose uniform draws are always `value`
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self {
            uniforms: VecDeque::new(),
            fallback: value,
            exponential: 0.0,
            letter: 'x',
        }
    }

    /// Source replaying `uniforms` in order, then `fallback`
    #[must_use]
    pub fn new(uniforms: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        Self {
            uniforms: uniforms.into_iter().collect(),
            ..Self::constant(fallback)
        }
    }

    /// Value every exponential draw returns
    #[must_use]
    pub const fn with_exponential(mut self, value: f64) -> Self {
        self.exponential = value;
        self
    }

    /// Letter every random-letter draw returns
    #[must_use]
    pub const fn with_letter(mut self, letter: char) -> Self {
        self.letter = letter;
        self
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self) -> f64 {
        self.uniforms.pop_front().unwrap_or(self.fallback)
    }

    fn normal(&mut self, mean: f64, _std_dev: f64) -> f64 {
        mean
    }

    fn exponential(&mut self, _lambda: f64) -> f64 {
        self.exponential
    }

    fn index_inclusive(&mut self, low: usize, high: usize) -> usize {
        if low >= high {
            return low;
        }
        let span = (high - low + 1) as f64;
        low + ((self.uniform() * span) as usize).min(high - low)
    }

    fn letter(&mut self) -> char {
        self.letter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rng_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let u = RandomSource::uniform(&mut rng);
            assert!((0.0..1.0).contains(&u));

            let i = rng.index_inclusive(3, 6);
            assert!((3..=6).contains(&i));

            assert!(rng.letter().is_ascii_lowercase());
            assert!(rng.exponential(1.5) >= 0.0);
        }
    }

    #[test]
    fn rng_normal_centres_on_mean() {
        let mut rng = StdRng::seed_from_u64(11);
        let n = 5000;
        let mean = (0..n).map(|_| rng.normal(2.0, 0.5)).sum::<f64>() / f64::from(n);
        assert!((mean - 2.0).abs() < 0.05, "mean was {mean}");
    }

    #[test]
    fn rng_invalid_parameters_degrade() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!((rng.normal(1.0, -1.0) - 1.0).abs() < f64::EPSILON);
        assert!(rng.exponential(-2.0).abs() < f64::EPSILON);
        assert_eq!(rng.index_inclusive(5, 5), 5);
        assert_eq!(rng.index_inclusive(5, 2), 5);
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(a.letter(), b.letter());
        }
    }

    #[test]
    fn scripted_replays_then_falls_back() {
        let mut source = ScriptedSource::new([0.1, 0.9], 0.5);
        assert!((source.uniform() - 0.1).abs() < f64::EPSILON);
        assert!((source.uniform() - 0.9).abs() < f64::EPSILON);
        assert!((source.uniform() - 0.5).abs() < f64::EPSILON);
        assert!((source.uniform() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn scripted_index_maps_uniform_to_range() {
        let mut source = ScriptedSource::new([0.0, 0.99, 0.5], 0.0);
        assert_eq!(source.index_inclusive(2, 5), 2);
        assert_eq!(source.index_inclusive(2, 5), 5);
        assert_eq!(source.index_inclusive(2, 5), 4);
    }

    #[test]
    fn scripted_fixed_draws() {
        let mut source = ScriptedSource::constant(0.5)
            .with_exponential(1.4)
            .with_letter('q');
        assert!((source.normal(0.3, 9.0) - 0.3).abs() < f64::EPSILON);
        assert!((source.exponential(2.0) - 1.4).abs() < f64::EPSILON);
        assert_eq!(source.letter(), 'q');
    }
}
