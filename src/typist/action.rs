//! Input actions produced by the typist
//!
//! Actions only describe what to do. Honoring the waits and pressing keys is
//! the job of whatever drives the game UI.

use std::fmt;
use std::time::Duration;

/// Something to press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Submit,
    /// Literal text typed in one burst and submitted
    Line(String),
}

/// One step of a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Wait(Duration),
    Press(Key),
}

impl Action {
    /// Wait for a number of seconds, clamping negative or non-finite values to zero
    #[must_use]
    pub fn wait_secs(seconds: f64) -> Self {
        Self::Wait(Duration::try_from_secs_f64(seconds.max(0.0)).unwrap_or(Duration::ZERO))
    }

    #[inline]
    #[must_use]
    pub const fn is_wait(&self) -> bool {
        matches!(self, Self::Wait(_))
    }

    /// True for any press that submits the word
    #[inline]
    #[must_use]
    pub const fn is_submit(&self) -> bool {
        matches!(self, Self::Press(Key::Submit | Key::Line(_)))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wait(duration) => write!(f, "wait {:.3}s", duration.as_secs_f64()),
            Self::Press(Key::Char(c)) => write!(f, "press '{c}'"),
            Self::Press(Key::Backspace) => write!(f, "press ⌫"),
            Self::Press(Key::Submit) => write!(f, "press ⏎"),
            Self::Press(Key::Line(text)) => write!(f, "type \"{text}\" ⏎"),
        }
    }
}

/// What a sequence of actions amounts to once played back
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Playback {
    /// Contents of the input field at the end
    pub text: String,
    pub submitted: bool,
    pub total_wait: Duration,
    pub presses: usize,
    pub backspaces: usize,
}

/// Replay actions against an empty input field
///
/// # Examples
/// ```
/// use syllable_bot::typist::{Action, Key, playback};
///
/// let actions = [
///     Action::Press(Key::Char('b')),
///     Action::Press(Key::Char('x')),
///     Action::Press(Key::Backspace),
///     Action::Press(Key::Char('o')),
///     Action::Press(Key::Submit),
/// ];
/// let result = playback(&actions);
/// assert_eq!(result.text, "bo");
/// assert!(result.submitted);
/// ```
#[must_use]
pub fn playback(actions: &[Action]) -> Playback {
    let mut result = Playback::default();

    for action in actions {
        match action {
            Action::Wait(duration) => result.total_wait += *duration,
            Action::Press(key) => {
                result.presses += 1;
                match key {
                    Key::Char(c) => result.text.push(*c),
                    Key::Backspace => {
                        result.text.pop();
                        result.backspaces += 1;
                    }
                    Key::Submit => result.submitted = true,
                    Key::Line(text) => {
                        result.text.push_str(text);
                        result.submitted = true;
                    }
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_clamps_to_zero() {
        assert_eq!(Action::wait_secs(-1.5), Action::Wait(Duration::ZERO));
        assert_eq!(Action::wait_secs(f64::NAN), Action::Wait(Duration::ZERO));
        assert_eq!(Action::wait_secs(f64::INFINITY), Action::Wait(Duration::ZERO));
        assert_eq!(
            Action::wait_secs(0.25),
            Action::Wait(Duration::from_millis(250))
        );
    }

    #[test]
    fn submit_detection() {
        assert!(Action::Press(Key::Submit).is_submit());
        assert!(Action::Press(Key::Line("bomb".into())).is_submit());
        assert!(!Action::Press(Key::Char('b')).is_submit());
        assert!(!Action::wait_secs(1.0).is_submit());
    }

    #[test]
    fn playback_line() {
        let result = playback(&[Action::Press(Key::Line("quartz".into()))]);
        assert_eq!(result.text, "quartz");
        assert!(result.submitted);
        assert_eq!(result.presses, 1);
        assert_eq!(result.total_wait, Duration::ZERO);
    }

    #[test]
    fn playback_sums_waits() {
        let result = playback(&[
            Action::wait_secs(0.5),
            Action::Press(Key::Char('a')),
            Action::wait_secs(0.25),
        ]);
        assert_eq!(result.total_wait, Duration::from_millis(750));
        assert!(!result.submitted);
    }

    #[test]
    fn backspace_on_empty_field() {
        let result = playback(&[Action::Press(Key::Backspace)]);
        assert_eq!(result.text, "");
        assert_eq!(result.backspaces, 1);
    }

    #[test]
    fn display() {
        assert_eq!(Action::Press(Key::Char('q')).to_string(), "press 'q'");
        assert_eq!(Action::wait_secs(0.1).to_string(), "wait 0.100s");
    }
}
