//! Formatting utilities for terminal output

use crate::core::{AVAILABLE_MASK, LetterMask};
use crate::typist::{Action, Key};
use std::time::Duration;

/// Show the bonus alphabet with banked letters in place and the rest dotted
///
/// Letters that never count toward the bonus are left out.
#[must_use]
pub fn alphabet_progress(bonus: LetterMask) -> String {
    AVAILABLE_MASK
        .letters()
        .map(|letter| if bonus.contains(letter as u8) { letter } else { '·' })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how close `bonus` is to a full alphabet
#[must_use]
pub fn bonus_bar(bonus: LetterMask, width: usize) -> String {
    create_progress_bar(
        f64::from(bonus.cost()),
        f64::from(AVAILABLE_MASK.count()),
        width,
    )
}

/// Lives as hearts, lost ones hollow
#[must_use]
pub fn hearts(lives: u32, max_lives: u32) -> String {
    let lost = max_lives.saturating_sub(lives) as usize;
    format!("{}{}", "♥".repeat(lives as usize), "♡".repeat(lost))
}

/// One action as a compact token
#[must_use]
pub fn action_token(action: &Action) -> String {
    match action {
        Action::Wait(duration) => format!("{}ms", duration.as_millis()),
        Action::Press(Key::Char(c)) => c.to_string(),
        Action::Press(Key::Backspace) => "⌫".to_string(),
        Action::Press(Key::Submit) => "⏎".to_string(),
        Action::Press(Key::Line(text)) => format!("{text}⏎"),
    }
}

/// Format a duration in seconds with millisecond precision
#[must_use]
pub fn seconds(duration: Duration) -> String {
    format!("{:.3}s", duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_progress_empty() {
        assert_eq!(alphabet_progress(LetterMask::EMPTY), "·".repeat(22));
    }

    #[test]
    fn alphabet_progress_skips_free_letters() {
        let bonus = LetterMask::of("azk").unwrap();
        let shown = alphabet_progress(bonus);
        assert!(shown.starts_with('a'));
        assert!(!shown.contains('z'));
        assert!(!shown.contains('k'));
        assert_eq!(shown.chars().count(), 22);
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░".repeat(10));
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "█".repeat(10));
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░".repeat(4));
    }

    #[test]
    fn bonus_bar_half() {
        let bonus = LetterMask::of("abcdefghij").unwrap();
        assert_eq!(bonus_bar(bonus, 11), format!("{}{}", "█".repeat(5), "░".repeat(6)));
    }

    #[test]
    fn hearts_show_lost_lives() {
        assert_eq!(hearts(1, 3), "♥♡♡");
        assert_eq!(hearts(3, 3), "♥♥♥");
    }

    #[test]
    fn action_tokens() {
        assert_eq!(action_token(&Action::wait_secs(0.25)), "250ms");
        assert_eq!(action_token(&Action::Press(Key::Char('b'))), "b");
        assert_eq!(action_token(&Action::Press(Key::Line("bomb".into()))), "bomb⏎");
    }

    #[test]
    fn seconds_format() {
        assert_eq!(seconds(Duration::from_millis(1500)), "1.500s");
    }
}
