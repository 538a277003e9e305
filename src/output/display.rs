//! Display functions for command results

use super::formatters::{action_token, alphabet_progress, bonus_bar, hearts, seconds};
use crate::commands::{BenchmarkResult, SearchResult, TypingResult};
use crate::typist::Action;
use colored::Colorize;

/// Print the ranked candidates for a syllable
pub fn print_search_result(result: &SearchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SYLLABLE:".bright_cyan().bold(),
        result.syllable.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let state = &result.state;
    println!(
        "\n   Lives:   {} {}",
        hearts(state.lives, state.max_lives).red(),
        if state.needs_lives() {
            "(chasing the bonus)".yellow()
        } else {
            "(saving letters)".green()
        }
    );
    println!(
        "   Banked:  [{}] {}",
        bonus_bar(state.bonus_mask, 22).green(),
        alphabet_progress(state.bonus_mask)
    );

    if result.hits.is_empty() {
        println!("\n{}", "❌ No word contains this syllable".red().bold());
        return;
    }

    println!(
        "\n📊 Top {} of {} candidates:",
        result.hits.len(),
        result.total_candidates
    );
    println!(
        "   {:<3} {:<16} {:>8} {:>5} {:>10}",
        "#", "word", "progress", "cost", "frequency"
    );
    for (i, hit) in result.hits.iter().enumerate() {
        let line = format!(
            "   {:<3} {:<16} {:>8} {:>5} {:>10}",
            i + 1,
            hit.word,
            hit.progress,
            hit.cost,
            hit.frequency
        );
        if i == 0 {
            println!("{}", line.bright_yellow().bold());
        } else {
            println!("{line}");
        }
    }
}

/// Print a typing preview
pub fn print_typing_result(result: &TypingResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Typing: {} (prompt {})",
        result.word.to_uppercase().bright_yellow().bold(),
        result.syllable.to_uppercase()
    );
    println!("{}", "─".repeat(60).cyan());

    print_actions(&result.actions);

    let playback = &result.playback;
    println!();
    println!("   Keys pressed:  {}", playback.presses);
    println!("   Corrections:   {}", playback.backspaces);
    println!("   Time spent:    {}", seconds(playback.total_wait));
    println!("   Final text:    {}", playback.text);

    println!();
    if result.gave_up() {
        println!("{}", "⏳ Gave up before submitting".red().bold());
    } else {
        println!("{}", "✅ Submitted".green().bold());
    }
}

/// Print an action sequence on one line, waits dimmed
pub fn print_actions(actions: &[Action]) {
    let tokens: Vec<String> = actions
        .iter()
        .map(|action| {
            let token = action_token(action);
            match action {
                Action::Wait(_) => token.bright_black().to_string(),
                Action::Press(_) => token.bold().to_string(),
            }
        })
        .collect();
    println!("   {}", tokens.join(" "));
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!("   Prompt pool:      {} syllables", result.prompt_pool);
    println!("   Turns:            {}", result.turns);
    println!(
        "   Words played:     {}",
        format!("{}", result.words_played).green()
    );
    println!("   Misses:           {}", format!("{}", result.misses).yellow());
    println!("   Bonus lives:      {}", result.bonus_lives);
    println!(
        "   Rounds survived:  {}/{}",
        result.rounds_survived, result.rounds
    );
    println!(
        "   Average cost:     {}",
        format!("{:.2} letters", result.average_cost)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);
}
