//! Simple interactive CLI mode
//!
//! Line-oriented driver for a [`Round`]: game events are typed in by hand
//! and the bot answers with the keystrokes it would send.

use crate::bot::{Bot, BotConfig, GameEvent, PeerId, Round};
use crate::core::Corpus;
use crate::output::print_actions;
use anyhow::{Context, Result};
use std::io::{self, Write};
use thiserror::Error;

const HELP: &str = "\
Events (peer ids are numbers):
  start <holder> <syllable> <lives> <max_lives>
  turn <holder> <syllable>
  word <peer> <text>
  correct <peer> | fail <peer> | bonus <peer> | lost <peer>
  end
Commands: 'help', 'state', 'quit'";

/// A parsed REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Event(GameEvent),
    State,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),
    #[error("'{command}' expects: {usage}")]
    Usage {
        command: &'static str,
        usage: &'static str,
    },
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Parse one line of REPL input
///
/// # Errors
///
/// Returns a `ParseError` for unknown commands or missing and malformed
/// arguments.
///
/// # Examples
/// ```
/// use syllable_bot::bot::GameEvent;
/// use syllable_bot::commands::{ReplCommand, parse_command};
///
/// assert_eq!(
///     parse_command("turn 2 qua").unwrap(),
///     ReplCommand::Event(GameEvent::NextTurn { holder: 2, syllable: "qua".into() })
/// );
/// assert!(parse_command("dance").is_err());
/// ```
pub fn parse_command(line: &str) -> Result<ReplCommand, ParseError> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Err(ParseError::UnknownCommand(String::new()));
    };
    let args: Vec<&str> = parts.collect();

    let event = match command.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Ok(ReplCommand::Quit),
        "help" | "h" | "?" => return Ok(ReplCommand::Help),
        "state" | "s" => return Ok(ReplCommand::State),
        "start" => {
            let &[holder, syllable, lives, max_lives] = args.as_slice() else {
                return Err(usage("start", "<holder> <syllable> <lives> <max_lives>"));
            };
            GameEvent::Start {
                holder: number(holder)?,
                syllable: syllable.to_lowercase(),
                lives: number(lives)?,
                max_lives: number(max_lives)?,
            }
        }
        "turn" => {
            let &[holder, syllable] = args.as_slice() else {
                return Err(usage("turn", "<holder> <syllable>"));
            };
            GameEvent::NextTurn {
                holder: number(holder)?,
                syllable: syllable.to_lowercase(),
            }
        }
        "word" => {
            let Some((peer, text)) = args.split_first() else {
                return Err(usage("word", "<peer> <text>"));
            };
            GameEvent::PlayerWord {
                peer: number(peer)?,
                text: text.join(" "),
            }
        }
        "correct" => GameEvent::CorrectWord {
            peer: single_peer("correct", &args)?,
        },
        "fail" => GameEvent::FailWord {
            peer: single_peer("fail", &args)?,
        },
        "bonus" => GameEvent::BonusAlphabet {
            peer: single_peer("bonus", &args)?,
        },
        "lost" => GameEvent::LivesLost {
            peer: single_peer("lost", &args)?,
        },
        "end" => GameEvent::End,
        _ => return Err(ParseError::UnknownCommand(command.to_string())),
    };

    Ok(ReplCommand::Event(event))
}

const fn usage(command: &'static str, usage: &'static str) -> ParseError {
    ParseError::Usage { command, usage }
}

fn number<T: std::str::FromStr>(text: &str) -> Result<T, ParseError> {
    text.parse()
        .map_err(|_| ParseError::NotANumber(text.to_string()))
}

fn single_peer(command: &'static str, args: &[&str]) -> Result<PeerId, ParseError> {
    match args {
        [peer] => number(peer),
        _ => Err(usage(command, "<peer>")),
    }
}

/// Run the simple interactive CLI mode
///
/// A new round begins with every `start` event once the previous one ended.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn run_simple(
    corpus: &Corpus,
    config: BotConfig,
    me: PeerId,
    seed: Option<u64>,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Syllable Bot - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Playing as peer {me} with {} words.", corpus.len());
    println!("{HELP}\n");

    let mut round: Option<Round<'_>> = None;
    let mut rounds_played = 0_u64;

    loop {
        let input = get_user_input(">")?;
        if input.is_empty() {
            continue;
        }

        let event = match parse_command(&input) {
            Ok(ReplCommand::Quit) => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            Ok(ReplCommand::Help) => {
                println!("{HELP}");
                continue;
            }
            Ok(ReplCommand::State) => {
                print_round_state(round.as_ref());
                continue;
            }
            Ok(ReplCommand::Event(event)) => event,
            Err(err) => {
                println!("❌ {err}");
                continue;
            }
        };

        let starts_round = matches!(event, GameEvent::Start { .. });
        let may_search = starts_round
            || matches!(event, GameEvent::NextTurn { .. } | GameEvent::FailWord { .. });

        if starts_round && round.as_ref().is_none_or(Round::is_finished) {
            round = Some(match seed {
                Some(seed) => Round::seeded(corpus, config, seed.wrapping_add(rounds_played), me),
                None => Round::new(Bot::from_os_rng(corpus, config), me),
            });
            rounds_played += 1;
        }

        let Some(current) = round.as_mut() else {
            println!("❌ No round in progress, send 'start' first");
            continue;
        };

        match current.apply(event) {
            Ok(actions) if actions.is_empty() => {
                if may_search && current.is_my_turn() {
                    println!("🤷 No word for '{}'", current.syllable());
                }
            }
            Ok(actions) => {
                if let Some(word) = current.bot().pending_word() {
                    println!("💣 Playing {}", word.to_uppercase());
                }
                print_actions(&actions);
            }
            Err(err) => println!("❌ {err}"),
        }
    }
}

fn print_round_state(round: Option<&Round<'_>>) {
    let Some(state) = round.and_then(|r| r.bot().round_state()) else {
        println!("No round in progress");
        return;
    };
    println!(
        "Lives {}/{}, banked letters: {}",
        state.lives,
        state.max_lives,
        if state.bonus_mask.is_empty() {
            "-".to_string()
        } else {
            state.bonus_mask.to_string()
        }
    );
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt} ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
