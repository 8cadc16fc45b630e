//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: every line is one guess.

use crate::daily::Clock;
use crate::game::{PuzzleSession, SessionOutcome, SubmitResult};
use crate::output::{print_board, print_keyboard, print_row, print_stats};
use crate::store::Storage;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// What a line of input amounted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    Quit,
    Help,
    Stats,
    Guess(SubmitResult),
    /// Not a command and not five letters
    Malformed,
    /// The day changed before the line was read; the line is dropped
    NewDay,
}

/// Interpret one input line against the session
///
/// A five-letter line replaces whatever the current row holds and is
/// submitted through the same letter-by-letter path the TUI uses. A line
/// typed across midnight is not scored against the new word.
pub fn apply_line<S: Storage, C: Clock>(
    session: &mut PuzzleSession<'_, S, C>,
    line: &str,
) -> LineAction {
    if session.rollover_if_new_day() {
        return LineAction::NewDay;
    }

    let input = line.trim().to_lowercase();
    match input.as_str() {
        "quit" | "q" | "exit" => return LineAction::Quit,
        "help" | "?" => return LineAction::Help,
        "stats" => return LineAction::Stats,
        _ => {}
    }

    if input.chars().count() != crate::core::WORD_LENGTH
        || !input.chars().all(|c| c.is_ascii_alphabetic())
    {
        return LineAction::Malformed;
    }

    while session.delete_letter() {}
    for c in input.chars() {
        session.input_letter(c);
    }
    LineAction::Guess(session.submit_guess())
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: Storage, C: Clock>(session: &mut PuzzleSession<'_, S, C>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!(
        "║                    Daily Word - Puzzle #{:<5}                ║",
        session.puzzle_number()
    );
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_help(session.config().max_attempts);
    print_board(session.grid().rows());

    if session.outcome().is_terminal() {
        print_finished(session);
        return Ok(());
    }

    loop {
        if session.rollover_if_new_day() {
            print_new_day(session);
        }

        let prompt = format!(
            "Guess {}/{}",
            session.attempts_used() + 1,
            session.config().max_attempts
        );
        let Some(line) = get_user_input(&prompt)? else {
            println!();
            return Ok(());
        };

        match apply_line(session, &line) {
            LineAction::Quit => {
                println!("\n👋 Come back tomorrow!\n");
                return Ok(());
            }
            LineAction::Help => print_help(session.config().max_attempts),
            LineAction::Stats => print_stats(session.stats()),
            LineAction::NewDay => print_new_day(session),
            LineAction::Malformed => {
                println!("{}\n", "❌ Enter a five-letter word".red());
            }
            LineAction::Guess(SubmitResult::Rejected(word)) => {
                let message = session
                    .notice()
                    .map_or_else(|| "Not in word list".to_string(), |n| n.message());
                println!(
                    "{} {}\n",
                    word.text().to_uppercase().bright_white().bold(),
                    message.red()
                );
            }
            LineAction::Guess(SubmitResult::Ignored) => {
                print_finished(session);
                return Ok(());
            }
            LineAction::Guess(SubmitResult::Accepted { outcome, .. }) => {
                let index = session.attempts_used() - 1;
                print_row(index, &session.grid().rows()[index]);
                if outcome.is_terminal() {
                    print_finished(session);
                    return Ok(());
                }
                print_keyboard(session.keyboard());
            }
        }
    }
}

fn print_help(attempts: usize) {
    println!("Guess the five-letter word in {attempts} tries. A new word every day.");
    println!(
        "  {} right letter, right spot   {} right letter, wrong spot   {} not in the word",
        " G ".black().on_green(),
        " Y ".black().on_yellow(),
        " - ".black().on_bright_black()
    );
    println!("Commands: 'stats', 'help', 'quit'\n");
}

fn print_new_day<S: Storage, C: Clock>(session: &PuzzleSession<'_, S, C>) {
    println!(
        "\n{} Puzzle #{} is out, your last line was not scored\n",
        "🌅 New word!".bright_green().bold(),
        session.puzzle_number()
    );
    print_board(session.grid().rows());
}

fn print_finished<S: Storage, C: Clock>(session: &PuzzleSession<'_, S, C>) {
    match session.outcome() {
        SessionOutcome::Won(n) => {
            println!("\n{}", "═".repeat(64).bright_cyan());
            println!(
                "{}",
                "    🎉  S O L V E D !  🎉    ".bright_green().bold()
            );
            println!("{}", "═".repeat(64).bright_cyan());
            println!(
                "\n  Found in {} {}",
                n.to_string().bright_cyan().bold(),
                if n == 1 { "guess" } else { "guesses" }
            );
        }
        SessionOutcome::Lost => {
            println!(
                "\n  The word was {}",
                session.secret().text().to_uppercase().bright_yellow().bold()
            );
        }
        SessionOutcome::InProgress => return,
    }

    print_stats(session.stats());
    println!("  Next word in {}\n", session.countdown().bright_white().bold());
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
