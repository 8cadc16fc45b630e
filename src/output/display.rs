//! Display functions for command results

use super::formatters::{KEYBOARD_ROWS, score_emoji, verdict_color, win_rate_bar};
use crate::commands::StatusReport;
use crate::core::{KeyboardState, Row};
use crate::game::{SessionOutcome, Stats};
use colored::Colorize;

/// Print one grid row as coloured tiles followed by its score face
pub fn print_row(index: usize, row: &Row) {
    let tiles: String = row
        .cells()
        .iter()
        .map(|cell| {
            let letter = format!(" {} ", cell.letter.unwrap_or(' '));
            match cell.state {
                Some(verdict) => letter
                    .black()
                    .bold()
                    .on_color(verdict_color(verdict))
                    .to_string(),
                None => letter.bright_white().on_black().to_string(),
            }
        })
        .collect();

    let face = row.score().map_or("", score_emoji);
    println!("  {} {tiles} {face}", (index + 1).to_string().bright_black());
}

/// Print every evaluated row
pub fn print_board<'a>(rows: impl IntoIterator<Item = &'a Row>) {
    for (i, row) in rows.into_iter().enumerate() {
        if row.is_evaluated() {
            print_row(i, row);
        }
    }
}

/// Print the QWERTY keyboard coloured by what is known about each letter
pub fn print_keyboard(keyboard: &KeyboardState) {
    println!();
    for (indent, keys) in KEYBOARD_ROWS.iter().enumerate() {
        let line: Vec<String> = keys
            .chars()
            .map(|key| match keyboard.get(key) {
                Some(verdict) => key.to_string().bold().color(verdict_color(verdict)).to_string(),
                None => key.to_string().bright_white().to_string(),
            })
            .collect();
        println!("  {}{}", " ".repeat(indent), line.join(" "));
    }
    println!();
}

/// Print the running statistics
pub fn print_stats(stats: &Stats) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("\n   Played:       {}", stats.played.to_string().bright_white().bold());
    println!(
        "   Win %:        [{}] {}",
        win_rate_bar(stats.win_percent, 20).green(),
        format!("{}%", stats.win_percent).bright_yellow()
    );
    println!("   Streak:       {}", stats.streak.to_string().bright_cyan());
    println!("   Max streak:   {}", stats.max_streak.to_string().bright_cyan());

    if stats.played > 0 {
        let last = if stats.last_outcome_win {
            "won".green()
        } else {
            "lost".red()
        };
        println!("   Last game:    {last}");
    }
    println!();
}

/// Print where today's puzzle stands
pub fn print_status(report: &StatusReport) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Puzzle {} for {}",
        format!("#{}", report.puzzle_number).bright_yellow().bold(),
        report.day
    );
    println!("{}", "─".repeat(40).cyan());

    println!(
        "\n   Guesses:      {}/{}",
        report.attempts_used, report.max_attempts
    );
    let outcome = match report.outcome {
        SessionOutcome::InProgress if report.attempts_used == 0 => "not started".bright_black(),
        SessionOutcome::InProgress => "in progress".yellow(),
        SessionOutcome::Won(n) => format!("solved in {n}").green().bold(),
        SessionOutcome::Lost => "out of guesses".red().bold(),
    };
    println!("   Today:        {outcome}");
    println!("   Next word in: {}", report.countdown.bright_white().bold());
    println!();
}
