//! TUI rendering with ratatui
//!
//! Board, keyboard and end-of-day summary for the puzzle interface.

use super::app::{App, InputMode};
use crate::core::{Cell, LetterVerdict, Row};
use crate::daily::Clock;
use crate::game::SessionOutcome;
use crate::output::formatters::{KEYBOARD_ROWS, score_emoji};
use crate::store::Storage;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: Storage, C: Clock>(f: &mut Frame, app: &App<'_, S, C>) {
    let board_height = app.session.grid().rows().len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(1),            // Notice
            Constraint::Length(board_height), // Board
            Constraint::Length(5),            // Keyboard
            Constraint::Min(0),               // Summary
            Constraint::Length(1),            // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_notice(f, app, chunks[1]);
    render_board(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    if app.session.outcome().is_terminal() {
        render_summary(f, app, chunks[4]);
    }
    render_status(f, app, chunks[5]);

    if app.input_mode == InputMode::Help {
        render_help(f, f.area());
    }
}

fn verdict_color(verdict: LetterVerdict) -> Color {
    match verdict {
        LetterVerdict::Correct => Color::Green,
        LetterVerdict::Present => Color::Yellow,
        LetterVerdict::Absent => Color::DarkGray,
    }
}

fn render_header<S: Storage, C: Clock>(f: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    let title = format!("DAILY WORD #{}", app.session.puzzle_number());
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_notice<S: Storage, C: Clock>(f: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    if let Some(notice) = app.session.notice() {
        let text = Paragraph::new(notice.message())
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(text, area);
    }
}

fn cell_span(cell: &Cell) -> Span<'static> {
    let text = format!(" {} ", cell.letter.unwrap_or('·'));
    let style = match cell.state {
        Some(verdict) => Style::default()
            .fg(Color::Black)
            .bg(verdict_color(verdict))
            .add_modifier(Modifier::BOLD),
        None if cell.letter.is_some() => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };
    Span::styled(text, style)
}

fn row_line(row: &Row) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::with_capacity(row.cells().len() * 2 + 1);
    for cell in row.cells() {
        spans.push(cell_span(cell));
        spans.push(Span::raw(" "));
    }
    if let Some(score) = row.score() {
        spans.push(Span::raw(format!(" {}", score_emoji(score))));
    }
    Line::from(spans)
}

fn render_board<S: Storage, C: Clock>(f: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    let lines: Vec<Line> = app.session.grid().rows().iter().map(row_line).collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<S: Storage, C: Clock>(f: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    let keyboard = app.session.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|keys| {
            let spans: Vec<Span> = keys
                .chars()
                .flat_map(|key| {
                    let style = keyboard.get(key).map_or_else(
                        || Style::default().fg(Color::White),
                        |verdict| {
                            Style::default()
                                .fg(Color::Black)
                                .bg(verdict_color(verdict))
                        },
                    );
                    [Span::styled(format!(" {key} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(widget, area);
}

fn render_summary<S: Storage, C: Clock>(f: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(3)])
        .split(area);

    let stats = app.session.stats();
    let (headline, color) = match app.session.outcome() {
        SessionOutcome::Won(n) => (format!("Solved in {n}!"), Color::Green),
        _ => (
            format!(
                "The word was {}",
                app.session.secret().text().to_uppercase()
            ),
            Color::Red,
        ),
    };

    let content = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Played: {}   Streak: {}   Max streak: {}",
            stats.played, stats.streak, stats.max_streak
        )),
        Line::from(vec![
            Span::raw("Next word in "),
            Span::styled(
                app.session.countdown(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let summary = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Statistics ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(summary, chunks[0]);

    let gauge = Gauge::default()
        .block(Block::default().title(" Win % ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(stats.win_percent.min(100) as u16);
    f.render_widget(gauge, chunks[1]);
}

fn render_status<S: Storage, C: Clock>(f: &mut Frame, app: &App<'_, S, C>, area: Rect) {
    let help_text = if app.session.outcome().is_terminal() {
        "Esc: Quit | ?: Help"
    } else {
        "Type a word | Enter: Submit | Backspace: Delete | ?: Help | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// Rectangle of the given percentage size centred in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_help(f: &mut Frame, area: Rect) {
    let example = |letter: char, verdict: LetterVerdict, text: &'static str| {
        Line::from(vec![
            Span::styled(
                format!(" {letter} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(verdict_color(verdict))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(text),
        ])
    };

    let content = vec![
        Line::from("Guess the hidden five-letter word."),
        Line::from("Every day there is a new word, the same for everyone."),
        Line::from(""),
        Line::from("Type a word and press Enter. After each guess the tiles change colour:"),
        Line::from(""),
        example('W', LetterVerdict::Correct, "  in the word and in the right spot"),
        example('I', LetterVerdict::Present, "  in the word but in the wrong spot"),
        example('U', LetterVerdict::Absent, "  not in the word"),
        Line::from(""),
        Line::from("The face next to a row counts the letters that are in the word."),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to play",
            Style::default().fg(Color::Cyan),
        )),
    ];

    let popup = centered_rect(70, 60, area);
    let help = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" How to play ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::White)),
    );
    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}
