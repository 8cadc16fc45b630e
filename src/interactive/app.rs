//! TUI application state and logic

use crate::daily::Clock;
use crate::game::{PuzzleSession, SessionOutcome, SubmitResult};
use crate::store::{self, Storage};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for a key before running the periodic checks
const TICK: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    Help,
}

/// Application state
pub struct App<'a, S: Storage, C: Clock> {
    pub session: PuzzleSession<'a, S, C>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    last_rollover_check: Instant,
}

impl<'a, S: Storage, C: Clock> App<'a, S, C> {
    /// Wrap a session; first-time players start on the help screen
    #[must_use]
    pub fn new(session: PuzzleSession<'a, S, C>) -> Self {
        let input_mode = if store::has_seen_help(session.store()) {
            InputMode::Playing
        } else {
            InputMode::Help
        };
        Self {
            session,
            input_mode,
            should_quit: false,
            last_rollover_check: Instant::now(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Help => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                _ => self.dismiss_help(),
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('?') => self.input_mode = InputMode::Help,
                KeyCode::Char(c) => {
                    self.session.input_letter(c);
                }
                KeyCode::Backspace => {
                    self.session.delete_letter();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }

    fn submit(&mut self) {
        if let SubmitResult::Accepted { outcome, .. } = self.session.submit_guess() {
            match outcome {
                SessionOutcome::Won(n) => log::debug!("Solved in {n}"),
                SessionOutcome::Lost => log::debug!("Out of guesses"),
                SessionOutcome::InProgress => {}
            }
        }
    }

    fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Playing;
        if !store::has_seen_help(self.session.store())
            && let Err(err) = store::mark_help_seen(self.session.store_mut())
        {
            log::warn!("Failed to remember help dismissal: {err}");
        }
    }

    /// Periodic work between key presses
    pub fn on_tick(&mut self) {
        self.session.clear_expired_notice();
        if self.last_rollover_check.elapsed() >= self.session.config().rollover_poll {
            self.last_rollover_check = Instant::now();
            self.session.rollover_if_new_day();
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Storage, C: Clock>(app: App<'_, S, C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: Storage, C: Clock>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S, C>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
        app.on_tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
