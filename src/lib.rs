//! Daily Word
//!
//! A once-a-day five-letter word puzzle: everyone gets the same secret on the
//! same local calendar day, progress survives restarts, and statistics carry
//! across days.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use daily_word::config::GameConfig;
//! use daily_word::daily::FixedClock;
//! use daily_word::game::{PuzzleSession, SessionOutcome};
//! use daily_word::store::MemoryStore;
//! use daily_word::wordlists::Dictionary;
//!
//! let dict = Dictionary::embedded();
//! let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let clock = FixedClock::at_noon(today);
//! let config = GameConfig::new().with_epoch(today);
//!
//! let mut session = PuzzleSession::open(&dict, MemoryStore::new(), clock, config).unwrap();
//! let secret = session.secret().text().to_string();
//! for c in secret.chars() {
//!     session.input_letter(c);
//! }
//! session.submit_guess();
//! assert_eq!(session.outcome(), SessionOutcome::Won(1));
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Day selection and time
pub mod daily;

// Persistence gateway
pub mod store;

// Puzzle session and statistics
pub mod game;

pub mod config;
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
