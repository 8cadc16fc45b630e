//! Terminal output formatting
//!
//! Display utilities for the line-based commands and shared formatting
//! helpers for the TUI.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_row, print_stats, print_status};
