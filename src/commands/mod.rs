//! Command implementations

pub mod simple;
pub mod status;

pub use simple::{LineAction, apply_line, run_simple};
pub use status::StatusReport;
