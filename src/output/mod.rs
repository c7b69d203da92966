//! Output formatting for subnet data.
//!
//! - [`report`] - Multi-line subnet report
//! - [`terminal`] - Line formatting with optional colour

mod report;
mod terminal;

pub use report::{render_plain_report, render_report};
pub use terminal::format_line;
