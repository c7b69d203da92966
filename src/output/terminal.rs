//! Terminal output utilities.

use colored::Colorize;

/// Format one `label: value` line.
///
/// # Arguments
/// * `label` - Text before the colon
/// * `value` - The value to show
/// * `width` - Minimum width of `label:`, padded on the right
/// * `color` - Bold label and highlighted value
pub fn format_line<T: ToString>(label: &str, value: T, width: usize, color: bool) -> String {
    let label = format!("{label}:");
    let label = format!("{label:<width$}");
    let value = value.to_string();

    if color {
        format!("{} {}", label.bold(), value.cyan())
    } else {
        format!("{label} {value}")
    }
}
