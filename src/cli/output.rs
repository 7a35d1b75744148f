//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::application::services::LookupOutcome;
use crate::domain::Value;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print success status indented (green checkmark with leading spaces)
pub fn success_detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {} {}", "✓".green(), msg);
}

/// Print failure status (red X, indented)
pub fn failure(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {} {}", "✗".red(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Marker printed for a path that did not resolve.
pub const ABSENT: &str = "undefined";

/// Render a lookup result for plain output.
///
/// Strings print raw, other values as compact JSON, absence as `undefined`.
pub fn plain_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => ABSENT.to_string(),
    }
}

/// Render a lookup outcome the way the demo shows it: `{ path: value } type`.
pub fn demo_line(outcome: &LookupOutcome) -> String {
    let value = outcome
        .value
        .as_ref()
        .map(Value::to_string)
        .unwrap_or_else(|| ABSENT.to_string());
    format!(
        "{{ {}: {} }} {}",
        outcome.path,
        value,
        outcome.type_name.unwrap_or(ABSENT)
    )
}
