//! Output formatting for CLI commands
//!
//! Colored output respects the NO_COLOR env var via `colored`.

use chrono::{DateTime, Utc};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for document field names
    pub fn field(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for relevance scores
    pub fn score(s: &str) -> ColoredString {
        s.magenta()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }
}

/// Format `timestamp` relative to `now` (e.g., "2h ago", "3d ago")
pub fn format_relative_time(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*timestamp);

    if duration.num_seconds() < 0 {
        return "in the future".to_string();
    }

    let days = duration.num_days();
    let hours = duration.num_hours();
    let mins = duration.num_minutes();

    if days >= 365 {
        format!("{}y ago", days / 365)
    } else if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if mins > 0 {
        format!("{mins}m ago")
    } else {
        "just now".to_string()
    }
}

/// Print an error message to stderr
pub fn print_error(msg: &str) {
    eprintln!("{} {}", colors::error("error:"), msg);
}
