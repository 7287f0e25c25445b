//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use console::{style, StyledObject};

use crate::entities::{Accent, Category};

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Escape pipe characters for markdown table cells
pub fn escape_md(s: &str) -> String {
    s.replace('|', "\\|")
}

/// Style a category label with its accent colour
pub fn style_category(category: &Category) -> StyledObject<String> {
    let label = category.label().to_string();
    match category.accent() {
        Accent::Blue => style(label).blue(),
        Accent::Purple => style(label).magenta(),
        Accent::Green => style(label).green(),
        Accent::Orange => style(label).color256(208),
    }
}

/// "1 project" / "3 projects"
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
