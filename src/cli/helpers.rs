//! Shared helper functions for CLI commands

use console::{style, StyledObject};

use crate::entities::classification::Severity;

/// Truncate a string to max_len, adding "..." if truncated
///
/// Useful for table columns that need bounded-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Format an ID string for display, truncating if too long
pub fn format_short_id_str(id: &str) -> String {
    if id.len() > 16 {
        format!("{}...", &id[..13])
    } else {
        id.to_string()
    }
}

/// Color a severity tier for terminal output
pub fn paint_severity(severity: Severity) -> StyledObject<String> {
    let label = severity.to_string();
    match severity {
        Severity::Minor => style(label).green(),
        Severity::Moderate => style(label).yellow(),
        Severity::Major => style(label).red(),
        Severity::Catastrophic => style(label).red().bold(),
    }
}

/// Ask for confirmation before a destructive operation
pub fn confirm(prompt: &str) -> bool {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_str("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_str("a very long description", 10), "a very ...");
    }

    #[test]
    fn test_format_short_id() {
        assert_eq!(
            format_short_id_str("INC-01ARZ3NDEKTSV4RRFFQ69G5FAV"),
            "INC-01ARZ3NDE..."
        );
        assert_eq!(format_short_id_str("INC@1"), "INC@1");
    }
}
