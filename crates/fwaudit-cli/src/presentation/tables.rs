//! Table formatting utilities for CLI output.

/// Truncates a string to a maximum number of characters, adding "..." if
/// needed.
///
/// # Examples
///
/// ```rust
/// use fwaudit_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("FORTIMANAGER", 20), "FORTIMANAGER");
/// assert_eq!(truncate_string("Cisco Nexus 93240YC-FX2", 12), "Cisco Nex...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Print a title between two heavy rules.
pub fn print_banner(title: &str, width: usize) {
    let rule = "=".repeat(width);
    println!("{rule}");
    println!("{title}");
    println!("{rule}");
}

/// Render a flag for a table cell.
pub const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation_needed() {
        assert_eq!(truncate_string("short", 10), "short");
    }

    #[test]
    fn test_truncate_string_exact_length() {
        assert_eq!(truncate_string("exactly10c", 10), "exactly10c");
    }

    #[test]
    fn test_truncate_string_needs_truncation() {
        assert_eq!(truncate_string("this is a very long string", 10), "this is...");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        assert_eq!(truncate_string("Zürich-Edge-Firewall", 8), "Züric...");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
    }
}
