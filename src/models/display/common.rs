//! Common display utilities and helpers

/// Truncate string to at most `max_len` bytes with ellipsis.
///
/// The cut is moved back to the nearest char boundary so multibyte
/// input (issue titles are arbitrary Unicode) never splits a character.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let mut end = max_len.saturating_sub(3);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Format a byte count as a human-readable size.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Render an optional string field, "--" when absent.
pub fn display_opt(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "--".to_string(),
    }
}

/// Render a boolean as a checkmark or empty cell.
pub fn checkmark(value: bool) -> String {
    if value {
        "\u{2713}".to_string()
    } else {
        String::new()
    }
}
