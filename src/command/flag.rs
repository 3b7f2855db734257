//! Flag classification and value formatting for config-driven command lines.
//!
//! Flags are written the way the engine expects them (`-t`, `--threads`). A trailing `~` marks
//! a solo flag: a boolean switch that is emitted on its own and never takes a value.

/// `-+\w+~`: a boolean switch that is emitted without its value.
pub fn is_solo_flag(flag: &str) -> bool {
    flag.strip_suffix('~').is_some_and(is_dashed_word)
}

/// `-+\w+`: a flag that takes the following value.
pub fn is_flag(flag: &str) -> bool {
    is_dashed_word(flag)
}

/// The text emitted for a solo flag (`--background~` -> `--background`).
pub fn solo_flag_text(flag: &str) -> &str {
    flag.strip_suffix('~').unwrap_or(flag)
}

/// Sentinel left in a command where a mandatory value is missing.
pub fn missing_value_sentinel(flag: &str) -> String {
    format!("!!missing value for {flag}!!")
}

/// Formats `value` for emission after `flag`.
///
/// Non-empty path values are wrapped in double quotes so they survive shell tokenization.
/// A mandatory flag with no value yields [`missing_value_sentinel`]. Returns `None` when there
/// is nothing to emit.
pub fn format_value(
    flag: &str,
    value: Option<&str>,
    is_path: bool,
    is_mandatory: bool,
) -> Option<String> {
    match value.filter(|v| !v.is_empty()) {
        Some(v) if is_path => Some(format!("\"{v}\"")),
        Some(v) => Some(v.to_string()),
        None if is_mandatory => Some(missing_value_sentinel(flag)),
        None => None,
    }
}

fn is_dashed_word(s: &str) -> bool {
    let word = s.trim_start_matches('-');
    word.len() < s.len() && !word.is_empty() && word.chars().all(is_word_char)
}

// Unicode `\w` as regex engines define it: alphanumerics plus underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
#[path = "../../tests/unit/command/flag.rs"]
mod tests;
