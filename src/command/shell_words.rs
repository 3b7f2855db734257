use crate::foundation::error::{FarmError, FarmResult};

/// Splits a command line into words using POSIX shell quoting rules.
///
/// Words are separated by spaces, tabs, carriage returns and newlines only; other whitespace
/// such as U+00A0 stays inside the word.
/// Single quotes are literal. Inside double quotes a backslash only escapes `"` and `\`.
/// Outside quotes a backslash escapes the next character. No variable expansion, globbing or
/// comment handling takes place. An empty quoted string is kept as an empty word.
pub fn split_shell_words(line: &str) -> FarmResult<Vec<String>> {
    let mut words = Vec::new();
    let mut word: Option<String> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            ' ' | '\t' | '\r' | '\n' => {
                if let Some(w) = word.take() {
                    words.push(w);
                }
            }
            '\'' => {
                let w = word.get_or_insert_with(String::new);
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => w.push(ch),
                        None => return Err(unterminated('\'', line)),
                    }
                }
            }
            '"' => {
                let w = word.get_or_insert_with(String::new);
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch @ ('"' | '\\')) => w.push(ch),
                            Some(ch) => {
                                w.push('\\');
                                w.push(ch);
                            }
                            None => return Err(unterminated('"', line)),
                        },
                        Some(ch) => w.push(ch),
                        None => return Err(unterminated('"', line)),
                    }
                }
            }
            '\\' => match chars.next() {
                Some(ch) => word.get_or_insert_with(String::new).push(ch),
                None => {
                    return Err(FarmError::validation(format!(
                        "no escaped character after trailing backslash in command '{line}'"
                    )));
                }
            },
            c => word.get_or_insert_with(String::new).push(c),
        }
    }

    if let Some(w) = word {
        words.push(w);
    }
    Ok(words)
}

/// Joins words into a single line that [`split_shell_words`] splits back into the same words.
pub fn join_shell_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| quote_shell_word(w.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_shell_word(word: &str) -> String {
    if word.is_empty() {
        return "''".to_string();
    }
    if word.chars().all(is_shell_safe) {
        return word.to_string();
    }
    format!("'{}'", word.replace('\'', r#"'"'"'"#))
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "@%+=:,./-_#~".contains(c)
}

fn unterminated(quote: char, line: &str) -> FarmError {
    FarmError::validation(format!("no closing quotation ({quote}) in command '{line}'"))
}

#[cfg(test)]
#[path = "../../tests/unit/command/shell_words.rs"]
mod tests;
