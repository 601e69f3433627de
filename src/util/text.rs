//! Message text helpers.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Split message text on `\n` so each line can be rendered as a text node
/// followed by `<br>`. Blank lines are kept; they carry spacing.
pub fn message_lines(text: &str) -> Vec<String> {
    text.split('\n').map(|line| line.trim_end_matches('\r').to_owned()).collect()
}
