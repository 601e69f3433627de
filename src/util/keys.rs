//! Keyboard helpers for the chat input box.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Enter submits; Shift+Enter is left alone so it can insert a newline.
///
/// An Enter that commits an IME composition (Hangul, kana, ...) is part of
/// typing, not a submit.
pub fn is_submit_key(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}
