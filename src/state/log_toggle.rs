//! Short/full view state for long messages in the admin log list.

#[cfg(test)]
#[path = "log_toggle_test.rs"]
mod log_toggle_test;

/// Label shown while the full message is visible.
pub const COLLAPSE_LABEL: &str = "[숨기기]";
/// Label shown while only the truncated message is visible.
pub const EXPAND_LABEL: &str = "[전체 보기]";

/// Which rendition of a log message is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogView {
    #[default]
    Short,
    Full,
}

impl LogView {
    /// Derive the current view from the full element's inline `display`.
    pub fn from_full_display(display: &str) -> Self {
        if display == "none" { Self::Short } else { Self::Full }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Short => Self::Full,
            Self::Full => Self::Short,
        }
    }

    /// Inline `display` value for the truncated element.
    pub fn short_display(self) -> &'static str {
        match self {
            Self::Short => "block",
            Self::Full => "none",
        }
    }

    /// Inline `display` value for the full element.
    pub fn full_display(self) -> &'static str {
        match self {
            Self::Short => "none",
            Self::Full => "block",
        }
    }

    /// Link text offering the opposite view.
    pub fn label(self) -> &'static str {
        match self {
            Self::Short => EXPAND_LABEL,
            Self::Full => COLLAPSE_LABEL,
        }
    }
}
