//! Static configuration for the play and admin pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server template owns the markup; this crate only binds to it. Element
//! IDs, the message endpoint, and the reply delay are collected here so the
//! page wiring never hardcodes them inline.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// DOM element IDs the chat client binds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementIds {
    pub chat_log: &'static str,
    pub chat_input: &'static str,
    pub send_button: &'static str,
    pub action_options: &'static str,
    /// `name` attribute of the hidden CSRF form field.
    pub csrf_field_name: &'static str,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            chat_log: "chat-log",
            chat_input: "chat-input",
            send_button: "send-button",
            action_options: "action-options-container",
            csrf_field_name: "csrfmiddlewaretoken",
        }
    }
}

impl ElementIds {
    /// CSS selector for the CSRF token field.
    pub fn csrf_selector(&self) -> String {
        format!("[name={}]", self.csrf_field_name)
    }
}

/// Behavioural knobs for the chat client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatSettings {
    pub ids: ElementIds,
    /// Path prefix of the send endpoint; the session id and a trailing slash
    /// are appended.
    pub endpoint_base: &'static str,
    /// Delay between a successful response and displaying the AI reply.
    pub reply_delay: Duration,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            endpoint_base: "/api/send_message",
            reply_delay: Duration::from_millis(500),
        }
    }
}

impl ChatSettings {
    /// Full endpoint path for `session_id`.
    pub fn send_endpoint(&self, session_id: &str) -> String {
        format!("{}/{session_id}/", self.endpoint_base)
    }
}

/// Element ID prefixes used by the admin log list.
pub const SHORT_MSG_PREFIX: &str = "short_msg_";
pub const FULL_MSG_PREFIX: &str = "full_msg_";
pub const TOGGLE_LINK_PREFIX: &str = "toggle_link_";
