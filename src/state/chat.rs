//! Chat log and per-send lifecycle for the game session page.
//!
//! DESIGN
//! ======
//! Every send gets its own correlation id. The optimistic user entry carries
//! that id, so a failed send removes exactly its own entry even when several
//! sends overlap. Each send moves `Pending -> Committed` or
//! `Pending -> RolledBack`; terminal phases never change again.
//!
//! Only pending ids are tracked. A committed send survives as its entry's
//! [`Delivery::Committed`]; a rolled-back send leaves nothing behind.
//!
//! Only entries appended by this client live here. History rendered by the
//! server template stays in the DOM untouched.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::collections::HashSet;

use crate::net::types::{ActionOption, MessageData, SendMessageRequest};

/// Who authored a log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    /// CSS modifier class used by the page stylesheet.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Ai => "ai-message",
        }
    }
}

/// Whether the server has acknowledged an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Pending,
    Committed,
}

/// Where the outgoing text came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextOrigin {
    /// Typed into the input box; cleared on send, restored on failure.
    InputBox,
    /// Supplied by the caller, e.g. an action option button.
    Explicit,
}

/// A rendered chat line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub id: String,
    pub sender: Sender,
    pub message: String,
    pub timestamp: String,
    pub delivery: Delivery,
}

/// Metadata attached to a send when it comes from an action option.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Choice {
    pub is_major: bool,
    pub next_point_id: Option<String>,
}

impl From<&ActionOption> for Choice {
    fn from(option: &ActionOption) -> Self {
        Self {
            is_major: option.is_major,
            next_point_id: option.next_point_id.clone(),
        }
    }
}

/// A send that has been shown optimistically and awaits the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSend {
    pub id: String,
    pub origin: TextOrigin,
    pub request: SendMessageRequest,
}

impl PendingSend {
    /// Whether the input box should be emptied once the entry is shown.
    pub fn clears_input(&self) -> bool {
        self.origin == TextOrigin::InputBox
    }
}

/// Pick the text to send: a non-empty explicit text wins, otherwise the
/// trimmed input value. `None` means there is nothing to send.
pub fn resolve_outgoing(explicit: Option<&str>, input: &str) -> Option<(String, TextOrigin)> {
    if let Some(text) = explicit.filter(|t| !t.is_empty()) {
        return Some((text.to_owned(), TextOrigin::Explicit));
    }
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some((trimmed.to_owned(), TextOrigin::InputBox))
}

/// Client-side chat state, held in a single `RwSignal` by the page.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub entries: Vec<LogEntry>,
    pub options: Vec<ActionOption>,
    pending: HashSet<String>,
}

impl ChatState {
    /// Start a send: append the optimistic user entry and return the request
    /// to issue. Returns `None` (and changes nothing) when there is no text.
    pub fn begin_send(
        &mut self,
        explicit: Option<&str>,
        input: &str,
        choice: Option<Choice>,
        timestamp: String,
    ) -> Option<PendingSend> {
        let (text, origin) = resolve_outgoing(explicit, input)?;
        let choice = choice.unwrap_or_default();
        let id = uuid::Uuid::new_v4().to_string();

        self.entries.push(LogEntry {
            id: id.clone(),
            sender: Sender::User,
            message: text.clone(),
            timestamp,
            delivery: Delivery::Pending,
        });
        self.pending.insert(id.clone());

        Some(PendingSend {
            id,
            origin,
            request: SendMessageRequest {
                message: text,
                is_major: choice.is_major,
                next_point_id: choice.next_point_id,
            },
        })
    }

    /// Mark a pending send as acknowledged. Returns `false` if the send is
    /// unknown or already terminal.
    pub fn commit(&mut self, send: &PendingSend) -> bool {
        if !self.pending.remove(&send.id) {
            return false;
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == send.id) {
            entry.delivery = Delivery::Committed;
        }
        true
    }

    /// Undo a failed send by removing its own optimistic entry.
    ///
    /// Returns the text to put back into the input box, which is only the
    /// case for input-originated sends.
    pub fn rollback(&mut self, send: &PendingSend) -> Option<String> {
        if !self.pending.remove(&send.id) {
            return None;
        }
        self.entries.retain(|e| e.id != send.id);
        (send.origin == TextOrigin::InputBox).then(|| send.request.message.clone())
    }

    /// Display the AI reply and replace the action options with `options`.
    pub fn apply_reply(&mut self, reply: MessageData, options: Vec<ActionOption>) {
        self.entries.push(LogEntry {
            id: uuid::Uuid::new_v4().to_string(),
            sender: Sender::Ai,
            message: reply.message,
            timestamp: reply.timestamp,
            delivery: Delivery::Committed,
        });
        self.options = options;
    }

    /// Take the option at `index` and clear all options so a stale button
    /// cannot be used twice.
    pub fn take_option(&mut self, index: usize) -> Option<ActionOption> {
        if index >= self.options.len() {
            return None;
        }
        let chosen = self.options.swap_remove(index);
        self.options.clear();
        Some(chosen)
    }

    /// Whether the send with `id` still awaits the server.
    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    /// Number of sends still waiting on the server.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
