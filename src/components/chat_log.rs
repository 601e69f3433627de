//! Log entries appended by the chat client.
//!
//! Mounted after the server-rendered history inside `#chat-log`, so new
//! lines appear below the existing conversation.

#[cfg(test)]
#[path = "chat_log_test.rs"]
mod chat_log_test;

use leptos::prelude::*;

use crate::state::chat::{ChatState, Delivery, LogEntry};
use crate::util::text::message_lines;

/// Live list of entries from [`ChatState`].
#[component]
pub fn ChatLog(chat: RwSignal<ChatState>) -> impl IntoView {
    view! {
        {move || {
            chat.with(|c| c.entries.clone())
                .into_iter()
                .map(|entry| view! { <ChatEntry entry=entry/> })
                .collect::<Vec<_>>()
        }}
    }
}

/// CSS class list for one entry.
pub fn entry_class(entry: &LogEntry) -> String {
    let mut class = format!("message {}", entry.sender.css_class());
    if entry.delivery == Delivery::Pending {
        class.push_str(" message--pending");
    }
    class
}

#[component]
fn ChatEntry(entry: LogEntry) -> impl IntoView {
    let class = entry_class(&entry);
    let lines = message_lines(&entry.message);
    let last = lines.len().saturating_sub(1);

    view! {
        <div class=class data-entry-id=entry.id>
            <div>
                {lines
                    .into_iter()
                    .enumerate()
                    .map(|(i, line)| (line, (i < last).then(|| view! { <br/> })))
                    .collect::<Vec<_>>()}
            </div>
            <div class="message-time">{entry.timestamp}</div>
        </div>
    }
}
