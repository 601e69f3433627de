//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render into containers owned by the server template and read
//! chat state from the signal handed to them by the page.

pub mod action_options;
pub mod chat_log;
