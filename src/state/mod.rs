//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data with pure transitions so it can be unit tested
//! natively. The browser layer wraps it in Leptos signals.

pub mod chat;
pub mod log_toggle;
