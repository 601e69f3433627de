//! Networking modules for the send-message HTTP exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the request and `types` defines the JSON schema shared
//! with the game server.

pub mod api;
pub mod types;
