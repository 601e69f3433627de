//! # session-ui
//!
//! Leptos + WASM enhancements for the server-rendered game pages: the chat
//! client on the game session page and the message toggle on the admin log
//! list.
//!
//! Browser entry points live behind the `csr` feature. State, wire types,
//! and formatting helpers build natively so they can be unit tested without
//! a browser.
//!
//! JS SURFACE
//! ==========
//! - `start` (wasm start hook): panic hook and console logging
//! - `mount_chat()`: bind the chat client; logs and does nothing if the page
//!   is incomplete
//! - `toggle_message(log_id)`: flip one admin log row

pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
}

/// Bind the chat client to the game session page.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn mount_chat() {
    if let Err(err) = pages::game_session::mount(config::ChatSettings::default()) {
        log::error!("{err}. Chat functionality disabled.");
    }
}

/// Toggle between the short and full rendition of an admin log message.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn toggle_message(log_id: JsValue) {
    let result = pages::admin_log::normalize_log_id(log_id.as_string(), log_id.as_f64())
        .and_then(|id| pages::admin_log::toggle(&id));
    if let Err(err) = result {
        log::warn!("toggle_message: {err}");
    }
}
