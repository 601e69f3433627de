//! Admin log list: expand/collapse for long messages.
//!
//! The admin template renders a truncated and a full copy of each long
//! message plus a toggle link, and calls `toggle_message(id)` on click.

#[cfg(test)]
#[path = "admin_log_test.rs"]
mod admin_log_test;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

use crate::config::{FULL_MSG_PREFIX, SHORT_MSG_PREFIX, TOGGLE_LINK_PREFIX};
#[cfg(feature = "csr")]
use crate::state::log_toggle::LogView;

/// A toggle target that is not on the page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToggleError {
    #[error("no document available")]
    NoDocument,
    #[error("log element not found: {0}")]
    MissingElement(String),
    #[error("invalid log id")]
    InvalidId,
}

/// Element IDs `(short, full, link)` for one log row.
pub fn toggle_element_ids(log_id: &str) -> (String, String, String) {
    (
        format!("{SHORT_MSG_PREFIX}{log_id}"),
        format!("{FULL_MSG_PREFIX}{log_id}"),
        format!("{TOGGLE_LINK_PREFIX}{log_id}"),
    )
}

/// The template passes the id as a bare number; accept strings too.
///
/// # Errors
///
/// Returns [`ToggleError::InvalidId`] for anything else or an empty id.
pub fn normalize_log_id(as_string: Option<String>, as_number: Option<f64>) -> Result<String, ToggleError> {
    let id = as_string.or_else(|| as_number.map(|n| n.to_string()));
    id.filter(|s| !s.is_empty()).ok_or(ToggleError::InvalidId)
}

/// Flip the row for `log_id` and return the view now shown.
///
/// # Errors
///
/// Returns [`ToggleError::MissingElement`] if any of the three elements is
/// absent; the page is left unchanged in that case.
#[cfg(feature = "csr")]
pub fn toggle(log_id: &str) -> Result<LogView, ToggleError> {
    let document = web_sys::window().and_then(|w| w.document()).ok_or(ToggleError::NoDocument)?;
    let (short_id, full_id, link_id) = toggle_element_ids(log_id);

    let short = html_by_id(&document, short_id)?;
    let full = html_by_id(&document, full_id)?;
    let link = document.get_element_by_id(&link_id).ok_or(ToggleError::MissingElement(link_id))?;

    let current = LogView::from_full_display(&full.style().get_property_value("display").unwrap_or_default());
    let next = current.toggled();

    let _ = short.style().set_property("display", next.short_display());
    let _ = full.style().set_property("display", next.full_display());
    link.set_text_content(Some(next.label()));
    Ok(next)
}

#[cfg(feature = "csr")]
fn html_by_id(document: &web_sys::Document, id: String) -> Result<web_sys::HtmlElement, ToggleError> {
    document
        .get_element_by_id(&id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or(ToggleError::MissingElement(id))
}
