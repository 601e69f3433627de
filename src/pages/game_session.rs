//! Game session page: binds the chat client to the server-rendered markup.
//!
//! ARCHITECTURE
//! ============
//! Startup resolves every element the client needs into [`ChatHandles`]
//! once. If anything is missing the page fails closed and nothing is wired.
//! After that, each send runs as its own local task:
//!
//! 1. append the optimistic entry (and clear the input if it was typed)
//! 2. `POST` the message
//! 3. on success, commit the entry, wait the reply delay, show the reply and
//!    the new action options
//! 4. on failure, remove that entry and restore typed text
//!
//! Sends may overlap; each one only ever touches its own entry.

#[cfg(test)]
#[path = "game_session_test.rs"]
mod game_session_test;

#[cfg(feature = "csr")]
use leptos::prelude::*;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "csr")]
use crate::components::{action_options::ActionOptions, chat_log::ChatLog};
#[cfg(feature = "csr")]
use crate::config::{ChatSettings, ElementIds};
#[cfg(feature = "csr")]
use crate::net::api;
#[cfg(feature = "csr")]
use crate::state::chat::{ChatState, Choice};
#[cfg(feature = "csr")]
use crate::util::{clock::now_hhmm, keys::is_submit_key};

/// Reasons the chat client refuses to start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    #[error("no document available")]
    NoDocument,
    #[error("essential DOM element not found: {0}")]
    MissingElement(&'static str),
    #[error("session id not found")]
    MissingSessionId,
}

/// Accept a `data-session-id` value only if it is present and non-empty.
///
/// # Errors
///
/// Returns [`InitError::MissingSessionId`] otherwise.
pub fn session_id_from(raw: Option<String>) -> Result<String, InitError> {
    raw.filter(|id| !id.is_empty()).ok_or(InitError::MissingSessionId)
}

/// The chat input may be a single-line input or a textarea.
#[cfg(feature = "csr")]
#[derive(Clone)]
pub enum InputBox {
    Input(web_sys::HtmlInputElement),
    TextArea(web_sys::HtmlTextAreaElement),
}

#[cfg(feature = "csr")]
impl InputBox {
    fn from_element(el: web_sys::Element) -> Option<Self> {
        match el.dyn_into::<web_sys::HtmlInputElement>() {
            Ok(input) => Some(Self::Input(input)),
            Err(el) => el.dyn_into::<web_sys::HtmlTextAreaElement>().ok().map(Self::TextArea),
        }
    }

    pub fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    pub fn set_value(&self, value: &str) {
        match self {
            Self::Input(el) => el.set_value(value),
            Self::TextArea(el) => el.set_value(value),
        }
    }

    fn target(&self) -> &web_sys::EventTarget {
        match self {
            Self::Input(el) => el.as_ref(),
            Self::TextArea(el) => el.as_ref(),
        }
    }
}

/// Everything the chat client reads from the page, resolved up front.
#[cfg(feature = "csr")]
pub struct ChatHandles {
    pub log: web_sys::HtmlElement,
    pub input: InputBox,
    pub send_button: web_sys::HtmlElement,
    pub options: web_sys::HtmlElement,
    pub session_id: String,
    pub csrf_token: String,
}

#[cfg(feature = "csr")]
impl ChatHandles {
    /// Look up all handles in `document`.
    ///
    /// # Errors
    ///
    /// Returns the first missing element or a missing session id. An empty
    /// CSRF token is accepted; the server rejects the send and it rolls back.
    pub fn resolve(document: &web_sys::Document, ids: &ElementIds) -> Result<Self, InitError> {
        let log = html_by_id(document, ids.chat_log)?;
        let input = document
            .get_element_by_id(ids.chat_input)
            .and_then(InputBox::from_element)
            .ok_or(InitError::MissingElement(ids.chat_input))?;
        let send_button = html_by_id(document, ids.send_button)?;
        let options = html_by_id(document, ids.action_options)?;
        let csrf_field = document
            .query_selector(&ids.csrf_selector())
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            .ok_or(InitError::MissingElement(ids.csrf_field_name))?;

        let session_id = session_id_from(log.get_attribute("data-session-id"))?;

        Ok(Self { log, input, send_button, options, session_id, csrf_token: csrf_field.value() })
    }
}

#[cfg(feature = "csr")]
fn html_by_id(document: &web_sys::Document, id: &'static str) -> Result<web_sys::HtmlElement, InitError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or(InitError::MissingElement(id))
}

/// Resolve the page and wire the chat client for the page lifetime.
///
/// # Errors
///
/// Returns an [`InitError`] if the page is missing anything; nothing is
/// wired in that case.
#[cfg(feature = "csr")]
pub fn mount(settings: ChatSettings) -> Result<(), InitError> {
    let document = web_sys::window().and_then(|w| w.document()).ok_or(InitError::NoDocument)?;
    let handles = ChatHandles::resolve(&document, &settings.ids)?;
    log::debug!("chat client bound to session {}", handles.session_id);

    let owner = Owner::new();
    owner.with(|| wire(handles, settings));
    // Page-lifetime wiring; never torn down.
    std::mem::forget(owner);
    Ok(())
}

/// Copyable bundle of everything a send needs.
#[cfg(feature = "csr")]
#[derive(Clone, Copy)]
struct ChatSession {
    chat: RwSignal<ChatState>,
    handles: StoredValue<ChatHandles, leptos::reactive::owner::LocalStorage>,
    settings: StoredValue<ChatSettings>,
}

#[cfg(feature = "csr")]
impl ChatSession {
    fn send(self, explicit: Option<String>, choice: Option<Choice>) {
        let typed = self.handles.with_value(|h| h.input.value());
        let Some(pending) = self
            .chat
            .try_update(|c| c.begin_send(explicit.as_deref(), &typed, choice, now_hhmm()))
            .flatten()
        else {
            return;
        };
        if pending.clears_input() {
            self.handles.with_value(|h| h.input.set_value(""));
        }

        let (endpoint, csrf_token) = self.handles.with_value(|h| {
            (self.settings.with_value(|s| s.send_endpoint(&h.session_id)), h.csrf_token.clone())
        });
        let delay = self.settings.with_value(|s| s.reply_delay);

        leptos::task::spawn_local(async move {
            match api::send_message(&endpoint, &csrf_token, &pending.request).await {
                Ok(resp) => {
                    self.chat.update(|c| {
                        c.commit(&pending);
                    });
                    gloo_timers::future::sleep(delay).await;
                    self.chat.update(|c| c.apply_reply(resp.ai_message, resp.next_action_options));
                }
                Err(err) => {
                    log::error!("Error sending message: {err}");
                    let restore = self.chat.try_update(|c| c.rollback(&pending)).flatten();
                    if let Some(text) = restore {
                        self.handles.with_value(|h| h.input.set_value(&text));
                    }
                }
            }
        });
    }

    fn choose(self, index: usize) {
        let Some(option) = self.chat.try_update(|c| c.take_option(index)).flatten() else {
            return;
        };
        let choice = Choice::from(&option);
        self.send(Some(option.text), Some(choice));
    }
}

#[cfg(feature = "csr")]
fn wire(handles: ChatHandles, settings: ChatSettings) {
    let log_el = handles.log.clone();
    let options_el = handles.options.clone();
    let send_button = handles.send_button.clone();
    let input = handles.input.clone();

    let session = ChatSession {
        chat: RwSignal::new(ChatState::default()),
        handles: StoredValue::new_local(handles),
        settings: StoredValue::new(settings),
    };
    let chat = session.chat;

    let on_choose = Callback::new(move |index: usize| session.choose(index));
    // The options list is owned by the client; drop anything the template
    // rendered there. The log keeps its server-rendered history.
    options_el.set_inner_html("");
    leptos::mount::mount_to(log_el.clone(), move || view! { <ChatLog chat=chat/> }).forget();
    leptos::mount::mount_to(options_el, move || view! { <ActionOptions chat=chat on_choose=on_choose/> })
        .forget();

    // Also runs once at mount, which brings server-rendered history into view.
    Effect::new(move || {
        let _ = chat.with(|c| c.entries.len());
        log_el.set_scroll_top(log_el.scroll_height());
    });

    let on_click = Closure::wrap(Box::new(move |_ev: web_sys::MouseEvent| {
        session.send(None, None);
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);
    let _ = send_button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    let on_keydown = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
        // keyCode 229 marks a keydown the IME consumed (Safari reports it
        // after compositionend with isComposing already false).
        let composing = ev.is_composing() || ev.key_code() == 229;
        if is_submit_key(&ev.key(), ev.shift_key(), composing) {
            ev.prevent_default();
            session.send(None, None);
        }
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
    let _ = input
        .target()
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}
