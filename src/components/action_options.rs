//! Buttons for the server-suggested next actions.

#[cfg(test)]
#[path = "action_options_test.rs"]
mod action_options_test;

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// `data-is-major` attribute value.
pub fn is_major_attr(is_major: bool) -> &'static str {
    if is_major { "true" } else { "false" }
}

/// One button per option in [`ChatState::options`]. `on_choose` receives
/// the index of the clicked option.
#[component]
pub fn ActionOptions(chat: RwSignal<ChatState>, on_choose: Callback<usize>) -> impl IntoView {
    view! {
        {move || {
            chat.with(|c| c.options.clone())
                .into_iter()
                .enumerate()
                .map(|(index, option)| {
                    view! {
                        <button
                            class="action-option-button"
                            type="button"
                            data-is-major=is_major_attr(option.is_major)
                            data-next-point-id=option.next_point_id
                            on:click=move |_| on_choose.run(index)
                        >
                            {option.text}
                        </button>
                    }
                })
                .collect::<Vec<_>>()
        }}
    }
}
