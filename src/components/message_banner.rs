//! Message Banner Component

use leptos::prelude::*;

use crate::store::{use_board_store, BoardStateStoreFields};

/// `#message` status line; hidden when there is nothing to say
#[component]
pub fn MessageBanner() -> impl IntoView {
    let store = use_board_store();

    view! {
        <div
            id="message"
            class=move || store.message().get().map(|m| m.class()).unwrap_or("message hidden")
        >
            {move || store.message().get().map(|m| m.text)}
        </div>
    }
}
