//! Activity List Component
//!
//! Renders one card per fetched activity.

use leptos::prelude::*;

use crate::components::ActivityCard;
use crate::context::use_board_context;
use crate::render::ParticipantKey;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn ActivityList() -> impl IntoView {
    let store = use_board_store();
    let ctx = use_board_context();

    // Rows dispatch their own key; no per-row state survives a reload
    let on_remove = Callback::new(move |key: ParticipantKey| ctx.remove_participant(key));

    view! {
        <div id="activities-list">
            <Show
                when=move || store.loaded().get()
                fallback=|| view! { <p>"Loading activities..."</p> }
            >
                <For
                    each=move || store.cards().get()
                    // Whole card as key so any changed field re-renders it
                    key=|card| card.clone()
                    children=move |card| view! { <ActivityCard card=card on_remove=on_remove /> }
                />
            </Show>
        </div>
    }
}
