//! Participant Item Component
//!
//! One `<li>` of a card's participant list.

use leptos::prelude::*;

use crate::render::{ParticipantKey, ParticipantRow, NO_PARTICIPANTS_TEXT};

/// Participant row with its removal button, or the empty-list placeholder
///
/// # Arguments
/// * `row` - Row to render; participant rows carry their own key
/// * `on_remove` - Receives the row's key when its delete button is clicked
#[component]
pub fn ParticipantItem(
    row: ParticipantRow,
    on_remove: Callback<ParticipantKey>,
) -> impl IntoView {
    match row {
        ParticipantRow::Placeholder => view! {
            <li class="no-participants">{NO_PARTICIPANTS_TEXT}</li>
        }.into_any(),
        ParticipantRow::Participant(key) => {
            let email = key.email.clone();
            view! {
                <li class="participant-item">
                    <span class="participant-email">{email}</span>
                    <button
                        class="delete-btn"
                        title="Unregister participant"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_remove.run(key.clone());
                        }
                    >
                        "×"
                    </button>
                </li>
            }.into_any()
        }
    }
}
