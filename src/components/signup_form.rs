//! Signup Form Component
//!
//! Email input plus activity select; submits a signup through the board.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_board_context;
use crate::models::ActivityId;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn SignupForm(form_ref: NodeRef<html::Form>) -> impl IntoView {
    let store = use_board_store();
    let ctx = use_board_context();

    let email_ref = NodeRef::<html::Input>::new();
    let activity_ref = NodeRef::<html::Select>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (Some(email), Some(activity)) = (email_ref.get(), activity_ref.get()) else {
            return;
        };
        ctx.sign_up(email.value(), ActivityId::from(activity.value()));
    };

    view! {
        <form id="signup-form" node_ref=form_ref on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@school.edu"
                    node_ref=email_ref
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select id="activity" required=true node_ref=activity_ref>
                    <For
                        each=move || store.options().get()
                        key=|option| option.clone()
                        children=|option| view! {
                            <option value=option.value.to_string()>{option.label}</option>
                        }
                    />
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
