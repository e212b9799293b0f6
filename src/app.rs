//! Activity Board App
//!
//! Root component: activity cards on one side, signup form on the other.

use leptos::html;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpActivityApi;
use crate::board::ActivityBoard;
use crate::components::{ActivityList, MessageBanner, SignupForm};
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::store::{BoardState, StoreBoardView};

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    // State
    let store = Store::new(BoardState::default());
    let form_ref = NodeRef::<html::Form>::new();

    let view = StoreBoardView::new(store, form_ref, config.message_timeout_ms);
    let board = ActivityBoard::new(HttpActivityApi::new(&config.api_base), view);
    let ctx = BoardContext::new(board);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx.clone());

    // Load activities on mount
    Effect::new(move |_| {
        ctx.reload();
    });

    view! {
        <div class="board-layout">
            <header>
                <h1>"Extracurricular Activities"</h1>
            </header>

            <main>
                <section id="activities-container">
                    <h3>"Available Activities"</h3>
                    <ActivityList />
                </section>

                <section id="signup-container">
                    <h3>"Sign Up for an Activity"</h3>
                    <SignupForm form_ref=form_ref />
                    <MessageBanner />
                </section>
            </main>
        </div>
    }
}
