//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! page side of `BoardView`: the controller writes here, components read.

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::board::{BoardView, Message};
use crate::render::{BoardModel, CardView, SelectOption};

/// Rendered board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// False until the first successful load
    pub loaded: bool,
    /// Activity cards, in response order
    pub cards: Vec<CardView>,
    /// Options of the signup select
    pub options: Vec<SelectOption>,
    /// Status line under the signup form
    pub message: Option<Message>,
    /// Bumped per message so a stale hide timer leaves newer messages alone
    pub message_seq: u32,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

/// A hide timer armed at `armed` may only clear the message it was armed for
fn should_hide(current: u32, armed: u32) -> bool {
    current == armed
}

/// `BoardView` backed by the store and the live signup form
#[derive(Clone, Copy)]
pub struct StoreBoardView {
    store: BoardStore,
    form: NodeRef<html::Form>,
    message_timeout_ms: u32,
}

impl StoreBoardView {
    pub fn new(store: BoardStore, form: NodeRef<html::Form>, message_timeout_ms: u32) -> Self {
        Self { store, form, message_timeout_ms }
    }
}

impl BoardView for StoreBoardView {
    fn render(&self, model: BoardModel) {
        // Options are replaced wholesale, never appended
        self.store.cards().set(model.cards);
        self.store.options().set(model.options);
        self.store.loaded().set(true);
    }

    fn show_message(&self, message: Message) {
        let store = self.store;
        let seq = store.message_seq().get_untracked().wrapping_add(1);
        store.message_seq().set(seq);
        store.message().set(Some(message));

        let timeout = self.message_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            if should_hide(store.message_seq().get_untracked(), seq) {
                store.message().set(None);
            }
        });
    }

    fn reset_form(&self) {
        if let Some(form) = self.form.get_untracked() {
            form.reset();
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn alert(&self, text: &str) {
        let shown = web_sys::window().map(|w| w.alert_with_message(text));
        if !matches!(shown, Some(Ok(()))) {
            log::warn!("could not show alert: {}", text);
        }
    }
}
