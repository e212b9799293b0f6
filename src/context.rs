//! Application Context
//!
//! Shared controller provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpActivityApi;
use crate::board::ActivityBoard;
use crate::models::ActivityId;
use crate::render::ParticipantKey;
use crate::store::StoreBoardView;

pub type PageBoard = ActivityBoard<HttpActivityApi, StoreBoardView>;

/// Board-wide handle provided via context
#[derive(Clone)]
pub struct BoardContext {
    board: PageBoard,
}

impl BoardContext {
    pub fn new(board: PageBoard) -> Self {
        Self { board }
    }

    /// Re-fetch activities. Concurrent reloads are not coordinated.
    pub fn reload(&self) {
        let board = self.board.clone();
        spawn_local(async move {
            board.load_activities().await;
        });
    }

    pub fn sign_up(&self, email: String, activity_id: ActivityId) {
        let board = self.board.clone();
        spawn_local(async move {
            board.handle_signup(email, activity_id).await;
        });
    }

    pub fn remove_participant(&self, key: ParticipantKey) {
        let board = self.board.clone();
        spawn_local(async move {
            board.handle_delete_participant(&key).await;
        });
    }
}

/// Get the board context
pub fn use_board_context() -> BoardContext {
    use_context::<BoardContext>().expect("BoardContext should be provided")
}
