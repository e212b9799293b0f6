//! Activity Board Controller
//!
//! Request/render flow for the signup page: load, sign up, unregister.
//! Every mutation is followed by a full reload; nothing is patched locally.

use crate::api::ActivityApi;
use crate::models::{ActivityId, SignupRequest};
use crate::render::{self, BoardModel, ParticipantKey};

pub const SIGNUP_OK_TEXT: &str = "Successfully signed up!";
pub const SIGNUP_FAILED_TEXT: &str = "Error signing up. Please try again.";
pub const UNREGISTER_FAILED_TEXT: &str = "Failed to unregister participant. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Status line shown under the signup form
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn success(text: &str) -> Self {
        Self { kind: MessageKind::Success, text: text.to_string() }
    }

    pub fn error(text: &str) -> Self {
        Self { kind: MessageKind::Error, text: text.to_string() }
    }

    /// CSS class of the `#message` element
    pub fn class(&self) -> &'static str {
        match self.kind {
            MessageKind::Success => "message success",
            MessageKind::Error => "message error",
        }
    }
}

/// Result of a removal request from a participant row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnregisterOutcome {
    Cancelled,
    Removed,
    Failed,
}

/// The page the controller drives
pub trait BoardView {
    /// Replace the card list and select options
    fn render(&self, model: BoardModel);
    fn show_message(&self, message: Message);
    /// Clear the signup form controls
    fn reset_form(&self);
    /// Blocking yes/no prompt
    fn confirm(&self, prompt: &str) -> bool;
    /// Blocking notice
    fn alert(&self, text: &str);
}

/// Page controller, generic over transport and page
#[derive(Debug, Clone)]
pub struct ActivityBoard<A, V> {
    api: A,
    view: V,
}

impl<A: ActivityApi, V: BoardView> ActivityBoard<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    /// Fetch activities and re-render. Failures keep whatever is on screen.
    pub async fn load_activities(&self) {
        match self.api.list_activities().await {
            Ok(activities) => {
                log::info!("loaded {} activities", activities.len());
                self.view.render(render::project(&activities));
            }
            Err(e) => log::error!("Error loading activities: {}", e),
        }
    }

    /// Failures surface only as the generic error message and a log line
    pub async fn handle_signup(&self, email: String, activity_id: ActivityId) {
        let request = SignupRequest { email, activity_id };
        match self.api.sign_up(&request).await {
            Ok(()) => {
                log::info!("signed up {} for {}", request.email, request.activity_id);
                self.view.show_message(Message::success(SIGNUP_OK_TEXT));
                self.view.reset_form();
                self.load_activities().await;
            }
            Err(e) => {
                log::error!("Error signing up {} for {}: {}", request.email, request.activity_id, e);
                self.view.show_message(Message::error(SIGNUP_FAILED_TEXT));
            }
        }
    }

    pub async fn handle_delete_participant(&self, key: &ParticipantKey) -> UnregisterOutcome {
        let prompt = format!("Unregister {} from {}?", key.email, key.activity_name);
        if !self.view.confirm(&prompt) {
            return UnregisterOutcome::Cancelled;
        }

        match self.api.unregister(&key.activity_name, &key.email).await {
            Ok(()) => {
                log::info!("unregistered {} from {}", key.email, key.activity_name);
                self.load_activities().await;
                UnregisterOutcome::Removed
            }
            Err(e) => {
                log::error!("Error unregistering {} from {}: {}", key.email, key.activity_name, e);
                self.view.alert(UNREGISTER_FAILED_TEXT);
                UnregisterOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;
    use crate::api::{ApiError, ApiResult, Endpoints};
    use crate::models::Activity;
    use crate::render::tests::activity;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Signup(serde_json::Value),
        Delete(String),
    }

    #[derive(Clone, Default)]
    struct FakeApi {
        calls: Rc<RefCell<Vec<Call>>>,
        lists: Rc<RefCell<VecDeque<ApiResult<Vec<Activity>>>>>,
        signup_error: Rc<RefCell<Option<ApiError>>>,
        unregister_error: Rc<RefCell<Option<ApiError>>>,
    }

    impl FakeApi {
        fn returning(lists: Vec<ApiResult<Vec<Activity>>>) -> Self {
            let api = Self::default();
            api.lists.borrow_mut().extend(lists);
            api
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl ActivityApi for FakeApi {
        async fn list_activities(&self) -> ApiResult<Vec<Activity>> {
            self.calls.borrow_mut().push(Call::List);
            self.lists.borrow_mut().pop_front().unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn sign_up(&self, request: &SignupRequest) -> ApiResult<()> {
            let body = serde_json::to_value(request).unwrap();
            self.calls.borrow_mut().push(Call::Signup(body));
            match self.signup_error.borrow().clone() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }

        async fn unregister(&self, activity_name: &str, email: &str) -> ApiResult<()> {
            let url = Endpoints::new("/api").unregister(activity_name, email);
            self.calls.borrow_mut().push(Call::Delete(url));
            match self.unregister_error.borrow().clone() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }

    #[derive(Clone, Default)]
    struct FakeView {
        rendered: Rc<RefCell<Option<BoardModel>>>,
        renders: Rc<Cell<usize>>,
        messages: Rc<RefCell<Vec<Message>>>,
        resets: Rc<Cell<usize>>,
        answer: Rc<Cell<bool>>,
        prompts: Rc<RefCell<Vec<String>>>,
        alerts: Rc<RefCell<Vec<String>>>,
    }

    impl BoardView for FakeView {
        fn render(&self, model: BoardModel) {
            self.renders.set(self.renders.get() + 1);
            *self.rendered.borrow_mut() = Some(model);
        }

        fn show_message(&self, message: Message) {
            self.messages.borrow_mut().push(message);
        }

        fn reset_form(&self) {
            self.resets.set(self.resets.get() + 1);
        }

        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.answer.get()
        }

        fn alert(&self, text: &str) {
            self.alerts.borrow_mut().push(text.to_string());
        }
    }

    fn board(api: &FakeApi, view: &FakeView) -> ActivityBoard<FakeApi, FakeView> {
        ActivityBoard::new(api.clone(), view.clone())
    }

    fn chess_key() -> ParticipantKey {
        ParticipantKey { activity_name: "Chess Club".into(), email: "a@b.com".into() }
    }

    #[test]
    fn load_renders_projection_of_response() {
        let activities = vec![activity("chess", "Chess Club", &["a@b.com"]), activity("art", "Art Club", &[])];
        let api = FakeApi::returning(vec![Ok(activities.clone())]);
        let view = FakeView::default();

        block_on(board(&api, &view).load_activities());

        assert_eq!(api.calls(), vec![Call::List]);
        assert_eq!(view.rendered.borrow().clone(), Some(render::project(&activities)));
    }

    #[test]
    fn failed_load_keeps_previous_render() {
        let first = vec![activity("chess", "Chess Club", &["a@b.com"])];
        let api = FakeApi::returning(vec![
            Ok(first.clone()),
            Err(ApiError::Network("connection refused".into())),
        ]);
        let view = FakeView::default();
        let board = board(&api, &view);

        block_on(board.load_activities());
        block_on(board.load_activities());

        assert_eq!(view.renders.get(), 1);
        assert_eq!(view.rendered.borrow().clone(), Some(render::project(&first)));
        assert!(view.messages.borrow().is_empty());
    }

    #[test]
    fn signup_posts_body_resets_form_and_reloads_once() {
        let api = FakeApi::default();
        let view = FakeView::default();

        block_on(board(&api, &view).handle_signup("new@school.edu".into(), ActivityId::from("chess")));

        assert_eq!(
            api.calls(),
            vec![
                Call::Signup(serde_json::json!({"email": "new@school.edu", "activityId": "chess"})),
                Call::List,
            ]
        );
        assert_eq!(view.resets.get(), 1);
        assert_eq!(view.messages.borrow().clone(), vec![Message::success(SIGNUP_OK_TEXT)]);
    }

    #[test]
    fn rejected_signup_shows_generic_error_without_reload() {
        let api = FakeApi::default();
        *api.signup_error.borrow_mut() = Some(ApiError::Status {
            status: 400,
            detail: Some("Student already signed up for this activity".into()),
        });
        let view = FakeView::default();

        block_on(board(&api, &view).handle_signup("dup@school.edu".into(), ActivityId::from("chess")));

        assert_eq!(api.calls().len(), 1);
        assert_eq!(view.resets.get(), 0);
        let messages = view.messages.borrow();
        assert_eq!(messages.as_slice(), &[Message::error(SIGNUP_FAILED_TEXT)]);
        assert_eq!(messages[0].class(), "message error");
    }

    #[test]
    fn network_failure_on_signup_uses_same_text() {
        let api = FakeApi::default();
        *api.signup_error.borrow_mut() = Some(ApiError::Network("offline".into()));
        let view = FakeView::default();

        block_on(board(&api, &view).handle_signup("a@b.com".into(), ActivityId::from("art")));

        assert_eq!(view.messages.borrow()[0].text, SIGNUP_FAILED_TEXT);
    }

    #[test]
    fn declined_delete_issues_no_requests() {
        let api = FakeApi::default();
        let view = FakeView::default();

        let outcome = block_on(board(&api, &view).handle_delete_participant(&chess_key()));

        assert_eq!(outcome, UnregisterOutcome::Cancelled);
        assert!(api.calls().is_empty());
        assert_eq!(view.renders.get(), 0);
        assert!(view.alerts.borrow().is_empty());
        assert_eq!(view.prompts.borrow().as_slice(), &["Unregister a@b.com from Chess Club?".to_string()]);
    }

    #[test]
    fn confirmed_delete_hits_encoded_url_then_reloads() {
        let api = FakeApi::default();
        let view = FakeView::default();
        view.answer.set(true);

        let outcome = block_on(board(&api, &view).handle_delete_participant(&chess_key()));

        assert_eq!(outcome, UnregisterOutcome::Removed);
        assert_eq!(
            api.calls(),
            vec![
                Call::Delete("/api/activities/Chess%20Club/unregister?email=a%40b.com".into()),
                Call::List,
            ]
        );
    }

    #[test]
    fn failed_delete_alerts_and_skips_reload() {
        let api = FakeApi::default();
        *api.unregister_error.borrow_mut() = Some(ApiError::Status { status: 400, detail: None });
        let view = FakeView::default();
        view.answer.set(true);

        let outcome = block_on(board(&api, &view).handle_delete_participant(&chess_key()));

        assert_eq!(outcome, UnregisterOutcome::Failed);
        assert_eq!(api.calls().len(), 1);
        assert_eq!(view.alerts.borrow().as_slice(), &[UNREGISTER_FAILED_TEXT.to_string()]);
        assert_eq!(view.renders.get(), 0);
    }
}
