//! Backend API
//!
//! HTTP bindings for the activities backend, organized behind a trait so the
//! board controller can run against any transport.

mod endpoints;
mod http;

use async_trait::async_trait;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::models::{Activity, SignupRequest};

pub use endpoints::Endpoints;
pub use http::HttpActivityApi;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failures talking to the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {status}{suffix}", suffix = detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    #[error("invalid response: {0}")]
    Decode(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {}", d)).unwrap_or_default()
}

impl ApiError {
    pub(crate) fn network(err: JsValue) -> Self {
        Self::Network(format!("{:?}", err))
    }

    pub(crate) fn decode(err: JsValue) -> Self {
        Self::Decode(format!("{:?}", err))
    }
}

/// Operations the board needs from the backend
#[async_trait(?Send)]
pub trait ActivityApi {
    /// `GET /activities`
    async fn list_activities(&self) -> ApiResult<Vec<Activity>>;

    /// `POST /signup`
    async fn sign_up(&self, request: &SignupRequest) -> ApiResult<()>;

    /// `DELETE /activities/{name}/unregister?email=`
    async fn unregister(&self, activity_name: &str, email: &str) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_includes_detail_when_present() {
        let err = ApiError::Status { status: 400, detail: Some("Student already signed up".into()) };
        assert_eq!(err.to_string(), "server responded with status 400: Student already signed up");

        let bare = ApiError::Status { status: 502, detail: None };
        assert_eq!(bare.to_string(), "server responded with status 502");
    }
}
