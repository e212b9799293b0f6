//! Fetch Client
//!
//! `ActivityApi` over the browser `fetch` API.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{ActivityApi, ApiError, ApiResult, Endpoints};
use crate::models::{decode_activities, Activity, ErrorBody, SignupRequest};

#[derive(Debug, Clone)]
pub struct HttpActivityApi {
    endpoints: Endpoints,
}

impl HttpActivityApi {
    pub fn new(api_base: &str) -> Self {
        Self { endpoints: Endpoints::new(api_base) }
    }

    async fn send(&self, method: &str, url: &str, json_body: Option<String>) -> ApiResult<Response> {
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

        let init = RequestInit::new();
        init.set_method(method);
        if let Some(body) = &json_body {
            init.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::network)?;
        if json_body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(ApiError::network)?;
        }

        log::debug!("{} {}", method, url);
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(ApiError::network)?;
        value.dyn_into::<Response>().map_err(ApiError::network)
    }
}

async fn read_text(response: &Response) -> ApiResult<String> {
    let promise = response.text().map_err(ApiError::decode)?;
    let text = JsFuture::from(promise).await.map_err(ApiError::decode)?;
    text.as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))
}

/// Map a non-2xx response to `ApiError::Status`, keeping the backend's `detail`
async fn ensure_success(response: &Response) -> ApiResult<()> {
    if response.ok() {
        return Ok(());
    }
    let detail = read_text(response)
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
        .map(|body| body.detail);
    Err(ApiError::Status { status: response.status(), detail })
}

#[async_trait(?Send)]
impl ActivityApi for HttpActivityApi {
    async fn list_activities(&self) -> ApiResult<Vec<Activity>> {
        let response = self.send("GET", &self.endpoints.activities(), None).await?;
        ensure_success(&response).await?;
        let body = read_text(&response).await?;
        decode_activities(&body).map_err(ApiError::Decode)
    }

    async fn sign_up(&self, request: &SignupRequest) -> ApiResult<()> {
        let body = serde_json::to_string(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self.send("POST", &self.endpoints.signup(), Some(body)).await?;
        ensure_success(&response).await?;

        // Body is not inspected beyond being JSON
        let text = read_text(&response).await?;
        let reply: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
        log::debug!("signup accepted: {}", reply);
        Ok(())
    }

    async fn unregister(&self, activity_name: &str, email: &str) -> ApiResult<()> {
        let url = self.endpoints.unregister(activity_name, email);
        let response = self.send("DELETE", &url, None).await?;
        ensure_success(&response).await
    }
}
