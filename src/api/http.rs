//! HTTP Transport
//!
//! gloo-net fetch client for the remote task API. Injects the persisted
//! bearer token into every request; failure mapping follows the tagged
//! `ApiError` kinds.

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{ApiError, ApiFuture, ApiResult, AuthApi, TasksApi};
use crate::models::{LoginCredentials, LoginResponse, NewTask, Task, TaskPatch};
use crate::storage;

const DEFAULT_BASE_URL: &str = "/api";

/// Error body shape used by the backend for rejections.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Update body; the backend takes `completed` as 0/1.
#[derive(Serialize)]
struct UpdateTaskBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<u8>,
}

pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match storage::token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn send_json<T, B>(builder: RequestBuilder, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let request = Self::authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Unknown(e.to_string()))?;
        let response = request.send().await.map_err(|_| ApiError::Unreachable)?;
        Self::decode(response).await
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> ApiResult<T> {
        let response = Self::authorize(builder)
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;
        Self::decode(response).await
    }

    /// For endpoints whose success body is empty or irrelevant.
    async fn send_empty(builder: RequestBuilder) -> ApiResult<()> {
        let response = Self::authorize(builder)
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;
        Self::check_status(&response).await
    }

    async fn send_json_empty<B: Serialize>(builder: RequestBuilder, body: &B) -> ApiResult<()> {
        let request = Self::authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Unknown(e.to_string()))?;
        let response = request.send().await.map_err(|_| ApiError::Unreachable)?;
        Self::check_status(&response).await
    }

    async fn check_status(response: &Response) -> ApiResult<()> {
        if response.ok() {
            return Ok(());
        }
        Err(ApiError::ServerRejected(Self::rejection_message(response).await))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        Self::check_status(&response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Unknown(e.to_string()))
    }

    async fn rejection_message(response: &Response) -> String {
        let status = response.status();
        response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("Request failed with status {status}"))
    }
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthApi for HttpApi {
    fn login(&self, credentials: LoginCredentials) -> ApiFuture<'_, LoginResponse> {
        let url = self.url("/users/login");
        Box::pin(async move {
            Self::send_json(gloo_net::http::Request::post(&url), &credentials).await
        })
    }

    fn logout(&self) -> ApiFuture<'_, ()> {
        let url = self.url("/users/logout");
        Box::pin(async move { Self::send_empty(gloo_net::http::Request::post(&url)).await })
    }
}

impl TasksApi for HttpApi {
    fn list_tasks(&self) -> ApiFuture<'_, Vec<Task>> {
        let url = self.url("/tasks");
        Box::pin(async move { Self::send(gloo_net::http::Request::get(&url)).await })
    }

    fn create_task(&self, task: NewTask) -> ApiFuture<'_, Task> {
        let url = self.url("/tasks");
        Box::pin(async move {
            Self::send_json(gloo_net::http::Request::post(&url), &task).await
        })
    }

    fn update_task(&self, id: u32, patch: TaskPatch) -> ApiFuture<'_, ()> {
        let url = self.url(&format!("/tasks/{id}"));
        Box::pin(async move {
            let body = UpdateTaskBody {
                title: patch.title.as_deref(),
                description: patch.description.as_deref(),
                completed: patch.completed.map(u8::from),
            };
            // The server may answer with the updated task; local state is
            // already what the optimistic merge produced, so the body is
            // ignored either way.
            Self::send_json_empty(gloo_net::http::Request::put(&url), &body).await
        })
    }

    fn delete_task(&self, id: u32) -> ApiFuture<'_, ()> {
        let url = self.url(&format!("/tasks/{id}"));
        Box::pin(async move { Self::send_empty(gloo_net::http::Request::delete(&url)).await })
    }
}
