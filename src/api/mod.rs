//! Remote API Client
//!
//! Abstract transport consumed by the stores, plus the HTTP implementation
//! used in the browser. The stores only ever see the `AuthApi`/`TasksApi`
//! traits, so tests can substitute a stub client.

use std::future::Future;
use std::pin::Pin;

use crate::models::{LoginCredentials, LoginResponse, NewTask, Task, TaskPatch};

#[cfg(target_arch = "wasm32")]
mod http;
#[cfg(target_arch = "wasm32")]
pub use http::HttpApi;

/// Remote call outcome, tagged by failure kind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a well-formed rejection.
    #[error("{0}")]
    ServerRejected(String),
    /// No response was received at all.
    #[error("Cannot reach the server. Check your connection and try again.")]
    Unreachable,
    /// Anything else (malformed response, request build failure, ...).
    #[error("{0}")]
    Unknown(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Client futures are browser futures; they are neither `Send` nor `Sync`.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = ApiResult<T>> + 'a>>;

/// Authentication endpoints.
pub trait AuthApi {
    fn login(&self, credentials: LoginCredentials) -> ApiFuture<'_, LoginResponse>;

    /// Best-effort logout notification; callers ignore the outcome.
    fn logout(&self) -> ApiFuture<'_, ()>;
}

/// Task CRUD endpoints, implicitly scoped to the logged-in user.
pub trait TasksApi {
    fn list_tasks(&self) -> ApiFuture<'_, Vec<Task>>;
    fn create_task(&self, task: NewTask) -> ApiFuture<'_, Task>;
    fn update_task(&self, id: u32, patch: TaskPatch) -> ApiFuture<'_, ()>;
    fn delete_task(&self, id: u32) -> ApiFuture<'_, ()>;
}
