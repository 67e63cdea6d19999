//! Frontend Models
//!
//! Data structures matching the remote API payloads.

use serde::{Deserialize, Serialize};

/// Authenticated user identity, persisted across reloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub username: String,
    pub token: String,
}

impl User {
    /// A session record is only usable when both the identity and the
    /// credential are present.
    pub fn is_valid(&self) -> bool {
        !self.user_id.is_empty() && !self.token.is_empty()
    }
}

/// Login request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginCredentials {
    pub identifier: String,
    pub secret: String,
}

/// Login response body. Identity fields are only populated on success.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Task data structure (matches backend). The `id` is server-assigned and
/// immutable once assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
}

impl Task {
    /// Merge a partial update into this task, leaving untouched fields as-is.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// Create request body; completion defaults server-side to not-completed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
}

/// Partial update for a task. Any non-empty subset of the fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}
