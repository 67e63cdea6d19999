//! Session Store
//!
//! Single authoritative source of "who is logged in". Survives page reloads
//! through persisted storage and is provided to the whole component tree via
//! context. All login failures are converted to store-state errors; nothing
//! here ever propagates an error to the view layer.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::{ApiError, AuthApi};
use crate::models::{LoginCredentials, User};
use crate::storage;

/// Default message for a well-formed rejection that carries no message.
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid username or password.";
/// Fallback for failures we cannot classify.
pub const MSG_LOGIN_FAILED: &str = "Something went wrong while logging in.";

/// Derived session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Anonymous,
    Authenticating,
    Authenticated,
    Error,
}

/// Session state and operations, shared via context.
///
/// `Copy` so components can move it into any number of closures.
#[derive(Clone, Copy)]
pub struct SessionStore {
    api: StoredValue<Rc<dyn AuthApi>, LocalStorage>,
    pub user: RwSignal<Option<User>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

impl SessionStore {
    pub fn new(api: Rc<dyn AuthApi>) -> Self {
        Self {
            api: StoredValue::new_local(api),
            user: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Invoked once at startup. Re-authenticates from the persisted record
    /// without any network call; an unusable record removes both keys.
    /// Staleness is only discovered when a later authenticated request fails.
    pub fn restore(&self) {
        if storage::get(storage::SESSION_KEY).is_none() {
            return;
        }
        match storage::load_session() {
            Some(user) if user.is_valid() => self.user.set(Some(user)),
            _ => storage::clear_session(),
        }
    }

    pub fn status(&self) -> SessionStatus {
        if self.loading.get() {
            SessionStatus::Authenticating
        } else if self.user.get().is_some() {
            SessionStatus::Authenticated
        } else if self.error.get().is_some() {
            SessionStatus::Error
        } else {
            SessionStatus::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    /// Issue one remote authentication call. On success the identity is held
    /// in store state and persisted under both session keys; every failure
    /// path degrades to a user-facing `error` message.
    pub async fn login(&self, credentials: LoginCredentials) {
        self.loading.set(true);
        self.error.set(None);

        let api = self.api.get_value();
        match api.login(credentials).await {
            Ok(response) if response.success => {
                let user = User {
                    user_id: response.user_id,
                    username: response.username,
                    token: response.token,
                };
                if user.is_valid() {
                    storage::save_session(&user);
                    self.user.set(Some(user));
                } else {
                    // success flag without a usable identity
                    self.error.set(Some(MSG_INVALID_CREDENTIALS.to_string()));
                }
            }
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| MSG_INVALID_CREDENTIALS.to_string());
                self.error.set(Some(message));
            }
            Err(ApiError::ServerRejected(message)) => self.error.set(Some(message)),
            Err(err @ ApiError::Unreachable) => self.error.set(Some(err.to_string())),
            Err(ApiError::Unknown(message)) => {
                let message = if message.is_empty() {
                    MSG_LOGIN_FAILED.to_string()
                } else {
                    message
                };
                self.error.set(Some(message));
            }
        }

        self.loading.set(false);
    }

    /// Logout is client-side-authoritative: local state and both persisted
    /// keys are cleared unconditionally before the best-effort server
    /// notification, whose outcome is ignored.
    pub async fn logout(&self) {
        storage::clear_session();
        self.user.set(None);
        self.error.set(None);

        let api = self.api.get_value();
        let _ = api.logout().await;
    }
}
