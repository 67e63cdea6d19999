//! Taskpad Frontend App
//!
//! Builds the stores against the HTTP transport, restores any persisted
//! session, and provides everything to the component tree via context.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::components::ToastHost;
use crate::context::ToastContext;
use crate::router::AppRouter;
use crate::session::SessionStore;
use crate::store::TaskStore;
use crate::theme::ThemeStore;

#[component]
pub fn App() -> impl IntoView {
    let api = Rc::new(HttpApi::new());

    let session = SessionStore::new(api.clone());
    session.restore();
    if session.user.get_untracked().is_some() {
        web_sys::console::log_1(&"[APP] Restored session from storage".into());
    }

    let tasks = TaskStore::new(api);
    let theme = ThemeStore::init();
    let toasts = ToastContext::new();

    // Provide context to all children
    provide_context(session);
    provide_context(tasks);
    provide_context(theme);
    provide_context(toasts);

    view! {
        <AppRouter/>
        <ToastHost/>
    }
}
