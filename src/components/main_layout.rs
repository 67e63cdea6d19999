//! Main Layout Component
//!
//! App header with theme toggle, current user, and logout; routed pages
//! render into the outlet below.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;
use crate::store::use_tasks;
use crate::theme::{use_theme, Theme};

#[component]
pub fn MainLayout() -> impl IntoView {
    let session = use_session();
    let tasks = use_tasks();
    let theme = use_theme();
    let navigate = StoredValue::new_local(use_navigate());

    let on_logout = move |_| {
        spawn_local(async move {
            // Local clearing is unconditional; the remote notification is
            // best-effort inside logout().
            session.logout().await;
            tasks.reset();
            navigate.with_value(|nav| nav("/login", Default::default()));
        });
    };

    view! {
        <div class="app-shell">
            <header class="app-header">
                <h1>"Taskpad"</h1>
                <div class="header-actions">
                    <button class="theme-toggle" on:click=move |_| theme.toggle()>
                        {move || if theme.theme() == Theme::Dark { "🌞" } else { "🌙" }}
                    </button>
                    {move || session.user.get().map(|user| view! {
                        <span class="current-user">{user.username}</span>
                        <button class="logout-btn" on:click=on_logout>"Logout"</button>
                    })}
                </div>
            </header>
            <main class="main-content">
                <Outlet/>
            </main>
        </div>
    }
}
