//! Application Router
//!
//! Route table plus the guard that keeps unauthenticated visitors out of the
//! task list.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::{LoginPage, MainLayout, TasksPage};
use crate::session::use_session;

#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <ParentRoute path=path!("") view=MainLayout>
                    <Route
                        path=path!("")
                        view=|| view! {
                            <RequireAuth>
                                <TasksPage/>
                            </RequireAuth>
                        }
                    />
                    <Route path=path!("login") view=LoginPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Admits protected content only while the session is authenticated;
/// anything else (anonymous, still authenticating, errored) redirects to the
/// login view. Pure function of the session snapshot at render time — no
/// network call, no spinner. Once a restore or login resolves, the re-render
/// re-evaluates the guard.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            {children()}
        </Show>
    }
}
