//! Tasks Page Component
//!
//! Protected view over the task store: initial fetch, add form, and the
//! task list itself.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{TaskForm, TaskItem};
use crate::context::use_toasts;
use crate::store::use_tasks;

#[component]
pub fn TasksPage() -> impl IntoView {
    let store = use_tasks();
    let toasts = use_toasts();

    // Initial fetch; the store's guard flag keeps effect re-runs and
    // remounts from issuing a duplicate list call.
    Effect::new(move |_| {
        spawn_local(async move {
            store.fetch_all().await;
        });
    });

    let on_add = Callback::new(move |(title, description): (String, String)| {
        spawn_local(async move {
            match store.add(&title, &description).await {
                Ok(()) => toasts.success("Task added"),
                Err(message) => toasts.error(message),
            }
        });
    });

    view! {
        <div class="tasks-page">
            {move || store.error.get().map(|message| view! {
                <div class="alert error" role="alert">{message}</div>
            })}

            <TaskForm on_add=on_add/>

            <h2>"Your Tasks"</h2>
            <Show
                when=move || !store.loading.get()
                fallback=|| view! { <TaskSkeleton count=5/> }
            >
                {move || {
                    let tasks = store.tasks.get();
                    if tasks.is_empty() {
                        view! { <p class="empty-hint">"No tasks yet. Add one above!"</p> }
                            .into_any()
                    } else {
                        tasks
                            .into_iter()
                            .map(|task| view! { <TaskItem task=task/> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}

/// Placeholder rows shown while the initial fetch is in flight.
#[component]
fn TaskSkeleton(count: usize) -> impl IntoView {
    (0..count)
        .map(|_| view! { <div class="task-item skeleton"></div> })
        .collect_view()
}
