//! Task Item Component
//!
//! Single task row with view/edit modes, completion toggle, and inline
//! delete confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::DeleteConfirmButton;
use crate::context::use_toasts;
use crate::models::{Task, TaskPatch};
use crate::store::use_tasks;

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let store = use_tasks();
    let toasts = use_toasts();

    let (editing, set_editing) = signal(false);
    let (edit_title, set_edit_title) = signal(task.title.clone());
    let (edit_description, set_edit_description) = signal(task.description.clone());

    let id = task.id;
    let completed = task.completed;
    let title = task.title;
    let description = task.description;

    let toggle = move |_| {
        spawn_local(async move {
            match store.toggle_completed(id).await {
                Ok(()) => toasts.success("Task updated"),
                Err(message) => toasts.error(message),
            }
        });
    };

    let save = move |_| {
        let title_value = edit_title.get().trim().to_string();
        if title_value.is_empty() {
            toasts.error("Title cannot be empty");
            return;
        }
        let patch = TaskPatch {
            title: Some(title_value),
            description: Some(edit_description.get()),
            completed: None,
        };
        set_editing.set(false);
        spawn_local(async move {
            match store.update(id, patch).await {
                Ok(()) => toasts.success("Task updated"),
                Err(message) => toasts.error(message),
            }
        });
    };

    let delete = Callback::new(move |()| {
        spawn_local(async move {
            match store.delete(id).await {
                Ok(()) => toasts.success("Task deleted"),
                Err(message) => toasts.error(message),
            }
        });
    });

    view! {
        <div class=move || if completed { "task-item completed" } else { "task-item" }>
            {move || {
                if editing.get() {
                    view! {
                        <div class="task-edit">
                            <input
                                type="text"
                                prop:value=move || edit_title.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_edit_title.set(input.value());
                                }
                            />
                            <textarea
                                rows=3
                                prop:value=move || edit_description.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                    set_edit_description.set(input.value());
                                }
                            ></textarea>
                            <div class="task-edit-actions">
                                <button on:click=move |_| set_editing.set(false)>"Cancel"</button>
                                <button class="save-btn" on:click=save>"Save"</button>
                            </div>
                        </div>
                    }
                    .into_any()
                } else {
                    let title = title.clone();
                    let description = description.clone();
                    view! {
                        <div class="task-row">
                            <div class="task-text">
                                <h3>{title.clone()}</h3>
                                <p>{description}</p>
                            </div>
                            <div class="task-actions">
                                <button
                                    class=if completed { "toggle-btn done" } else { "toggle-btn" }
                                    on:click=toggle
                                >
                                    "✓"
                                </button>
                                <button class="edit-btn" on:click=move |_| set_editing.set(true)>
                                    "✎"
                                </button>
                                <DeleteConfirmButton
                                    title=title
                                    button_class="delete-btn"
                                    on_confirm=delete
                                />
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
