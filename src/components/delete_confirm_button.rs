//! Delete Confirm Button Component
//!
//! Two-step delete for a task row: the × button swaps to an inline prompt
//! naming the task, and the remote delete only goes out after the user
//! confirms.

use leptos::prelude::*;

fn delete_prompt(title: &str) -> String {
    format!("Delete \"{title}\"?")
}

/// Inline delete confirmation for a single task.
///
/// Shows a × button initially. When clicked, shows `Delete "{title}"?` with
/// confirm/cancel actions; confirming runs the callback and collapses the
/// prompt.
#[component]
pub fn DeleteConfirmButton(
    /// Title of the task on the chopping block, named in the prompt.
    #[prop(into)] title: String,
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let prompt = delete_prompt(&title);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                "×"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
