//! Task Form Component
//!
//! Form for creating new tasks, with inline title validation.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn TaskForm(#[prop(into)] on_add: Callback<(String, String)>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (title_error, set_title_error) = signal::<Option<&'static str>>(None);

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get().trim().to_string();
        if title_value.is_empty() {
            set_title_error.set(Some("Title is required"));
            return;
        }
        set_title_error.set(None);
        on_add.run((title_value, description.get()));
        set_title.set(String::new());
        set_description.set(String::new());
    };

    view! {
        <form class="task-form" on:submit=create_task>
            <h2>"Add New Task"</h2>

            <label for="title">"Title"</label>
            <input
                id="title"
                type="text"
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            {move || title_error.get().map(|message| view! {
                <p class="form-error">{message}</p>
            })}

            <label for="description">"Description"</label>
            <textarea
                id="description"
                rows=3
                prop:value=move || description.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_description.set(input.value());
                }
            ></textarea>

            <button type="submit">"Add Task"</button>
        </form>
    }
}
