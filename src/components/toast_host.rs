//! Toast Host Component
//!
//! Renders the ephemeral notification queue in a fixed corner container.

use leptos::prelude::*;

use crate::context::{use_toasts, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_toasts();
    let toasts = ctx.toasts();

    view! {
        <div class="toast-container">
            {move || toasts.get().into_iter().map(|toast| {
                let id = toast.id;
                let class = match toast.kind {
                    ToastKind::Success => "toast success",
                    ToastKind::Error => "toast error",
                };
                view! {
                    <div class=class>
                        <span class="toast-message">{toast.message}</span>
                        <button class="toast-dismiss" on:click=move |_| ctx.dismiss(id)>
                            "×"
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
