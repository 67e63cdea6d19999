//! Login Page Component
//!
//! Credential form bound to the session store. Field validation happens here
//! before any remote call; login failures surface through the store's error
//! signal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::models::LoginCredentials;
use crate::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let (identifier, set_identifier) = signal(String::new());
    let (secret, set_secret) = signal(String::new());

    // An authenticated session (freshly logged in or restored) has no
    // business on the login page.
    let navigate = StoredValue::new_local(use_navigate());
    Effect::new(move |_| {
        if session.is_authenticated() {
            navigate.with_value(|nav| nav("/", Default::default()));
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let identifier = identifier.get().trim().to_string();
        let secret = secret.get();
        if identifier.is_empty() || secret.is_empty() {
            return;
        }
        spawn_local(async move {
            session.login(LoginCredentials { identifier, secret }).await;
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"Login"</h1>

                {move || session.error.get().map(|message| view! {
                    <div class="alert error" role="alert">{message}</div>
                })}

                <label for="identifier">"Email"</label>
                <input
                    id="identifier"
                    type="email"
                    required=true
                    prop:value=move || identifier.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_identifier.set(input.value());
                    }
                />

                <label for="secret">"Password"</label>
                <input
                    id="secret"
                    type="password"
                    required=true
                    prop:value=move || secret.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_secret.set(input.value());
                    }
                />

                <button type="submit" disabled=move || session.loading.get()>
                    {move || if session.loading.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
