#![allow(warnings)]
//! Taskpad Frontend Entry Point

mod api;
mod context;
mod models;
mod session;
mod storage;
mod store;
mod theme;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod router;

#[cfg(target_arch = "wasm32")]
fn main() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    mount_to_body(app::App);
}

// The UI only runs in the browser; the native build exists to host the
// unit tests.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
