//! SplitEase
//!
//! Shared-expense tracker frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Name/email authentication with a persisted bearer token
//! - Groups, members, and per-group expenses
//! - Server-computed balances ("you owe" / "you are owed")
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All business logic lives in the backend; this client talks to
//! its REST API over HTTP and holds only session and display state.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
