//! Login Page
//!
//! Name/email credentials form. Success navigates to the dashboard; failure
//! shows the server's message inline and leaves the form intact.

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::state::SessionState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (error, set_error) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);
    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let n = name.get();
        let e = email.get();
        // Required fields block submission before any network call.
        if n.trim().is_empty() || e.trim().is_empty() {
            set_error.set("Please enter your name and email".to_string());
            return;
        }

        set_error.set(String::new());
        set_loading.set(true);

        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = session.login(n.trim(), e.trim()).await;
            if outcome.success {
                // Navigating away unmounts this page; leave the signals be.
                navigate("/dashboard", Default::default());
                return;
            }
            if outcome.message.is_empty() {
                set_error.set("Login failed".to_string());
            } else {
                set_error.set(outcome.message);
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <div class="w-full max-w-md bg-white rounded-xl shadow-lg border border-slate-200 p-8">
                <h2 class="text-2xl font-bold text-slate-900 mb-6">"Login"</h2>

                <form on:submit=on_submit class="space-y-4">
                    <input
                        type="text"
                        placeholder="Username"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full px-4 py-3 border border-slate-300 rounded-lg
                               focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                    />
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full px-4 py-3 border border-slate-300 rounded-lg
                               focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                    />

                    {move || {
                        let message = error.get();
                        (!message.is_empty()).then(|| view! {
                            <p class="text-sm text-red-600">{message}</p>
                        })
                    }}

                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="w-full py-3 bg-gradient-to-r from-blue-600 to-indigo-600
                               hover:from-blue-700 hover:to-indigo-700 disabled:opacity-50
                               text-white rounded-lg font-medium transition-all"
                    >
                        {move || if loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <p class="mt-4 text-sm text-slate-600">
                    "Don't have an account? "
                    <A href="/register" class="text-blue-600 hover:underline">"Register"</A>
                </p>
            </div>
        </div>
    }
}
