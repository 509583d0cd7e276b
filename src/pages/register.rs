//! Register Page
//!
//! Account creation form. Registration does not establish a session; success
//! shows the server's message and navigates to the login page.

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::components::FlashState;
use crate::state::SessionState;

/// Register page component
#[component]
pub fn Register() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let flash = use_context::<FlashState>().expect("FlashState not found");

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (error, set_error) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);
    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let n = name.get();
        let e = email.get();
        if n.trim().is_empty() || e.trim().is_empty() {
            set_error.set("Please enter your name and email".to_string());
            return;
        }

        set_error.set(String::new());
        set_loading.set(true);

        let session = session.clone();
        let flash = flash.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = session.register(n.trim(), e.trim()).await;
            if outcome.success {
                flash.show_success(&outcome.message);
                navigate("/login", Default::default());
                return;
            }
            if outcome.message.is_empty() {
                set_error.set("Registration failed".to_string());
            } else {
                set_error.set(outcome.message);
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <div class="w-full max-w-md bg-white rounded-xl shadow-lg border border-slate-200 p-8">
                <h2 class="text-2xl font-bold text-slate-900 mb-6">"Register"</h2>

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
                        {move || if loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <p class="mt-4 text-sm text-slate-600">
                    "Already have an account? "
                    <A href="/login" class="text-blue-600 hover:underline">"Login"</A>
                </p>
            </div>
        </div>
    }
}
