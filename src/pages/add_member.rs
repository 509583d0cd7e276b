//! Add Member Page
//!
//! Adds an existing user to the group by id. Inline error on failure,
//! navigate back to the group on success.

use leptos::*;
use leptos_router::{use_navigate, use_params_map, A};

use crate::api;
use crate::state::SessionState;

/// Add-member page component
#[component]
pub fn AddMember() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let params = use_params_map();
    let id = create_memo(move |_| params.with(|p| p.get("id").cloned().unwrap_or_default()));

    let (user_id, set_user_id) = create_signal(String::new());
    let (error, set_error) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);
    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let uid = user_id.get();
        if uid.trim().is_empty() {
            set_error.set("Please enter a user ID".to_string());
            return;
        }

        set_error.set(String::new());
        set_loading.set(true);

        let group_id = id.get();
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::add_member(&group_id, uid.trim()).await {
                Ok(()) => {
                    navigate(&format!("/group/{}", group_id), Default::default());
                    return;
                }
                Err(e) => {
                    set_error.set(session.absorb(e).to_string());
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <div class="w-full max-w-md">
                <A
                    href=move || format!("/group/{}", id.get())
                    class="flex items-center text-slate-600 hover:text-slate-900 mb-6 transition-colors"
                >
                    "← Back to Group"
                </A>

                <div class="bg-white rounded-xl border border-slate-200 shadow-lg p-8">
                    <div class="text-center mb-6">
                        <h2 class="text-2xl font-bold text-slate-900">"Add Member"</h2>
                        <p class="text-slate-500 mt-2">"Enter the user ID to add them to this group"</p>
                    </div>

                    <form on:submit=on_submit class="space-y-4">
                        <div>
                            <label class="block text-slate-700 font-medium mb-2">"User ID"</label>
                            <input
                                type="text"
                                placeholder="Enter user ID"
                                prop:value=move || user_id.get()
                                on:input=move |ev| {
                                    set_user_id.set(event_target_value(&ev));
                                    set_error.set(String::new());
                                }
                                disabled=move || loading.get()
                                class="w-full px-4 py-3 border border-slate-300 rounded-lg
                                       focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                            />
                            {move || {
                                let message = error.get();
                                (!message.is_empty()).then(|| view! {
                                    <p class="text-sm text-red-600 mt-1">{message}</p>
                                })
                            }}
                        </div>

                        <button
                            type="submit"
                            disabled=move || loading.get() || user_id.with(|u| u.trim().is_empty())
                            class="w-full py-3 bg-gradient-to-r from-blue-600 to-indigo-600
                                   hover:from-blue-700 hover:to-indigo-700 disabled:opacity-50
                                   text-white rounded-lg font-medium shadow-md transition-all"
                        >
                            {move || if loading.get() { "Adding..." } else { "Add Member" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
