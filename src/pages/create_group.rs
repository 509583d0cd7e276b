//! Create Group Page
//!
//! Single-field form. On success the group store is refreshed before
//! navigating back to the dashboard so the new group is visible immediately.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::state::{GroupState, SessionState};

/// Create-group page component
#[component]
pub fn CreateGroup() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let groups = use_context::<GroupState>().expect("GroupState not found");

    let (name, set_name) = create_signal(String::new());
    let (error, set_error) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);
    let navigate = use_navigate();
    let navigate_back = navigate.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let group_name = name.get();
        if group_name.trim().is_empty() {
            return;
        }

        set_error.set(String::new());
        set_loading.set(true);

        let session = session.clone();
        let groups = groups.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_group(group_name.trim()).await {
                Ok(_group) => {
                    groups.refresh(&session).await;
                    navigate("/dashboard", Default::default());
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
                <button
                    on:click=move |_| navigate_back("/dashboard", Default::default())
                    class="flex items-center text-slate-600 hover:text-slate-900 mb-6 transition-colors"
                >
                    "← Back to Dashboard"
                </button>

                <div class="bg-white rounded-xl border border-slate-200 shadow-lg p-8">
                    <div class="text-center mb-6">
                        <h2 class="text-2xl font-bold text-slate-900">"Create A Group"</h2>
                        <p class="text-slate-500 mt-2">"Start splitting expenses with your friends"</p>
                    </div>

                    <form on:submit=on_submit class="space-y-4">
                        <div>
                            <label class="block text-slate-700 font-medium mb-2">"Group Name"</label>
                            <input
                                type="text"
                                placeholder="Enter group name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                disabled=move || loading.get()
                                class="w-full px-4 py-3 border border-slate-300 rounded-lg
                                       focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                            />
                        </div>

                        {move || {
                            let message = error.get();
                            (!message.is_empty()).then(|| view! {
                                <p class="text-sm text-red-600">{message}</p>
                            })
                        }}

                        <button
                            type="submit"
                            disabled=move || loading.get() || name.with(|n| n.trim().is_empty())
                            class="w-full py-3 bg-gradient-to-r from-blue-600 to-indigo-600
                                   hover:from-blue-700 hover:to-indigo-700 disabled:opacity-50
                                   text-white rounded-lg font-medium shadow-md transition-all"
                        >
                            {move || if loading.get() { "Creating..." } else { "Create Group" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
