//! Dashboard Page
//!
//! Landing view after login: group cards for the current session, an empty
//! state, and entry points to create-group and logout.

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::components::CardSkeleton;
use crate::state::{GroupState, SessionState};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let groups = use_context::<GroupState>().expect("GroupState not found");

    let navigate = use_navigate();
    let session_for_logout = session.clone();
    let handle_logout = move |_| {
        let session = session_for_logout.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            session.logout().await;
            navigate("/login", Default::default());
        });
    };

    let groups_for_list = groups.clone();

    view! {
        <div class="min-h-screen pb-24">
            <div class="max-w-7xl mx-auto p-6">
                // Header with greeting and logout
                <div class="mb-8 flex items-start justify-between">
                    <div>
                        <h1 class="text-3xl font-bold text-slate-900 mb-2">
                            {move || {
                                session.user.get()
                                    .map(|user| format!("Welcome back, {}", user.name))
                                    .unwrap_or_else(|| "Welcome back".to_string())
                            }}
                        </h1>
                        <p class="text-slate-600">"Manage your groups and split expenses with your friends"</p>
                    </div>
                    <button
                        on:click=handle_logout
                        class="flex items-center gap-2 px-4 py-2 text-slate-600 hover:text-red-600
                               hover:bg-red-50 rounded-lg transition-colors"
                    >
                        "Logout"
                    </button>
                </div>

                // Group cards
                {move || {
                    if groups_for_list.loading.get() {
                        return view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                                {(0..4).map(|_| view! { <CardSkeleton /> }).collect_view()}
                            </div>
                        }.into_view();
                    }

                    let list = groups_for_list.groups.get();
                    if list.is_empty() {
                        return view! {
                            <div class="border-dashed border-2 border-slate-300 bg-slate-50 rounded-xl text-center py-12">
                                <h2 class="text-xl text-slate-700 font-semibold">"No Groups Yet"</h2>
                                <p class="text-slate-500 mt-2">"Create your first group to start splitting expenses"</p>
                            </div>
                        }.into_view();
                    }

                    let groups = groups_for_list.clone();
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                            {list.into_iter().map(|group| {
                                let groups = groups.clone();
                                let selected_name = group.name.clone();
                                let creator = group.creator.as_ref()
                                    .map(|c| c.name.clone())
                                    .unwrap_or_else(|| "Unknown".to_string());
                                view! {
                                    <A href=format!("/group/{}", group.id)>
                                        <div
                                            on:click=move |_| groups.select_group(&selected_name)
                                            class="bg-white rounded-xl p-6 shadow-sm border border-slate-200
                                                   hover:border-slate-300 hover:shadow-lg transition-all
                                                   duration-300 cursor-pointer"
                                        >
                                            <h3 class="text-xl font-semibold text-slate-900">{group.name}</h3>
                                            <p class="text-sm text-slate-500 mt-1">"Created by " {creator}</p>
                                        </div>
                                    </A>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }}
            </div>

            // Floating create-group button
            <A href="/create-group">
                <button class="fixed bottom-8 right-8 bg-gradient-to-r from-blue-600 to-indigo-600
                               hover:from-blue-700 hover:to-indigo-700 text-white w-16 h-16 rounded-full
                               shadow-lg hover:shadow-xl transition-all duration-300
                               flex items-center justify-center text-3xl">
                    "+"
                </button>
            </A>
        </div>
    }
}
