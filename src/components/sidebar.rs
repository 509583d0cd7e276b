//! Sidebar Layout
//!
//! Layout for group-scoped pages: a sidebar with the group list and the
//! current group's member panel next to the routed page content. The member
//! panel refetches whenever the group id in the URL changes.

use leptos::*;
use leptos_router::{use_navigate, use_params_map, Outlet};

use crate::api::{self, Member};
use crate::components::ListSkeleton;
use crate::state::{FetchGeneration, GroupState, SessionState};

/// Layout route: sidebar plus the nested page
#[component]
pub fn SidebarLayout() -> impl IntoView {
    view! {
        <div class="flex h-screen overflow-hidden bg-gray-50">
            <Sidebar />
            <main class="flex-1 overflow-y-auto">
                <Outlet />
            </main>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let groups = use_context::<GroupState>().expect("GroupState not found");

    let params = use_params_map();
    let id = create_memo(move |_| params.with(|p| p.get("id").cloned().unwrap_or_default()));

    let (members, set_members) = create_signal(Vec::<Member>::new());
    let (panel_name, set_panel_name) = create_signal(String::new());
    let (members_loading, set_members_loading) = create_signal(false);
    let generation = FetchGeneration::new();

    // Keep the selected group name in sync when a group page is entered
    // directly by URL rather than through a list view.
    {
        let groups = groups.clone();
        create_effect(move |_| {
            let group_id = id.get();
            if let Some(name) = groups.name_of(&group_id) {
                groups.select_group(&name);
            }
        });
    }

    // Member panel fetch, re-run on every group id change. Only the latest
    // generation's response lands.
    {
        let session = session.clone();
        create_effect(move |_| {
            let group_id = id.get();
            if group_id.is_empty() {
                set_members.set(Vec::new());
                set_panel_name.set(String::new());
                return;
            }

            let token = generation.begin();
            set_members_loading.set(true);

            let session = session.clone();
            let generation = generation.clone();
            spawn_local(async move {
                let result = api::group_members(&group_id).await;
                if !generation.is_current(token) {
                    return;
                }
                match result {
                    Ok(data) => {
                        set_members.set(data.members);
                        set_panel_name.set(data.group_name);
                    }
                    Err(e) => {
                        let _ = session.absorb(e);
                    }
                }
                set_members_loading.set(false);
            });
        });
    }

    let navigate = use_navigate();
    let groups_for_list = groups.clone();

    view! {
        <aside class="h-screen w-80 bg-white text-gray-900 flex flex-col border-r border-gray-200">
            <div class="p-6 border-b border-gray-200">
                <h1 class="text-2xl font-bold text-gray-900">"SplitEase"</h1>
                <p class="text-gray-500 text-sm mt-1">"Your groups"</p>
            </div>

            // Group list
            <div class="flex-1 overflow-y-auto p-4 space-y-3">
                {move || {
                    if groups_for_list.loading.get() {
                        return view! { <ListSkeleton count=3 /> }.into_view();
                    }

                    let list = groups_for_list.groups.get();
                    if list.is_empty() {
                        return view! {
                            <p class="text-gray-500 text-sm text-center py-4">"No groups available"</p>
                        }.into_view();
                    }

                    let groups = groups_for_list.clone();
                    let navigate = navigate.clone();
                    list.into_iter().map(|group| {
                        let groups = groups.clone();
                        let navigate = navigate.clone();
                        let current_id = group.id.clone();
                        let nav_id = group.id.clone();
                        let selected_name = group.name.clone();
                        let creator = group.creator.as_ref()
                            .map(|c| c.name.clone())
                            .unwrap_or_else(|| "Unknown".to_string());
                        let card_class = move || {
                            if id.get() == current_id {
                                "bg-blue-50 rounded-lg p-4 cursor-pointer border border-blue-500 shadow-sm"
                            } else {
                                "bg-white rounded-lg p-4 hover:bg-gray-50 cursor-pointer border border-gray-200 shadow-sm"
                            }
                        };

                        view! {
                            <div
                                on:click=move |_| {
                                    groups.select_group(&selected_name);
                                    navigate(&format!("/group/{}", nav_id), Default::default());
                                }
                                class=card_class
                            >
                                <h3 class="font-semibold text-gray-900 mb-1">{group.name}</h3>
                                <div class="mt-3 text-xs text-gray-400">
                                    "Created by " {creator}
                                </div>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>

            // Members panel for the current group
            <div class="border-t border-gray-200 bg-white p-4">
                <div class="flex items-center justify-between mb-3">
                    <h2 class="text-sm font-semibold text-gray-700">
                        {move || {
                            let name = panel_name.get();
                            if name.is_empty() { "Group Members".to_string() } else { name }
                        }}
                    </h2>
                    <span class="text-xs text-gray-500 bg-gray-100 px-2 py-1 rounded-full">
                        {move || members.get().len()}
                    </span>
                </div>
                <div class="space-y-2 max-h-40 overflow-y-auto">
                    {move || {
                        if members_loading.get() {
                            return view! {
                                <p class="text-gray-400 text-xs text-center py-2">"Loading members..."</p>
                            }.into_view();
                        }

                        let list = members.get();
                        if list.is_empty() {
                            return view! {
                                <p class="text-gray-400 text-xs text-center py-2">"No members yet"</p>
                            }.into_view();
                        }

                        list.into_iter().map(|member| {
                            let initial = member.name.chars().next()
                                .map(|c| c.to_uppercase().to_string())
                                .unwrap_or_default();
                            view! {
                                <div class="flex items-center gap-3 p-2 rounded-lg hover:bg-gray-50 transition-colors">
                                    <div class="w-8 h-8 rounded-full bg-gradient-to-br from-blue-500 to-purple-600
                                                flex items-center justify-center text-xs font-bold text-white shadow-sm">
                                        {initial}
                                    </div>
                                    <div class="flex-1 min-w-0">
                                        <p class="text-sm text-gray-900 truncate font-medium">{member.name}</p>
                                        <p class="text-xs text-gray-500 truncate">{member.email}</p>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </div>
        </aside>
    }
}
