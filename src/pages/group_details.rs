//! Group Details Page
//!
//! Expense list for one group, refetched whenever the group id in the URL
//! changes. Shows the expense count (including an explicit empty state) and
//! action buttons for add-member, new-expense, and balance.

use leptos::*;
use leptos_router::{use_params_map, A};

use crate::api::{self, format_amount, format_date, Expense};
use crate::components::Loading;
use crate::state::{FetchGeneration, GroupState, SessionState};

/// Group details page component
#[component]
pub fn GroupDetails() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let groups = use_context::<GroupState>().expect("GroupState not found");

    let params = use_params_map();
    let id = create_memo(move |_| params.with(|p| p.get("id").cloned().unwrap_or_default()));

    let (expenses, set_expenses) = create_signal(Vec::<Expense>::new());
    let (loading, set_loading) = create_signal(true);
    let generation = FetchGeneration::new();

    {
        let session = session.clone();
        create_effect(move |_| {
            let group_id = id.get();
            if group_id.is_empty() {
                return;
            }

            let token = generation.begin();
            set_loading.set(true);

            let session = session.clone();
            let generation = generation.clone();
            spawn_local(async move {
                let result = api::group_expenses(&group_id).await;
                if !generation.is_current(token) {
                    return;
                }
                match result {
                    Ok(list) => set_expenses.set(list),
                    Err(e) => {
                        let _ = session.absorb(e);
                    }
                }
                set_loading.set(false);
            });
        });
    }

    let title = {
        let groups = groups.clone();
        move || {
            let name = groups.group_name.get();
            if name.is_empty() {
                groups.name_of(&id.get()).unwrap_or_else(|| "Group".to_string())
            } else {
                name
            }
        }
    };

    view! {
        <div class="min-h-screen p-4">
            <div class="max-w-3xl mx-auto">
                <A href="/dashboard" class="flex items-center gap-2 text-gray-600 hover:text-gray-900 mb-6">
                    "← Back"
                </A>

                // Group header with expense count
                <div class="bg-white rounded-lg p-6 mb-6 shadow-sm">
                    <h1 class="text-2xl font-bold text-gray-900">{title}</h1>
                    <p class="text-gray-500 text-sm mt-1">
                        {move || {
                            let count = expenses.with(|e| e.len());
                            format!("{} {}", count, if count == 1 { "expense" } else { "expenses" })
                        }}
                    </p>
                </div>

                <h2 class="text-lg font-semibold mb-4">"Expenses"</h2>

                {move || {
                    if loading.get() {
                        return view! { <Loading /> }.into_view();
                    }

                    let list = expenses.get();
                    if list.is_empty() {
                        return view! {
                            <div class="bg-white rounded-lg p-12 text-center">
                                <p class="text-gray-500">"No expenses yet"</p>
                            </div>
                        }.into_view();
                    }

                    view! {
                        <div class="space-y-3 mb-24">
                            {list.into_iter().map(|expense| view! { <ExpenseRow expense=expense /> }).collect_view()}
                        </div>
                    }.into_view()
                }}
            </div>

            // Action buttons
            <div class="fixed bottom-6 right-6 flex gap-3">
                <A href=move || format!("/group/add-member/{}", id.get())>
                    <button class="bg-blue-600 hover:bg-blue-700 text-white px-5 py-3 rounded-full
                                   shadow-lg font-medium">
                        "Add Member"
                    </button>
                </A>
                <A href=move || format!("/group/{}/expense", id.get())>
                    <button class="bg-green-600 hover:bg-green-700 text-white px-5 py-3 rounded-full
                                   shadow-lg font-medium">
                        "New Expense"
                    </button>
                </A>
                <A href=move || format!("/group/{}/balance", id.get())>
                    <button class="bg-green-600 hover:bg-green-700 text-white px-5 py-3 rounded-full
                                   shadow-lg font-medium">
                        "Balance"
                    </button>
                </A>
            </div>
        </div>
    }
}

#[component]
fn ExpenseRow(expense: Expense) -> impl IntoView {
    let payer = expense
        .payer
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    view! {
        <div class="bg-white rounded-lg p-4 shadow-sm">
            <div class="flex justify-between items-start">
                <div>
                    <h3 class="font-semibold text-gray-900">{expense.description}</h3>
                    <div class="text-sm text-gray-500 mt-1">
                        {payer} " • " {format_date(&expense.created_at)}
                    </div>
                </div>
                <div class="text-right">
                    <div class="text-xl font-bold text-gray-900">
                        {format_amount(expense.amount)}
                    </div>
                    {expense.split_type.map(|split| view! {
                        <div class="text-xs text-gray-500">{split}</div>
                    })}
                </div>
            </div>
        </div>
    }
}
