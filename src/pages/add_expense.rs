//! Add Expense Page
//!
//! Expense creation form. The payer select is populated from the group's
//! member list; every field is required and validated client-side before any
//! network call. The amount only has to be numeric; zero and negative values
//! are passed through for the backend to judge.

use leptos::*;
use leptos_router::{use_navigate, use_params_map, A};

use crate::api::{self, Member, NewExpense};
use crate::components::Loading;
use crate::state::{FetchGeneration, SessionState};

/// Fixed expense categories
pub const CATEGORIES: [&str; 8] = [
    "Food & Dining",
    "Transportation",
    "Entertainment",
    "Shopping",
    "Utilities",
    "Healthcare",
    "Travel",
    "Other",
];

/// Raw form state as collected from the inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseForm {
    pub paid_by: String,
    pub amount: String,
    pub description: String,
    pub category: String,
}

impl ExpenseForm {
    /// Validate the form and build the wire payload. Any missing field or an
    /// unparsable amount blocks submission.
    pub fn validate(&self) -> Result<NewExpense, &'static str> {
        if self.paid_by.trim().is_empty()
            || self.amount.trim().is_empty()
            || self.description.trim().is_empty()
            || self.category.trim().is_empty()
        {
            return Err("Please fill in all fields");
        }

        let amount = parse_amount(&self.amount).ok_or("Please enter a valid amount")?;

        Ok(NewExpense {
            paid_by: self.paid_by.trim().to_string(),
            amount,
            description: self.description.trim().to_string(),
            category: self.category.clone(),
        })
    }
}

/// Parse a currency amount. Zero and negative values are accepted; only
/// non-numeric or non-finite input is rejected.
pub fn parse_amount(input: &str) -> Option<f64> {
    let value = input.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Add-expense page component
#[component]
pub fn AddExpense() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let params = use_params_map();
    let id = create_memo(move |_| params.with(|p| p.get("id").cloned().unwrap_or_default()));

    let (members, set_members) = create_signal(Vec::<Member>::new());
    let (members_loading, set_members_loading) = create_signal(true);
    let generation = FetchGeneration::new();

    let (paid_by, set_paid_by) = create_signal(String::new());
    let (amount, set_amount) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (category, set_category) = create_signal(String::new());
    let (error, set_error) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    // Member list for the payer select, refetched when the group changes.
    {
        let session = session.clone();
        create_effect(move |_| {
            let group_id = id.get();
            if group_id.is_empty() {
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
                    Ok(data) => set_members.set(data.members),
                    Err(e) => {
                        let _ = session.absorb(e);
                    }
                }
                set_members_loading.set(false);
            });
        });
    }

    let navigate = use_navigate();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = ExpenseForm {
            paid_by: paid_by.get(),
            amount: amount.get(),
            description: description.get(),
            category: category.get(),
        };
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(message) => {
                set_error.set(message.to_string());
                return;
            }
        };

        set_error.set(String::new());
        set_submitting.set(true);

        let group_id = id.get();
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_expense(&group_id, &payload).await {
                Ok(()) => {
                    navigate(&format!("/group/{}", group_id), Default::default());
                    return;
                }
                Err(e) => {
                    set_error.set(session.absorb(e).to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen py-8 px-4">
            <div class="max-w-2xl mx-auto">
                <A
                    href=move || format!("/group/{}", id.get())
                    class="flex items-center gap-2 text-gray-600 hover:text-gray-900 mb-4"
                >
                    "← Back to Group"
                </A>
                <h1 class="text-3xl font-bold text-gray-900">"Add New Expense"</h1>
                <p class="text-gray-500 mt-2 mb-8">"Fill in the details below"</p>

                {move || {
                    if members_loading.get() {
                        return view! { <Loading /> }.into_view();
                    }

                    view! {
                        <form
                            on:submit=on_submit.clone()
                            class="bg-white rounded-xl shadow-sm border border-gray-200 p-8 space-y-6"
                        >
                            // Paid by
                            <div>
                                <label class="block text-sm font-semibold text-gray-700 mb-2">"Paid By"</label>
                                <select
                                    on:change=move |ev| set_paid_by.set(event_target_value(&ev))
                                    prop:value=move || paid_by.get()
                                    class="w-full px-4 py-3 border border-gray-300 rounded-lg
                                           focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                                >
                                    <option value="">"Select paid by"</option>
                                    {members.get().into_iter().map(|member| view! {
                                        <option value=member.id.clone()>{member.name}</option>
                                    }).collect_view()}
                                </select>
                            </div>

                            // Amount
                            <div>
                                <label class="block text-sm font-semibold text-gray-700 mb-2">"Amount"</label>
                                <input
                                    type="number"
                                    step="0.01"
                                    placeholder="0.00"
                                    prop:value=move || amount.get()
                                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                                    class="w-full px-4 py-3 border border-gray-300 rounded-lg
                                           focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                                />
                            </div>

                            // Description
                            <div>
                                <label class="block text-sm font-semibold text-gray-700 mb-2">"Description"</label>
                                <textarea
                                    placeholder="What was this expense for?"
                                    rows="3"
                                    prop:value=move || description.get()
                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                    class="w-full px-4 py-3 border border-gray-300 rounded-lg
                                           focus:ring-2 focus:ring-blue-500 focus:border-transparent resize-none"
                                />
                            </div>

                            // Category
                            <div>
                                <label class="block text-sm font-semibold text-gray-700 mb-2">"Category"</label>
                                <select
                                    on:change=move |ev| set_category.set(event_target_value(&ev))
                                    prop:value=move || category.get()
                                    class="w-full px-4 py-3 border border-gray-300 rounded-lg
                                           focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                                >
                                    <option value="">"Select category"</option>
                                    {CATEGORIES.into_iter().map(|c| view! {
                                        <option value=c>{c}</option>
                                    }).collect_view()}
                                </select>
                            </div>

                            {move || {
                                let message = error.get();
                                (!message.is_empty()).then(|| view! {
                                    <p class="text-sm text-red-600">{message}</p>
                                })
                            }}

                            <div class="flex gap-4 pt-4">
                                <A
                                    href=move || format!("/group/{}", id.get())
                                    class="flex-1 px-6 py-3 border border-gray-300 text-gray-700 rounded-lg
                                           hover:bg-gray-50 font-medium text-center"
                                >
                                    "Cancel"
                                </A>
                                <button
                                    type="submit"
                                    disabled=move || submitting.get()
                                    class="flex-1 px-6 py-3 bg-gradient-to-r from-blue-600 to-indigo-600
                                           hover:from-blue-700 hover:to-indigo-700 disabled:opacity-50
                                           text-white rounded-lg font-medium shadow-lg"
                                >
                                    {move || if submitting.get() { "Creating..." } else { "Create Expense" }}
                                </button>
                            </div>
                        </form>
                    }.into_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ExpenseForm {
        ExpenseForm {
            paid_by: "u1".to_string(),
            amount: "42.50".to_string(),
            description: "Lunch".to_string(),
            category: "Food & Dining".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let payload = filled_form().validate().unwrap();
        assert_eq!(payload.paid_by, "u1");
        assert_eq!(payload.amount, 42.5);
        assert_eq!(payload.description, "Lunch");
        assert_eq!(payload.category, "Food & Dining");
    }

    #[test]
    fn test_missing_field_blocks_submission() {
        let cases: [fn(&mut ExpenseForm); 4] = [
            |f| f.paid_by.clear(),
            |f| f.amount.clear(),
            |f| f.description.clear(),
            |f| f.category.clear(),
        ];
        for clear in cases {
            let mut form = filled_form();
            clear(&mut form);
            assert_eq!(form.validate(), Err("Please fill in all fields"));
        }
    }

    #[test]
    fn test_zero_amount_is_accepted() {
        let mut form = filled_form();
        form.amount = "0.00".to_string();
        assert_eq!(form.validate().unwrap().amount, 0.0);
    }

    #[test]
    fn test_negative_amount_passes_through() {
        let mut form = filled_form();
        form.amount = "-5".to_string();
        assert_eq!(form.validate().unwrap().amount, -5.0);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("42.50"), Some(42.5));
        assert_eq!(parse_amount(" 10 "), Some(10.0));
        assert_eq!(parse_amount("0.00"), Some(0.0));
        assert_eq!(parse_amount("-5"), Some(-5.0));
        assert_eq!(parse_amount("ten"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("inf"), None);
    }
}
