//! Balance Page
//!
//! Displays the server-computed per-user balance for a group and offers a
//! clear-expenses action behind a blocking confirmation. The sign of the net
//! balance decides the wording: settled up, owed, or owing.

use leptos::*;
use leptos_router::{use_params_map, A};

use crate::api::{self, format_amount, Balance};
use crate::components::{ConfirmModal, FlashState, Loading};
use crate::state::{FetchGeneration, SessionState};

/// Net-balance classification for display.
#[derive(Clone, Debug, PartialEq)]
pub enum Settlement {
    /// Nothing owed either way
    SettledUp,
    /// Others owe the current user this much
    Owed(f64),
    /// The current user owes this much
    Owes(f64),
}

impl Settlement {
    pub fn from_net(net: f64) -> Self {
        if net > 0.0 {
            Settlement::Owed(net)
        } else if net < 0.0 {
            Settlement::Owes(-net)
        } else {
            Settlement::SettledUp
        }
    }

    /// Explanatory line under the numbers.
    pub fn message(&self) -> String {
        match self {
            Settlement::SettledUp => "You're all settled up!".to_string(),
            Settlement::Owed(amount) => format!("You are owed {}", format_amount(*amount)),
            Settlement::Owes(amount) => format!("You owe {}", format_amount(*amount)),
        }
    }

    /// Headline figure: positive balances carry an explicit plus sign.
    pub fn headline(&self) -> String {
        match self {
            Settlement::SettledUp => format_amount(0.0),
            Settlement::Owed(amount) => format!("+{}", format_amount(*amount)),
            Settlement::Owes(amount) => format_amount(*amount),
        }
    }
}

/// Balance page component
#[component]
pub fn BalancePage() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let flash = use_context::<FlashState>().expect("FlashState not found");

    let params = use_params_map();
    let id = create_memo(move |_| params.with(|p| p.get("id").cloned().unwrap_or_default()));

    let (balance, set_balance) = create_signal(None::<Balance>);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (show_confirm, set_show_confirm) = create_signal(false);
    let (deleting, set_deleting) = create_signal(false);
    let generation = FetchGeneration::new();

    // Balance fetch, shared between the id-change effect and the
    // post-clear refetch.
    let load = {
        let session = session.clone();
        Callback::new(move |group_id: String| {
            if group_id.is_empty() {
                return;
            }

            let token = generation.begin();
            set_loading.set(true);
            set_error.set(None);

            let session = session.clone();
            let generation = generation.clone();
            spawn_local(async move {
                let result = api::group_balance(&group_id).await;
                if !generation.is_current(token) {
                    return;
                }
                match result {
                    Ok(b) => set_balance.set(Some(b)),
                    Err(e) => set_error.set(Some(session.absorb(e).to_string())),
                }
                set_loading.set(false);
            });
        })
    };

    create_effect(move |_| load.call(id.get()));

    let confirm_clear = {
        let session = session.clone();
        let flash = flash.clone();
        Callback::new(move |(): ()| {
            set_deleting.set(true);

            let group_id = id.get_untracked();
            let session = session.clone();
            let flash = flash.clone();
            spawn_local(async move {
                match api::clear_expenses(&group_id).await {
                    Ok(message) => {
                        if message.is_empty() {
                            flash.show_success("Expenses cleared successfully!");
                        } else {
                            flash.show_success(&message);
                        }
                        set_show_confirm.set(false);
                        load.call(group_id);
                    }
                    Err(e) => {
                        flash.show_error(&session.absorb(e).to_string());
                    }
                }
                set_deleting.set(false);
            });
        })
    };

    view! {
        <div class="p-6 max-w-2xl">
            <A
                href=move || format!("/group/{}", id.get())
                class="flex items-center gap-2 text-gray-600 hover:text-gray-900 mb-6"
            >
                "← Back"
            </A>
            <h1 class="text-2xl font-semibold text-gray-800 mb-6">"Group Balance"</h1>

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                if let Some(message) = error.get() {
                    return view! {
                        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded">
                            {message}
                        </div>
                    }.into_view();
                }

                let balance = balance.get().unwrap_or_default();
                view! { <BalanceCard balance=balance /> }.into_view()
            }}

            // Clear-expenses action
            <div class="fixed bottom-6 right-6 flex gap-3">
                <button
                    on:click=move |_| set_show_confirm.set(true)
                    class="bg-red-500 hover:bg-red-600 text-white px-5 py-3 rounded-full shadow-lg
                           font-medium transition-colors"
                >
                    "Clear Expenses"
                </button>
            </div>

            <ConfirmModal
                title="Clear All Expenses?"
                body="This will permanently delete all expenses in this group. This action cannot be undone."
                confirm_label="Yes, Clear All"
                busy_label="Deleting..."
                visible=show_confirm
                busy=deleting
                on_confirm=confirm_clear
                on_cancel=move |_| set_show_confirm.set(false)
            />
        </div>
    }
}

#[component]
fn BalanceCard(balance: Balance) -> impl IntoView {
    let settlement = Settlement::from_net(balance.net_balance);
    let headline_class = match settlement {
        Settlement::SettledUp => "text-xl font-semibold text-gray-900",
        Settlement::Owed(_) => "text-xl font-semibold text-green-600",
        Settlement::Owes(_) => "text-xl font-semibold text-red-600",
    };
    let message_class = match settlement {
        Settlement::SettledUp => "text-sm text-gray-500 text-center",
        Settlement::Owed(_) => "text-sm text-green-700 bg-green-50 px-4 py-2 rounded",
        Settlement::Owes(_) => "text-sm text-red-700 bg-red-50 px-4 py-2 rounded",
    };

    view! {
        <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-4">
            <div class="flex justify-between items-center pb-4 border-b border-gray-100">
                <span class="text-gray-600">"You Paid"</span>
                <span class="text-lg font-medium text-gray-900">
                    {format_amount(balance.total_paid)}
                </span>
            </div>

            <div class="flex justify-between items-center pb-4 border-b border-gray-100">
                <span class="text-gray-600">"Your Share"</span>
                <span class="text-lg font-medium text-gray-900">
                    {format_amount(balance.total_share)}
                </span>
            </div>

            <div class="flex justify-between items-center pt-2">
                <span class="text-gray-700 font-medium">"Net Balance"</span>
                <span class=headline_class>{settlement.headline()}</span>
            </div>

            <div class="pt-4">
                <p class=message_class>{settlement.message()}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_net_balance_is_settled() {
        let settlement = Settlement::from_net(0.0);
        assert_eq!(settlement, Settlement::SettledUp);
        assert_eq!(settlement.message(), "You're all settled up!");
        assert_eq!(settlement.headline(), "₹0.00");
    }

    #[test]
    fn test_negative_net_balance_owes() {
        let settlement = Settlement::from_net(-15.0);
        assert_eq!(settlement, Settlement::Owes(15.0));
        assert_eq!(settlement.message(), "You owe ₹15.00");
        assert_eq!(settlement.headline(), "₹15.00");
    }

    #[test]
    fn test_positive_net_balance_is_owed() {
        let settlement = Settlement::from_net(15.0);
        assert_eq!(settlement, Settlement::Owed(15.0));
        assert_eq!(settlement.message(), "You are owed ₹15.00");
        assert_eq!(settlement.headline(), "+₹15.00");
    }

    #[test]
    fn test_defaulted_balance_renders_settled() {
        let balance = Balance::default();
        assert_eq!(Settlement::from_net(balance.net_balance), Settlement::SettledUp);
    }
}
