//! Confirm Modal
//!
//! Blocking confirmation dialog for destructive actions.

use leptos::*;

/// Modal with cancel/confirm actions. Rendered only while `visible`; the
/// buttons are disabled while the confirmed action is in flight.
#[component]
pub fn ConfirmModal(
    #[prop(into)]
    title: String,
    #[prop(into)]
    body: String,
    #[prop(into)]
    confirm_label: String,
    #[prop(into)]
    busy_label: String,
    #[prop(into)]
    visible: Signal<bool>,
    #[prop(into)]
    busy: Signal<bool>,
    #[prop(into)]
    on_confirm: Callback<()>,
    #[prop(into)]
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        {move || {
            if !visible.get() {
                return view! {}.into_view();
            }

            view! {
                <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50">
                    <div class="bg-white rounded-lg p-6 max-w-md w-full mx-4 shadow-xl">
                        <h3 class="text-xl font-semibold text-gray-900 mb-4">{title.clone()}</h3>
                        <p class="text-gray-600 mb-6">{body.clone()}</p>
                        <div class="flex gap-3 justify-end">
                            <button
                                on:click=move |_| on_cancel.call(())
                                disabled=move || busy.get()
                                class="px-4 py-2 text-gray-700 hover:bg-gray-100 rounded-lg transition-colors"
                            >
                                "Cancel"
                            </button>
                            <button
                                on:click=move |_| on_confirm.call(())
                                disabled=move || busy.get()
                                class="px-4 py-2 bg-red-500 hover:bg-red-600 text-white rounded-lg
                                       transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                            >
                                {
                                    let confirm_label = confirm_label.clone();
                                    let busy_label = busy_label.clone();
                                    move || if busy.get() { busy_label.clone() } else { confirm_label.clone() }
                                }
                            </button>
                        </div>
                    </div>
                </div>
            }.into_view()
        }}
    }
}
