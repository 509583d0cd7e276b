//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Centered loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton loader for group cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-6 shadow-sm animate-pulse">
            <div class="h-6 bg-slate-200 rounded w-3/4 mb-2" />
            <div class="h-4 bg-slate-200 rounded w-1/2" />
        </div>
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-slate-200 rounded h-12" />
            }).collect_view()}
        </div>
    }
}
