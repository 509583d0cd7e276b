//! Route Guard
//!
//! Gates the authenticated route tree on session state: a loading
//! placeholder while the bootstrap check runs, a redirect to login when
//! unauthenticated, the nested routes otherwise. Also kicks off the one
//! initial group list fetch once a user is present.

use leptos::*;
use leptos_router::{Outlet, Redirect};

use crate::components::Loading;
use crate::state::{GroupState, SessionState};

/// Layout route wrapping everything that requires a session
#[component]
pub fn RequireAuth() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let groups = use_context::<GroupState>().expect("GroupState not found");

    // Initial group list fetch, once per established session.
    let fetched = create_rw_signal(false);
    {
        let session = session.clone();
        create_effect(move |_| {
            if session.user.with(|user| user.is_some()) && !fetched.get_untracked() {
                fetched.set(true);
                let session = session.clone();
                let groups = groups.clone();
                spawn_local(async move {
                    groups.refresh(&session).await;
                });
            }
        });
    }

    view! {
        {move || {
            if session.loading.get() {
                view! {
                    <div class="min-h-screen flex items-center justify-center">
                        <Loading />
                    </div>
                }.into_view()
            } else if session.user.with(|user| user.is_some()) {
                view! { <Outlet /> }.into_view()
            } else {
                view! { <Redirect path="/login" /> }.into_view()
            }
        }}
    }
}
