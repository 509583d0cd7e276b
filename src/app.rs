//! App Root Component
//!
//! Main application component with routing and global providers. The session
//! and group stores are constructed here and handed down through context;
//! nothing else owns ambient state.

use leptos::*;
use leptos_router::*;

use crate::components::{provide_flash_state, RequireAuth, SidebarLayout, Toast};
use crate::pages::{
    AddExpense, AddMember, BalancePage, CreateGroup, Dashboard, GroupDetails, Login, Register,
};
use crate::state::{provide_group_state, provide_session_state, SessionState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide session, group, and flash state to all components
    provide_session_state();
    provide_group_state();
    provide_flash_state();

    // Bootstrap: resolve the persisted token into a session. Every route
    // behind the guard waits for this to settle.
    let session = use_context::<SessionState>().expect("SessionState not found");
    spawn_local(async move {
        session.check_auth().await;
    });

    view! {
        <Router>
            <div class="min-h-screen bg-gradient-to-br from-slate-50 to-slate-100 text-slate-900">
                <Routes>
                    <Route path="/login" view=Login />
                    <Route path="/register" view=Register />

                    // Everything below requires a session
                    <Route path="" view=RequireAuth>
                        <Route path="dashboard" view=Dashboard />
                        <Route path="create-group" view=CreateGroup />

                        // Group-scoped pages share the sidebar layout
                        <Route path="group" view=SidebarLayout>
                            <Route path=":id" view=GroupDetails />
                            <Route path=":id/expense" view=AddExpense />
                            <Route path=":id/balance" view=BalancePage />
                            <Route path="add-member/:id" view=AddMember />
                        </Route>

                        <Route path="" view=|| view! { <Redirect path="/dashboard" /> } />
                    </Route>

                    <Route path="/*any" view=NotFound />
                </Routes>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-slate-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/dashboard"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
