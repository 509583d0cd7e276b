//! Group Data Store
//!
//! Cached group list for the current session plus the display name of the
//! most recently selected group. Refreshed wholesale; a failed refresh
//! leaves the previous list untouched.

use leptos::*;

use crate::api::{self, ApiError, Group};
use crate::state::session::SessionState;

/// Group list state provided to all authenticated components
#[derive(Clone)]
pub struct GroupState {
    /// Groups visible to the current session
    pub groups: RwSignal<Vec<Group>>,
    /// Display name of the most recently selected group, set by list and
    /// detail views before navigation to avoid a fetch purely for a title
    pub group_name: RwSignal<String>,
    /// True while a refresh is in flight
    pub loading: RwSignal<bool>,
}

/// Provide group state to the component tree
pub fn provide_group_state() {
    let state = GroupState {
        groups: create_rw_signal(Vec::new()),
        group_name: create_rw_signal(String::new()),
        loading: create_rw_signal(true),
    };
    provide_context(state);
}

impl GroupState {
    /// Fetch the full group list and replace the cached copy atomically.
    /// The loading flag clears on every exit path; failures are logged and
    /// the previous list survives, except a 401 which expires the session.
    pub async fn refresh(&self, session: &SessionState) {
        self.loading.set(true);
        match api::groups().await {
            Ok(groups) => self.groups.set(groups),
            Err(ApiError::Unauthorized) => session.expire(),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch groups: {:?}", e).into());
            }
        }
        self.loading.set(false);
    }

    /// Record the display name of the group being navigated to.
    pub fn select_group(&self, name: &str) {
        self.group_name.set(name.to_string());
    }

    /// Look up a cached group's name by id, for views entered directly by
    /// URL where no list view recorded a selection.
    pub fn name_of(&self, group_id: &str) -> Option<String> {
        self.groups
            .get()
            .iter()
            .find(|group| group.id == group_id)
            .map(|group| group.name.clone())
    }
}
