//! Session Store
//!
//! Reactive session state using Leptos signals: the current user, a loading
//! flag for the bootstrap check, and the login/register/logout operations.
//! The bearer token itself lives in local storage (see `api::client`) so it
//! is read fresh by every request.

use leptos::*;

use crate::api::{self, ApiError, User};

/// Session state provided to all components
#[derive(Clone)]
pub struct SessionState {
    /// Current user; `None` means unauthenticated
    pub user: RwSignal<Option<User>>,
    /// True until the bootstrap auth check resolves
    pub loading: RwSignal<bool>,
}

/// Outcome of a login or register attempt. Network failures never escape as
/// errors; they become a failed outcome with a generic message.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: String,
}

impl AuthOutcome {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Provide session state to the component tree
pub fn provide_session_state() {
    let state = SessionState {
        user: create_rw_signal(None),
        loading: create_rw_signal(true),
    };
    provide_context(state);
}

impl SessionState {
    /// Bootstrap check: resolve the persisted token into a user. Without a
    /// token the session is unauthenticated immediately, no network call.
    /// Any failure clears the token. The loading flag clears on every path.
    pub async fn check_auth(&self) {
        if self.settle_without_token() {
            return;
        }

        match api::me().await {
            Ok(user) => self.user.set(Some(user)),
            Err(e) => {
                web_sys::console::error_1(&format!("Auth check failed: {:?}", e).into());
                api::clear_token();
                self.user.set(None);
            }
        }
        self.loading.set(false);
    }

    /// Synchronous half of the bootstrap: without a persisted token the
    /// session settles as unauthenticated immediately. Returns true when it
    /// settled, i.e. no network call is needed.
    fn settle_without_token(&self) -> bool {
        if api::get_token().is_some() {
            return false;
        }
        self.user.set(None);
        self.loading.set(false);
        true
    }

    /// Log in. On success the returned token is persisted and the user set.
    pub async fn login(&self, name: &str, email: &str) -> AuthOutcome {
        match api::login(name, email).await {
            Ok(response) => {
                api::set_token(&response.token);
                self.user.set(Some(response.user));
                AuthOutcome::ok("")
            }
            Err(e) => AuthOutcome::failed(e.to_string()),
        }
    }

    /// Register a new account. Does not establish a session; the success
    /// message is for display on the login page.
    pub async fn register(&self, name: &str, email: &str) -> AuthOutcome {
        match api::register(name, email).await {
            Ok(message) => AuthOutcome::ok(if message.is_empty() {
                "Registration successful! Please login.".to_string()
            } else {
                message
            }),
            Err(e) => AuthOutcome::failed(e.to_string()),
        }
    }

    /// Log out. The server notification is best-effort; the local teardown
    /// in `expire` runs unconditionally.
    pub async fn logout(&self) {
        api::logout().await;
        self.expire();
    }

    /// Centralized session invalidation: clears the token and user so the
    /// route guard redirects to login. Every page funnels
    /// `ApiError::Unauthorized` here instead of handling 401s itself.
    pub fn expire(&self) {
        api::clear_token();
        self.user.set(None);
    }

    /// Route an API error: expiry for 401s, console for everything else.
    /// Returns the error so callers can still surface a message.
    pub fn absorb(&self, error: ApiError) -> ApiError {
        match &error {
            ApiError::Unauthorized => self.expire(),
            other => {
                web_sys::console::error_1(&format!("API request failed: {:?}", other).into());
            }
        }
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticated_state() -> SessionState {
        SessionState {
            user: create_rw_signal(Some(User {
                id: "u1".to_string(),
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
            })),
            loading: create_rw_signal(false),
        }
    }

    #[test]
    fn test_auth_outcome_constructors() {
        let ok = AuthOutcome::ok("welcome");
        assert!(ok.success);
        assert_eq!(ok.message, "welcome");

        let failed = AuthOutcome::failed("Invalid credentials");
        assert!(!failed.success);
        assert_eq!(failed.message, "Invalid credentials");
    }

    #[test]
    fn test_expire_clears_user() {
        let runtime = create_runtime();
        let state = authenticated_state();
        state.expire();
        assert!(state.user.get_untracked().is_none());
        runtime.dispose();
    }

    #[test]
    fn test_absorb_unauthorized_expires_session() {
        let runtime = create_runtime();
        let state = authenticated_state();
        let returned = state.absorb(ApiError::Unauthorized);
        assert_eq!(returned, ApiError::Unauthorized);
        assert!(state.user.get_untracked().is_none());
        runtime.dispose();
    }

    #[test]
    fn test_check_auth_without_token_settles_unauthenticated() {
        let runtime = create_runtime();
        let state = SessionState {
            user: create_rw_signal(None),
            loading: create_rw_signal(true),
        };
        // No persisted token: the session settles without issuing a request.
        assert!(state.settle_without_token());
        assert!(state.user.get_untracked().is_none());
        assert!(!state.loading.get_untracked());
        runtime.dispose();
    }
}
