//! HTTP API Client
//!
//! Functions for communicating with the SplitEase REST API. One function per
//! endpoint; every authenticated request carries the persisted bearer token,
//! and any 401 clears that token so the session guard redirects to login.

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::api::types::*;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Local storage key for the backend base URL override
const API_URL_KEY: &str = "splitease_api_url";

/// Local storage key for the session bearer token
const TOKEN_KEY: &str = "splitease_token";

/// Errors surfaced by the API client.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure, no usable response. The detail is for the console;
    /// users only ever see the generic message.
    #[error("Network error")]
    Network(String),
    /// A protected endpoint rejected the bearer token.
    #[error("Session expired")]
    Unauthorized,
    /// The server answered with a non-success status and a message.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("Unexpected response from server")]
    Decode(String),
}

// ============ Configuration & Token Storage ============

// Storage only exists in the browser; on native targets (unit tests) there
// is no persistence, so the token helpers become no-ops.
fn local_storage() -> Option<web_sys::Storage> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Get the API base URL. Reads the local storage override first and falls
/// back to the default; setting the override is a deployment concern, done
/// from the browser console.
pub fn get_api_base() -> String {
    let url = local_storage()
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base(&url)
}

/// Normalize a base URL: remove trailing slashes
pub fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Read the persisted session token, if any.
pub fn get_token() -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

/// Persist the session token.
pub fn set_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Remove the persisted session token.
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

// ============ Request Plumbing ============

/// Attach the bearer token to a request, when one is persisted.
fn bearer(builder: RequestBuilder) -> RequestBuilder {
    match get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Send a bodyless request to a protected endpoint. A 401 clears the
/// persisted token and maps to `ApiError::Unauthorized`.
async fn send_authed(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = bearer(builder)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response)
}

/// Send a JSON body to a protected endpoint, with the same 401 handling.
async fn send_authed_json<B: serde::Serialize>(
    builder: RequestBuilder,
    body: &B,
) -> Result<Response, ApiError> {
    let response = bearer(builder)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response)
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.status() == 401 {
        clear_token();
        return Err(ApiError::Unauthorized);
    }
    Ok(response)
}

/// Decode the server's `{message}` error body, with a fallback.
async fn server_error(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<MessageResponse>()
        .await
        .map(|body| body.message)
        .unwrap_or_default();
    let message = if message.is_empty() {
        "Unknown error".to_string()
    } else {
        message
    };
    ApiError::Server { status, message }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

// ============ Auth Endpoints ============

/// Log in with name and email. On success the caller persists the token.
pub async fn login(name: &str, email: &str) -> Result<LoginResponse, ApiError> {
    let response = Request::post(&format!("{}/auth/login", get_api_base()))
        .json(&Credentials {
            name: name.to_string(),
            email: email.to_string(),
        })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(server_error(response).await);
    }
    decode(response).await
}

/// Register a new account. Does not establish a session; returns the
/// server's message for display.
pub async fn register(name: &str, email: &str) -> Result<String, ApiError> {
    let response = Request::post(&format!("{}/auth/register", get_api_base()))
        .json(&Credentials {
            name: name.to_string(),
            email: email.to_string(),
        })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(server_error(response).await);
    }
    let body: MessageResponse = decode(response).await.unwrap_or_default();
    Ok(body.message)
}

/// Fetch the current user for the persisted token.
pub async fn me() -> Result<User, ApiError> {
    let response = send_authed(Request::get(&format!("{}/api/me", get_api_base()))).await?;
    if !response.ok() {
        return Err(server_error(response).await);
    }
    let body: MeResponse = decode(response).await?;
    Ok(body.user)
}

/// Best-effort logout notification. The response is ignored; the caller
/// clears local session state regardless.
pub async fn logout() {
    let _ = bearer(Request::post(&format!("{}/auth/logout", get_api_base())))
        .send()
        .await;
}

// ============ Group Endpoints ============

/// Fetch the full group list for the current session.
pub async fn groups() -> Result<Vec<Group>, ApiError> {
    let response = send_authed(Request::get(&format!("{}/groups", get_api_base()))).await?;
    if !response.ok() {
        return Err(server_error(response).await);
    }
    let body: GroupListResponse = decode(response).await?;
    Ok(body.groups)
}

/// Create a group owned by the current user.
pub async fn create_group(name: &str) -> Result<Group, ApiError> {
    let response = send_authed_json(
        Request::post(&format!("{}/create-group", get_api_base())),
        &CreateGroupRequest {
            name: name.to_string(),
        },
    )
    .await?;

    if !response.ok() {
        return Err(server_error(response).await);
    }
    let body: CreateGroupResponse = decode(response).await?;
    Ok(body.group)
}

/// Fetch the members of a group, along with its display name.
pub async fn group_members(group_id: &str) -> Result<MembersResponse, ApiError> {
    let response = send_authed(Request::get(&format!(
        "{}/groups/{}/members",
        get_api_base(),
        group_id
    )))
    .await?;

    if !response.ok() {
        return Err(server_error(response).await);
    }
    decode(response).await
}

/// Add an existing user to a group by id.
pub async fn add_member(group_id: &str, user_id: &str) -> Result<(), ApiError> {
    let response = send_authed(Request::post(&format!(
        "{}/groups/{}/users/{}",
        get_api_base(),
        group_id,
        user_id
    )))
    .await?;

    if !response.ok() {
        return Err(server_error(response).await);
    }
    Ok(())
}

// ============ Expense Endpoints ============

/// Fetch the expenses recorded in a group.
pub async fn group_expenses(group_id: &str) -> Result<Vec<Expense>, ApiError> {
    let response = send_authed(Request::get(&format!(
        "{}/group/{}/expenses",
        get_api_base(),
        group_id
    )))
    .await?;

    if !response.ok() {
        return Err(server_error(response).await);
    }
    let body: ExpensesResponse = decode(response).await?;
    if body.success {
        Ok(body.expenses)
    } else {
        Ok(Vec::new())
    }
}

/// Record a new expense in a group.
pub async fn create_expense(group_id: &str, expense: &NewExpense) -> Result<(), ApiError> {
    let response = send_authed_json(
        Request::post(&format!(
            "{}/groups/{}/create-expense",
            get_api_base(),
            group_id
        )),
        expense,
    )
    .await?;

    if !response.ok() {
        return Err(server_error(response).await);
    }
    Ok(())
}

/// Fetch the current user's balance within a group.
pub async fn group_balance(group_id: &str) -> Result<Balance, ApiError> {
    let response = send_authed(Request::get(&format!(
        "{}/groups/{}/balance",
        get_api_base(),
        group_id
    )))
    .await?;

    if !response.ok() {
        return Err(server_error(response).await);
    }
    decode(response).await
}

/// Delete every expense in a group. Returns the server's message.
pub async fn clear_expenses(group_id: &str) -> Result<String, ApiError> {
    let response = send_authed(Request::delete(&format!(
        "{}/group/{}/expenses",
        get_api_base(),
        group_id
    )))
    .await?;

    if !response.ok() {
        return Err(server_error(response).await);
    }
    let body: MessageResponse = decode(response).await.unwrap_or_default();
    Ok(body.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_strips_trailing_slashes() {
        assert_eq!(normalize_base("http://localhost:3000/"), "http://localhost:3000");
        assert_eq!(normalize_base("https://api.example.com//"), "https://api.example.com");
        assert_eq!(normalize_base("http://localhost:3000"), "http://localhost:3000");
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(ApiError::Network("refused".to_string()).to_string(), "Network error");
        assert_eq!(ApiError::Unauthorized.to_string(), "Session expired");
        assert_eq!(
            ApiError::Server {
                status: 400,
                message: "User already in group".to_string(),
            }
            .to_string(),
            "User already in group"
        );
    }
}
