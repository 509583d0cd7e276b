//! Wire Types
//!
//! Request and response bodies for the SplitEase REST API, plus the display
//! helpers shared by the expense and balance views. Optional fields are
//! defaulted rather than treated as errors.

use serde::{Deserialize, Serialize};

/// Authenticated user, as returned by login and `/api/me`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A group visible to the current session.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub creator: Option<Creator>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Creator {
    pub id: String,
    pub name: String,
}

/// A member of a group, fetched per group on demand.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A recorded expense within a group.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Expense {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub payer: Option<Payer>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "splitType")]
    pub split_type: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Payer {
    pub id: String,
    pub name: String,
}

/// Per-user balance within a group, computed server-side.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Balance {
    #[serde(default, rename = "totalPaid")]
    pub total_paid: f64,
    #[serde(default, rename = "totalShare")]
    pub total_share: f64,
    #[serde(default, rename = "netBalance")]
    pub net_balance: f64,
}

// ============ Request Bodies ============

#[derive(Debug, Serialize)]
pub struct Credentials {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct CreateGroupRequest {
    pub name: String,
}

/// Payload for `POST /groups/:id/create-expense`. The amount is numeric on
/// the wire even though the form collects it as a string.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    #[serde(rename = "paidBy")]
    pub paid_by: String,
    pub amount: f64,
    pub description: String,
    pub category: String,
}

// ============ Response Bodies ============

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

#[derive(Debug, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GroupListResponse {
    #[serde(default)]
    pub groups: Vec<Group>,
}

#[derive(Debug, Deserialize)]
pub struct CreateGroupResponse {
    pub group: Group,
}

#[derive(Debug, Deserialize)]
pub struct MembersResponse {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default, rename = "groupName")]
    pub group_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ExpensesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

// ============ Display Helpers ============

/// Format a currency amount for display.
pub fn format_amount(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

/// Format an RFC 3339 timestamp as "Jan 5, 2024". Falls back to the raw
/// string when the backend sends something unparsable.
pub fn format_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense_wire_names() {
        let expense = NewExpense {
            paid_by: "u1".to_string(),
            amount: 42.5,
            description: "Lunch".to_string(),
            category: "Food & Dining".to_string(),
        };
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "paidBy": "u1",
                "amount": 42.5,
                "description": "Lunch",
                "category": "Food & Dining",
            })
        );
    }

    #[test]
    fn test_expense_defaults_optional_fields() {
        let expense: Expense =
            serde_json::from_str(r#"{"id": "e1", "description": "Taxi"}"#).unwrap();
        assert_eq!(expense.amount, 0.0);
        assert!(expense.payer.is_none());
        assert!(expense.split_type.is_none());
        assert_eq!(expense.created_at, "");
    }

    #[test]
    fn test_balance_defaults_missing_fields() {
        let balance: Balance = serde_json::from_str(r#"{"totalPaid": 20.0}"#).unwrap();
        assert_eq!(balance.total_paid, 20.0);
        assert_eq!(balance.total_share, 0.0);
        assert_eq!(balance.net_balance, 0.0);
    }

    #[test]
    fn test_expenses_response_tolerates_empty_body() {
        let resp: ExpensesResponse = serde_json::from_str("{}").unwrap();
        assert!(!resp.success);
        assert!(resp.expenses.is_empty());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(15.0), "₹15.00");
        assert_eq!(format_amount(42.5), "₹42.50");
        assert_eq!(format_amount(0.0), "₹0.00");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-05T10:30:00Z"), "Jan 5, 2024");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
