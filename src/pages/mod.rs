//! Pages
//!
//! Top-level page components for each route.

pub mod add_expense;
pub mod add_member;
pub mod balance;
pub mod create_group;
pub mod dashboard;
pub mod group_details;
pub mod login;
pub mod register;

pub use add_expense::AddExpense;
pub use add_member::AddMember;
pub use balance::BalancePage;
pub use create_group::CreateGroup;
pub use dashboard::Dashboard;
pub use group_details::GroupDetails;
pub use login::Login;
pub use register::Register;
