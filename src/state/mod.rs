//! State Management
//!
//! Session and group stores plus the stale-fetch guard.

pub mod fetch;
pub mod groups;
pub mod session;

pub use fetch::FetchGeneration;
pub use groups::{provide_group_state, GroupState};
pub use session::{provide_session_state, SessionState};
