//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod guard;
pub mod loading;
pub mod modal;
pub mod sidebar;
pub mod toast;

pub use guard::RequireAuth;
pub use loading::{CardSkeleton, ListSkeleton, Loading};
pub use modal::ConfirmModal;
pub use sidebar::SidebarLayout;
pub use toast::{provide_flash_state, FlashState, Toast};
