//! API Layer
//!
//! HTTP client and wire types for the SplitEase backend.

pub mod client;
pub mod types;

pub use client::*;
pub use types::*;
