//! Shared domain types for the AJDEL storefront
//!
//! Models and common types used by the server and any future clients.
//! This crate is pure data: serde-serializable structs and enums, no I/O.
//!
//! # Modules
//!
//! - [`types`] - Language, localized text, timestamps
//! - [`models`] - Menu items, delivery aggregators, landing-page links

pub mod models;
pub mod types;

// Re-export commonly used types
pub use models::{
    AggregatorId, LandingLink, MenuCategory, MenuItem, MenuItemCreate, MenuItemUpdate,
    SortOrderEntry,
};
pub use types::{Language, LocalizedText, Timestamp};
