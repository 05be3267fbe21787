//! Domain models
//!
//! - [`menu_item`] - Digital menu entries and their CRUD payloads
//! - [`aggregator`] - Delivery aggregator identities and landing-page links

pub mod aggregator;
pub mod menu_item;

pub use aggregator::{AggregatorId, LandingLink, ParseAggregatorError};
pub use menu_item::{MenuCategory, MenuItem, MenuItemCreate, MenuItemUpdate, SortOrderEntry};
