//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::AggregatorId;
use crate::types::{LocalizedText, Timestamp};

/// Menu item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Cake,
    Drink,
    Box,
    Other,
}

impl Default for MenuCategory {
    fn default() -> Self {
        MenuCategory::Other
    }
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: Option<String>,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub category: MenuCategory,
    /// In-store price (SAR)
    pub base_price: Decimal,
    /// Price on delivery aggregators (SAR, usually higher)
    pub delivery_price: Decimal,
    pub image_url: String,
    pub is_available: bool,
    pub is_new: bool,
    pub is_best_seller: bool,
    /// Only sold in store, not on aggregators
    pub is_store_exclusive: bool,
    /// Must be ordered in advance
    pub is_pre_request_only: bool,
    /// Aggregators this item is listed on
    pub available_on: Vec<AggregatorId>,
    pub view_count: i64,
    pub sort_order: i32,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    #[validate(nested)]
    pub name: LocalizedName,
    pub description: Option<LocalizedText>,
    pub category: MenuCategory,
    pub base_price: Decimal,
    pub delivery_price: Option<Decimal>,
    #[validate(length(max = 2048))]
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
    pub is_new: Option<bool>,
    pub is_best_seller: Option<bool>,
    pub is_store_exclusive: Option<bool>,
    pub is_pre_request_only: Option<bool>,
    pub available_on: Option<Vec<AggregatorId>>,
    pub sort_order: Option<i32>,
}

/// Name pair with non-empty constraint on both sides
///
/// Separate from [`LocalizedText`] so empty descriptions stay legal.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocalizedName {
    #[validate(length(min = 1, max = 200))]
    pub ar: String,
    #[validate(length(min = 1, max = 200))]
    pub en: String,
}

impl From<LocalizedName> for LocalizedText {
    fn from(name: LocalizedName) -> Self {
        LocalizedText::new(name.ar, name.en)
    }
}

/// Update menu item payload (partial, all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    pub category: Option<MenuCategory>,
    pub base_price: Option<Decimal>,
    pub delivery_price: Option<Decimal>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
    pub is_new: Option<bool>,
    pub is_best_seller: Option<bool>,
    pub is_store_exclusive: Option<bool>,
    pub is_pre_request_only: Option<bool>,
    pub available_on: Option<Vec<AggregatorId>>,
    pub sort_order: Option<i32>,
}

/// One entry of a batch reorder request (drag-to-reorder persistence)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOrderEntry {
    pub id: String,
    pub sort_order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn create_payload() -> MenuItemCreate {
        MenuItemCreate {
            name: LocalizedName {
                ar: "كيكة الفستق".into(),
                en: "Pistachio Cake".into(),
            },
            description: None,
            category: MenuCategory::Cake,
            base_price: Decimal::new(4500, 2), // 45.00
            delivery_price: None,
            image_url: None,
            is_available: None,
            is_new: None,
            is_best_seller: None,
            is_store_exclusive: None,
            is_pre_request_only: None,
            available_on: None,
            sort_order: None,
        }
    }

    #[test]
    fn valid_create_payload_passes() {
        assert!(create_payload().validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut payload = create_payload();
        payload.name.en = String::new();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn menu_item_json_uses_camel_case() {
        let item = MenuItem {
            id: Some("abc".into()),
            name: LocalizedText::new("كيكة", "Cake"),
            description: LocalizedText::new("", ""),
            category: MenuCategory::Cake,
            base_price: Decimal::new(4500, 2),
            delivery_price: Decimal::new(5200, 2),
            image_url: String::new(),
            is_available: true,
            is_new: false,
            is_best_seller: true,
            is_store_exclusive: false,
            is_pre_request_only: false,
            available_on: vec![AggregatorId::Jahez],
            view_count: 0,
            sort_order: 3,
            created_at: None,
            updated_at: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"basePrice\""));
        assert!(json.contains("\"isBestSeller\""));
        assert!(json.contains("\"availableOn\":[\"jahez\"]"));
    }
}
