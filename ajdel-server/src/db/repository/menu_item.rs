//! Menu Item Repository

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use uuid::Uuid;

use shared::models::MenuCategory;
use shared::{
    AggregatorId, LocalizedText, MenuItem, MenuItemCreate, MenuItemUpdate, SortOrderEntry,
    Timestamp,
};

use super::{BaseRepository, MenuStore, RepoError, RepoResult};

const MENU_ITEM_TABLE: &str = "menu_item";

// =============================================================================
// Row / content shapes
// =============================================================================
//
// SurrealDB hands back the record id as a RecordId, not a string, so reads
// go through `MenuItemRow` and writes through `MenuItemContent` (no id
// field; the record key carries it). Field names match the wire format.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MenuItemRow {
    id: RecordId,
    name: LocalizedText,
    description: LocalizedText,
    category: MenuCategory,
    base_price: Decimal,
    delivery_price: Decimal,
    image_url: String,
    is_available: bool,
    is_new: bool,
    is_best_seller: bool,
    is_store_exclusive: bool,
    is_pre_request_only: bool,
    available_on: Vec<AggregatorId>,
    view_count: i64,
    sort_order: i32,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: Some(row.id.key().to_string()),
            name: row.name,
            description: row.description,
            category: row.category,
            base_price: row.base_price,
            delivery_price: row.delivery_price,
            image_url: row.image_url,
            is_available: row.is_available,
            is_new: row.is_new,
            is_best_seller: row.is_best_seller,
            is_store_exclusive: row.is_store_exclusive,
            is_pre_request_only: row.is_pre_request_only,
            available_on: row.available_on,
            view_count: row.view_count,
            sort_order: row.sort_order,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MenuItemContent {
    name: LocalizedText,
    description: LocalizedText,
    category: MenuCategory,
    base_price: Decimal,
    delivery_price: Decimal,
    image_url: String,
    is_available: bool,
    is_new: bool,
    is_best_seller: bool,
    is_store_exclusive: bool,
    is_pre_request_only: bool,
    available_on: Vec<AggregatorId>,
    view_count: i64,
    sort_order: i32,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// Partial update document; absent fields are left untouched by MERGE
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MenuItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<MenuCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    base_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_new: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_best_seller: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_store_exclusive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_pre_request_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    available_on: Option<Vec<AggregatorId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_order: Option<i32>,
    updated_at: Timestamp,
}

// =============================================================================
// Menu Item Repository
// =============================================================================

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Next free slot at the end of the list (for items created without an
    /// explicit sort_order)
    async fn next_sort_order(&self) -> RepoResult<i32> {
        let counts: Vec<i64> = self
            .base
            .db()
            .query("SELECT VALUE count() FROM menu_item GROUP ALL")
            .await?
            .take(0)?;
        Ok(counts.first().copied().unwrap_or(0) as i32)
    }
}

impl MenuStore for MenuItemRepository {
    async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let rows: Vec<MenuItemRow> = self
            .base
            .db()
            .query("SELECT * FROM menu_item ORDER BY sortOrder ASC, createdAt DESC")
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    async fn find_available(&self) -> RepoResult<Vec<MenuItem>> {
        let rows: Vec<MenuItemRow> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE isAvailable = true ORDER BY sortOrder ASC")
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let row: Option<MenuItemRow> = self.base.db().select((MENU_ITEM_TABLE, id)).await?;
        Ok(row.map(MenuItem::from))
    }

    async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let sort_order = match data.sort_order {
            Some(order) => order,
            None => self.next_sort_order().await?,
        };
        let now = Utc::now().timestamp_millis();

        let content = MenuItemContent {
            name: data.name.into(),
            description: data
                .description
                .unwrap_or_else(|| LocalizedText::new("", "")),
            category: data.category,
            base_price: data.base_price,
            delivery_price: data.delivery_price.unwrap_or(data.base_price),
            image_url: data.image_url.unwrap_or_default(),
            is_available: data.is_available.unwrap_or(true),
            is_new: data.is_new.unwrap_or(false),
            is_best_seller: data.is_best_seller.unwrap_or(false),
            is_store_exclusive: data.is_store_exclusive.unwrap_or(false),
            is_pre_request_only: data.is_pre_request_only.unwrap_or(false),
            available_on: data.available_on.unwrap_or_default(),
            view_count: 0,
            sort_order,
            created_at: now,
            updated_at: now,
        };

        let id = Uuid::new_v4().to_string();
        let row: Option<MenuItemRow> = self
            .base
            .db()
            .create((MENU_ITEM_TABLE, id.as_str()))
            .content(content)
            .await?;

        row.map(MenuItem::from)
            .ok_or_else(|| RepoError::Database("create returned no record".into()))
    }

    async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        // Guard first so MERGE on a missing record doesn't silently create it
        let existing: Option<MenuItemRow> = self.base.db().select((MENU_ITEM_TABLE, id)).await?;
        if existing.is_none() {
            return Err(RepoError::NotFound(format!("Menu item {id}")));
        }

        let patch = MenuItemPatch {
            name: data.name,
            description: data.description,
            category: data.category,
            base_price: data.base_price,
            delivery_price: data.delivery_price,
            image_url: data.image_url,
            is_available: data.is_available,
            is_new: data.is_new,
            is_best_seller: data.is_best_seller,
            is_store_exclusive: data.is_store_exclusive,
            is_pre_request_only: data.is_pre_request_only,
            available_on: data.available_on,
            sort_order: data.sort_order,
            updated_at: Utc::now().timestamp_millis(),
        };

        let row: Option<MenuItemRow> = self
            .base
            .db()
            .update((MENU_ITEM_TABLE, id))
            .merge(patch)
            .await?;

        row.map(MenuItem::from)
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {id}")))
    }

    async fn delete(&self, id: &str) -> RepoResult<bool> {
        let row: Option<MenuItemRow> = self.base.db().delete((MENU_ITEM_TABLE, id)).await?;
        Ok(row.is_some())
    }

    async fn set_sort_orders(&self, entries: &[SortOrderEntry]) -> RepoResult<()> {
        let now = Utc::now().timestamp_millis();
        for entry in entries {
            self.base
                .db()
                .query(
                    "UPDATE type::thing('menu_item', $id) \
                     SET sortOrder = $order, updatedAt = $now",
                )
                .bind(("id", entry.id.clone()))
                .bind(("order", entry.sort_order))
                .bind(("now", now))
                .await?
                .check()?;
        }
        Ok(())
    }

    async fn increment_view_count(&self, id: &str) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE type::thing('menu_item', $id) SET viewCount += 1")
            .bind(("id", id.to_string()))
            .await?
            .check()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::menu_item::LocalizedName;
    use surrealdb::engine::local::Mem;

    async fn test_repo() -> MenuItemRepository {
        let db = Surreal::new::<Mem>(()).await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        MenuItemRepository::new(db)
    }

    fn cake(ar: &str, en: &str, price: i64) -> MenuItemCreate {
        MenuItemCreate {
            name: LocalizedName {
                ar: ar.into(),
                en: en.into(),
            },
            description: None,
            category: MenuCategory::Cake,
            base_price: Decimal::new(price, 2),
            delivery_price: None,
            image_url: None,
            is_available: None,
            is_new: None,
            is_best_seller: None,
            is_store_exclusive: None,
            is_pre_request_only: None,
            available_on: Some(vec![AggregatorId::Jahez, AggregatorId::Keeta]),
            sort_order: None,
        }
    }

    #[tokio::test]
    async fn create_fills_defaults_and_appends() {
        let repo = test_repo().await;

        let first = repo.create(cake("سان سيباستيان", "San Sebastian", 4500)).await.unwrap();
        assert_eq!(first.sort_order, 0);
        assert_eq!(first.view_count, 0);
        assert!(first.is_available);
        // Delivery price defaults to the base price
        assert_eq!(first.delivery_price, first.base_price);
        assert!(first.id.is_some());

        let second = repo.create(cake("كيكة الفستق", "Pistachio Cake", 5200)).await.unwrap();
        assert_eq!(second.sort_order, 1);
    }

    #[tokio::test]
    async fn find_all_orders_by_sort_order() {
        let repo = test_repo().await;
        let a = repo.create(cake("أ", "A", 1000)).await.unwrap();
        let b = repo.create(cake("ب", "B", 2000)).await.unwrap();

        let items = repo.find_all().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, a.id);
        assert_eq!(items[1].id, b.id);
    }

    #[tokio::test]
    async fn update_merges_only_given_fields() {
        let repo = test_repo().await;
        let item = repo.create(cake("كيكة", "Cake", 4500)).await.unwrap();
        let id = item.id.clone().unwrap();

        let updated = repo
            .update(
                &id,
                MenuItemUpdate {
                    base_price: Some(Decimal::new(4800, 2)),
                    is_best_seller: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.base_price, Decimal::new(4800, 2));
        assert!(updated.is_best_seller);
        // Untouched fields survive the merge
        assert_eq!(updated.name.en, "Cake");
        assert_eq!(updated.available_on, item.available_on);
        assert!(updated.updated_at >= item.updated_at);
    }

    #[tokio::test]
    async fn update_missing_item_is_not_found() {
        let repo = test_repo().await;
        let err = repo
            .update("no-such-id", MenuItemUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let repo = test_repo().await;
        let item = repo.create(cake("كيكة", "Cake", 4500)).await.unwrap();
        let id = item.id.unwrap();

        assert!(repo.delete(&id).await.unwrap());
        assert!(!repo.delete(&id).await.unwrap());
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_sort_orders_persists_a_reorder() {
        let repo = test_repo().await;
        let a = repo.create(cake("أ", "A", 1000)).await.unwrap();
        let b = repo.create(cake("ب", "B", 2000)).await.unwrap();

        // Swap the two
        repo.set_sort_orders(&[
            SortOrderEntry {
                id: a.id.clone().unwrap(),
                sort_order: 1,
            },
            SortOrderEntry {
                id: b.id.clone().unwrap(),
                sort_order: 0,
            },
        ])
        .await
        .unwrap();

        let items = repo.find_all().await.unwrap();
        assert_eq!(items[0].id, b.id);
        assert_eq!(items[1].id, a.id);
    }

    #[tokio::test]
    async fn view_count_increments() {
        let repo = test_repo().await;
        let item = repo.create(cake("كيكة", "Cake", 4500)).await.unwrap();
        let id = item.id.unwrap();

        repo.increment_view_count(&id).await.unwrap();
        repo.increment_view_count(&id).await.unwrap();

        let reloaded = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(reloaded.view_count, 2);
    }

    #[tokio::test]
    async fn find_available_filters_hidden_items() {
        let repo = test_repo().await;
        let shown = repo.create(cake("ظاهر", "Shown", 1000)).await.unwrap();
        let hidden = repo.create(cake("مخفي", "Hidden", 2000)).await.unwrap();
        repo.update(
            &hidden.id.unwrap(),
            MenuItemUpdate {
                is_available: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let menu = repo.find_available().await.unwrap();
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].id, shown.id);
    }
}
