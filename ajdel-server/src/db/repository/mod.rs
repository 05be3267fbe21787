//! Repository Module
//!
//! Storage port for the menu. [`MenuStore`] is the single interface the
//! rest of the server programs against; [`MenuItemRepository`] is its one
//! concrete adapter (embedded SurrealDB). The hosted-backend duplication
//! of the original storefront collapses into this seam.

pub mod menu_item;

pub use menu_item::MenuItemRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use shared::{MenuItem, MenuItemCreate, MenuItemUpdate, SortOrderEntry};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Storage port for menu items
///
/// One interface, one adapter. Everything the admin portal and the public
/// menu need from persistent storage goes through here.
#[allow(async_fn_in_trait)]
pub trait MenuStore {
    /// All items, admin view (includes unavailable ones)
    async fn find_all(&self) -> RepoResult<Vec<MenuItem>>;
    /// Customer view: available items only
    async fn find_available(&self) -> RepoResult<Vec<MenuItem>>;
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>>;
    async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem>;
    async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem>;
    async fn delete(&self, id: &str) -> RepoResult<bool>;
    /// Persist a batch reorder (drag-to-reorder result)
    async fn set_sort_orders(&self, entries: &[SortOrderEntry]) -> RepoResult<()>;
    /// Best-effort popularity counter
    async fn increment_view_count(&self, id: &str) -> RepoResult<()>;
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
