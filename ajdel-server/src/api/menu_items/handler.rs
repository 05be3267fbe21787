//! Admin menu items API Handlers
//!
//! Every handler takes an [`AdminSession`], so the routes 401 without a
//! valid bearer token.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use shared::{MenuItem, MenuItemCreate, MenuItemUpdate, SortOrderEntry};

use crate::auth::AdminSession;
use crate::core::ServerState;
use crate::db::repository::{MenuItemRepository, MenuStore};
use crate::utils::{AppError, AppResponse, AppResult, ok};

/// GET /api/menu-items - admin view: every item, hidden ones included
pub async fn list(
    _admin: AdminSession,
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo.find_all().await?;
    Ok(Json(items))
}

/// GET /api/menu-items/:id
pub async fn get_by_id(
    _admin: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {id}")))?;
    Ok(Json(item))
}

/// POST /api/menu-items - create a menu item
pub async fn create(
    _admin: AdminSession,
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    payload.validate()?;

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.create(payload).await?;
    tracing::info!(item = ?item.id, "Menu item created");
    Ok(Json(item))
}

/// PUT /api/menu-items/:id - partial update
pub async fn update(
    _admin: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.update(&id, payload).await?;
    tracing::info!(item = %id, "Menu item updated");
    Ok(Json(item))
}

/// DELETE /api/menu-items/:id
pub async fn delete(
    _admin: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Menu item {id}")));
    }
    tracing::info!(item = %id, "Menu item deleted");
    Ok(ok(()))
}

/// PUT /api/menu-items/sort-order - persist a drag-to-reorder result
pub async fn set_sort_orders(
    _admin: AdminSession,
    State(state): State<ServerState>,
    Json(entries): Json<Vec<SortOrderEntry>>,
) -> AppResult<Json<AppResponse<()>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    repo.set_sort_orders(&entries).await?;
    tracing::info!(count = entries.len(), "Menu order updated");
    Ok(ok(()))
}
