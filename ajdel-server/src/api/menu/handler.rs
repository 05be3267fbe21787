//! Public menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::MenuItem;

use crate::core::ServerState;
use crate::db::repository::{MenuItemRepository, MenuStore};
use crate::utils::{AppResponse, AppResult, ok};

/// GET /api/menu - customer view: available items in display order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo.find_available().await?;
    Ok(Json(items))
}

/// POST /api/menu/:id/view - bump an item's view counter
///
/// Best effort: a failed bump is logged and swallowed so browsing is
/// never interrupted by analytics.
pub async fn record_view(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Json<AppResponse<()>> {
    let repo = MenuItemRepository::new(state.db.clone());
    if let Err(e) = repo.increment_view_count(&id).await {
        tracing::warn!(item = %id, error = %e, "Failed to record menu item view");
    }
    ok(())
}
