//! Public menu API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/menu", get(handler::list))
        .route("/api/menu/{id}/view", post(handler::record_view))
}
