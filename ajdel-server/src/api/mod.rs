//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`status`] - business open/closed status and countdown
//! - [`menu`] - public menu (customer view)
//! - [`links`] - landing page links with visibility toggles applied
//! - [`auth`] - admin login/logout
//! - [`menu_items`] - admin menu CRUD and reordering

pub mod auth;
pub mod health;
pub mod links;
pub mod menu;
pub mod menu_items;
pub mod status;

use axum::Router;
use http::HeaderValue;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Public routes
        .merge(health::router())
        .merge(status::router())
        .merge(menu::router())
        .merge(links::router())
        // Auth API
        .merge(auth::router())
        // Admin API - session token required (enforced per handler)
        .merge(menu_items::router())
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: &ServerState) -> Router {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - the landing page is served from a separate origin
        .layer(CorsLayer::permissive())
        // Compression - gzip responses
        .layer(CompressionLayer::new())
        // Request logging
        .layer(TraceLayer::new_for_http())
        // Request IDs - generated, then propagated to the response
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(XRequestId))
        .with_state(state.clone())
}
