//! Business status API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::hours::BusinessStatus;

/// GET /api/status - latest open/closed snapshot from the poller
///
/// Drives the "Order Now" affordance: the button is disabled while
/// `isOpen` is false, and the countdown/message pair is shown verbatim.
pub async fn current(State(state): State<ServerState>) -> Json<BusinessStatus> {
    Json(state.current_status())
}
