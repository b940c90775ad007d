//! Server topology and readiness endpoints.

use axum::{extract::State, Json};

use super::{message, ApiResult};
use crate::models::{MessageResponse, ServerList};
use crate::AppState;

/// GET /servers/list - Static proxy and hub listing.
pub async fn list_servers() -> Json<ServerList> {
    Json(ServerList::topology())
}

/// POST /servers/proxyready - Forward the ready signal to the peer service.
pub async fn proxy_ready(State(state): State<AppState>) -> ApiResult<MessageResponse> {
    state.notifier.notify_ready().await?;
    message("POST request sent successfully")
}
