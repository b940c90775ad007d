//! Player API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{message, ApiResult};
use crate::errors::AppError;
use crate::models::{BlobPayload, InventoryView, MessageResponse, PlayerRecord, Rank, SetRankRequest};
use crate::AppState;

/// GET /players/{uuid} - Get a player, creating a default one on first sight.
pub async fn get_player(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<PlayerRecord> {
    let player = state.store.get_or_create(&uuid).await?;
    Ok(Json(player))
}

/// POST /players/setrank/{uuid} - Set a player's rank.
///
/// An unknown player is reported before the body is looked at.
pub async fn set_rank(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    payload: Result<Json<SetRankRequest>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    if !state.store.contains(&uuid).await? {
        return Err(AppError::NotFound("Player not found".to_string()));
    }

    let Json(request) = payload?;

    if state.config.strict_ranks {
        request
            .rank
            .parse::<Rank>()
            .map_err(AppError::Validation)?;
    }

    state.store.set_rank(&uuid, &request.rank).await?;
    message("Player rank updated successfully")
}

/// GET /players/inv/{uuid} - Get a player's inventory blobs.
pub async fn get_inventory(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<InventoryView> {
    let view = state.store.get_inventory(&uuid).await?;
    Ok(Json(view))
}

/// POST /players/setinvcontents/{uuid} - Replace the main inventory blob.
pub async fn set_inventory_contents(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    payload: Result<Json<BlobPayload>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let Json(mut payload) = payload?;
    let blob = payload.take(BlobPayload::INV_CONTENTS);
    state.store.set_inventory_main(&uuid, &blob).await?;
    message("Inventory contents updated successfully")
}

/// POST /players/setarmorcontents/{uuid} - Replace the armor blob.
pub async fn set_armor_contents(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    payload: Result<Json<BlobPayload>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let Json(mut payload) = payload?;
    let blob = payload.take(BlobPayload::ARMOR_CONTENTS);
    state.store.set_inventory_armor(&uuid, &blob).await?;
    message("Armor contents updated successfully")
}
