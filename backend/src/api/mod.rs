//! REST API module.
//!
//! Routes and handlers for the player and server endpoints.

mod players;
mod servers;

pub use players::*;
pub use servers::*;

use axum::Json;

use crate::errors::AppError;
use crate::models::MessageResponse;

/// Response type for handlers: JSON body or an error mapped to its status.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Create a confirmation response.
pub fn message(text: &str) -> ApiResult<MessageResponse> {
    Ok(Json(MessageResponse::new(text)))
}
