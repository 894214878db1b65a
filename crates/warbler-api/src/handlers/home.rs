//! Home page handler

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use warbler_service::dto::ApiResponse;
use warbler_service::{MessageResponse, MessageService};

use crate::extractors::{OptionalCurrentUser, Pagination};
use crate::response::{ApiResult, Found};
use crate::state::AppState;

/// Home timeline for logged-in users; anonymous visitors go to signup
///
/// GET /
pub async fn homepage(
    State(state): State<AppState>,
    OptionalCurrentUser(current): OptionalCurrentUser,
    pagination: Pagination,
) -> ApiResult<Response> {
    let Some(current) = current else {
        return Ok(Found::to("/signup").into_response());
    };

    let messages = MessageService::new(state.service_context())
        .home_timeline(current.user_id, pagination.limit)
        .await?;
    let messages: Vec<MessageResponse> = messages.into_iter().map(MessageResponse::from).collect();

    Ok(Json(ApiResponse::new(messages)).into_response())
}
