//! Message handlers

use axum::{
    extract::{Path, State},
    Json,
};

use warbler_service::dto::ApiResponse;
use warbler_service::{MessageResponse, MessageService, NewMessageForm};

use crate::extractors::{CurrentUser, MessageIdPath, ValidatedForm};
use crate::response::{ApiResult, Found};
use crate::state::AppState;

/// Post a message as the logged-in user
///
/// POST /messages/new
pub async fn create_message(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidatedForm(form): ValidatedForm<NewMessageForm>,
) -> ApiResult<Found> {
    MessageService::new(state.service_context())
        .create_message(current.user_id, &form.text)
        .await?;

    Ok(Found::to(format!("/users/{}", current.user_id)))
}

/// Show a single message
///
/// GET /messages/:message_id
pub async fn show_message(
    State(state): State<AppState>,
    Path(path): Path<MessageIdPath>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let message = MessageService::new(state.service_context())
        .get_message(path.message_id()?)
        .await?;

    Ok(Json(ApiResponse::new(message.into())))
}

/// Delete one of the logged-in user's messages
///
/// POST /messages/:message_id/delete
pub async fn delete_message(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(path): Path<MessageIdPath>,
) -> ApiResult<Found> {
    MessageService::new(state.service_context())
        .delete_message(current.user_id, path.message_id()?)
        .await?;

    Ok(Found::to(format!("/users/{}", current.user_id)))
}
