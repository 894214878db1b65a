//! User handlers
//!
//! Profiles, the follow graph, and account deletion.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use warbler_core::{DomainError, User};
use warbler_service::dto::ApiResponse;
use warbler_service::{
    MessageService, ProfileResponse, ServiceError, UserResponse, UserService,
};

use crate::extractors::{clear_session, CurrentUser, UserIdPath};
use crate::response::{ApiResult, Found};
use crate::state::AppState;

fn user_list(users: Vec<User>) -> Json<ApiResponse<Vec<UserResponse>>> {
    Json(ApiResponse::new(users.into_iter().map(UserResponse::from).collect()))
}

fn following_page(current: &CurrentUser) -> Found {
    Found::to(format!("/users/{}/following", current.user_id))
}

/// Show a user's profile with their latest messages
///
/// GET /users/:user_id
pub async fn show_user(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<ApiResponse<ProfileResponse>>> {
    let user_id = path.user_id()?;
    let ctx = state.service_context();

    let profile = UserService::new(ctx).profile(user_id).await?;
    let messages = MessageService::new(ctx).user_messages(user_id, None).await?;

    Ok(Json(ApiResponse::new(ProfileResponse::new(&profile, &messages))))
}

/// Users the given user follows
///
/// GET /users/:user_id/following
pub async fn show_following(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let users = UserService::new(state.service_context())
        .following(path.user_id()?)
        .await?;
    Ok(user_list(users))
}

/// Users following the given user
///
/// GET /users/:user_id/followers
pub async fn show_followers(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let users = UserService::new(state.service_context())
        .followers(path.user_id()?)
        .await?;
    Ok(user_list(users))
}

/// Follow another user
///
/// POST /users/follow/:user_id
pub async fn follow(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Found> {
    let other = path.user_id()?;

    match UserService::new(state.service_context())
        .follow(current.user_id, other)
        .await
    {
        Ok(()) => {}
        // Repeated follow clicks land on the same page
        Err(ServiceError::Domain(DomainError::AlreadyFollowing)) => {
            debug!(followed = %other, "Already following");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(following_page(&current))
}

/// Stop following another user
///
/// POST /users/stop-following/:user_id
pub async fn stop_following(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Found> {
    UserService::new(state.service_context())
        .unfollow(current.user_id, path.user_id()?)
        .await?;

    Ok(following_page(&current))
}

/// Delete the logged-in user's account and end the session
///
/// POST /users/delete
pub async fn delete_user(
    State(state): State<AppState>,
    current: CurrentUser,
    jar: CookieJar,
) -> ApiResult<impl IntoResponse> {
    UserService::new(state.service_context())
        .delete_user(current.user_id)
        .await?;

    Ok((clear_session(jar), Found::to("/signup")))
}
