//! Session extractor
//!
//! Reads the `curr_user` cookie and resolves it to a logged-in user.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;

use warbler_common::SESSION_COOKIE;
use warbler_core::{User, UserId};

use crate::response::ApiError;
use crate::state::AppState;

/// Logged-in user resolved from the session cookie
///
/// Rejects anonymous requests with a redirect to the login page.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub user: User,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let OptionalCurrentUser(current) =
            OptionalCurrentUser::from_request_parts(parts, state).await?;
        current.ok_or(ApiError::LoginRequired)
    }
}

/// Optional logged-in user
///
/// A missing, invalid, or expired cookie, or one naming a user that no
/// longer exists, all yield `None`.
#[derive(Debug, Clone)]
pub struct OptionalCurrentUser(pub Option<CurrentUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalCurrentUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            return Ok(Self(None));
        };

        let app_state = AppState::from_ref(state);
        let user_id = match app_state.session_service().verify(cookie.value()) {
            Ok(user_id) => user_id,
            Err(e) => {
                debug!(error = %e, "Ignoring unusable session cookie");
                return Ok(Self(None));
            }
        };

        let user = app_state
            .service_context()
            .user_repo()
            .find_by_id(user_id)
            .await?;

        Ok(Self(user.map(|user| CurrentUser { user_id, user })))
    }
}

/// Add the session cookie for a freshly issued token
pub fn start_session(jar: CookieJar, token: String) -> CookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Remove the session cookie
pub fn clear_session(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}
