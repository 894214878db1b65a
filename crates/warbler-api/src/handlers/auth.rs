//! Signup, login, and logout handlers
//!
//! Successful form posts set or clear the `curr_user` cookie and redirect.
//! Rejected forms re-render with a message and status 200.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use warbler_service::{AuthService, LoginForm, SignupForm};

use crate::extractors::{clear_session, start_session};
use crate::response::{ApiResult, Found};
use crate::state::AppState;
use crate::views;

const INVALID_CREDENTIALS: &str = "Invalid credentials.";

/// Show the signup form
///
/// GET /signup
pub async fn signup_form() -> Html<String> {
    views::signup_page(&SignupForm::default(), None)
}

/// Create an account and log it in
///
/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SignupForm>,
) -> ApiResult<Response> {
    let submitted = form.clone();

    match AuthService::new(state.service_context()).register(form).await {
        Ok((_user, token)) => Ok((start_session(jar, token), Found::to("/")).into_response()),
        Err(e) if e.is_form_error() => {
            debug!(error = %e, "Signup rejected");
            Ok(views::signup_page(&submitted, Some(&e.to_string())).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Show the login form
///
/// GET /login
pub async fn login_form() -> Html<String> {
    views::login_page("", None)
}

/// Log in with username and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> ApiResult<Response> {
    let username = form.username.clone();

    match AuthService::new(state.service_context()).login(form).await? {
        Some((_user, token)) => Ok((start_session(jar, token), Found::to("/")).into_response()),
        None => Ok(views::login_page(&username, Some(INVALID_CREDENTIALS)).into_response()),
    }
}

/// Log out
///
/// POST /logout
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (clear_session(jar), Found::to("/login"))
}
