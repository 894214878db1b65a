//! Route definitions
//!
//! All routes organized by domain.

use axum::{routing::{get, post}, Router};

use crate::handlers::{auth, health, home, messages, users};
use crate::state::AppState;

/// Create the main router with all application routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::homepage))
        .merge(auth_routes())
        .merge(user_routes())
        .merge(message_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Signup, login, and logout routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", get(auth::signup_form).post(auth::signup))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/delete", post(users::delete_user))
        .route("/users/follow/:user_id", post(users::follow))
        .route("/users/stop-following/:user_id", post(users::stop_following))
        .route("/users/:user_id", get(users::show_user))
        .route("/users/:user_id/following", get(users::show_following))
        .route("/users/:user_id/followers", get(users::show_followers))
}

/// Message routes
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages/new", post(messages::create_message))
        .route("/messages/:message_id", get(messages::show_message))
        .route("/messages/:message_id/delete", post(messages::delete_message))
}
