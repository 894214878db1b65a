//! # warbler-api
//!
//! HTTP server built with the Axum framework: signup and login forms,
//! session cookies, and JSON views of users, messages, and timelines.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;
pub mod views;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
