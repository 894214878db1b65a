//! Test fixtures and data generators
//!
//! Provides reusable form data and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
///
/// Includes a timestamp so reruns against the same database never collide.
pub fn unique_suffix() -> String {
    format!(
        "{}{}",
        chrono::Utc::now().timestamp_micros(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

/// Signup form
#[derive(Debug, Clone, Serialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("user{suffix}"),
            email: format!("user{suffix}@test.com"),
            password: "HASHED_PASSWORD".to_string(),
        }
    }
}

/// Login form
#[derive(Debug, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn from_signup(signup: &SignupForm) -> Self {
        Self {
            username: signup.username.clone(),
            password: signup.password.clone(),
        }
    }
}

/// New message form
#[derive(Debug, Serialize)]
pub struct MessageForm {
    pub text: String,
}

impl MessageForm {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// `{"data": ...}` envelope
#[derive(Debug, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub image_url: String,
    pub header_image_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub created_at: String,
}

/// Profile response
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub messages_count: i64,
    pub followers_count: i64,
    pub following_count: i64,
    pub messages: Vec<MessageResponse>,
}

/// Message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: i64,
    pub text: String,
    pub user_id: i64,
    pub created_at: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
