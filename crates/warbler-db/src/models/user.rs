//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
///
/// The `password` column is left out; it is read on its own when needed.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub image_url: String,
    pub header_image_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}
