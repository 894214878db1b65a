//! User entity - represents a Warbler account

use chrono::{DateTime, Utc};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::UserId;

/// Avatar used when a user signs up without an image
pub const DEFAULT_IMAGE_URL: &str = "/static/images/default-pic.png";

/// Profile banner used until the user picks one
pub const DEFAULT_HEADER_IMAGE_URL: &str = "/static/images/warbler-hero.jpg";

pub const MAX_USERNAME_LEN: usize = 50;
pub const MAX_EMAIL_LEN: usize = 50;

/// User entity
///
/// The password hash is deliberately not part of the entity; repositories
/// hand it out only through `UserRepository::get_password_hash`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub image_url: String,
    pub header_image_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Debug-friendly summary: `<User #1: testuser, test@test.com>`
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<User #{}: {}, {}>", self.id, self.username, self.email)
    }
}

/// A user that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub image_url: String,
}

impl NewUser {
    /// Build a new user, trimming and validating the required fields
    ///
    /// A missing or blank `image_url` falls back to [`DEFAULT_IMAGE_URL`].
    pub fn new(
        username: &str,
        email: &str,
        password_hash: String,
        image_url: Option<&str>,
    ) -> Result<Self, DomainError> {
        let username = username.trim();
        let email = email.trim();

        if username.is_empty() {
            return Err(DomainError::EmptyUsername);
        }
        if email.is_empty() {
            return Err(DomainError::EmptyEmail);
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(DomainError::InvalidUsername(format!(
                "must be at most {MAX_USERNAME_LEN} characters"
            )));
        }
        if email.chars().count() > MAX_EMAIL_LEN {
            return Err(DomainError::InvalidEmail(format!(
                "must be at most {MAX_EMAIL_LEN} characters"
            )));
        }

        let image_url = image_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_IMAGE_URL)
            .to_string();

        Ok(Self {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            image_url,
        })
    }

    /// Re-check the column constraints the store enforces
    pub fn check_constraints(&self) -> Result<(), DomainError> {
        if self.username.trim().is_empty() {
            return Err(DomainError::EmptyUsername);
        }
        if self.email.trim().is_empty() {
            return Err(DomainError::EmptyEmail);
        }
        Ok(())
    }
}

/// A user together with the counters shown on a profile page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user: User,
    pub messages_count: i64,
    pub followers_count: i64,
    pub following_count: i64,
}
