//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use warbler_core::entities::{NewUser, User, DEFAULT_HEADER_IMAGE_URL};
use warbler_core::error::DomainError;
use warbler_core::traits::{RepoResult, UserRepository};
use warbler_core::value_objects::UserId;

use crate::models::UserModel;

use super::error::{map_constraint_violation, map_db_error, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn user_constraint(name: &str) -> Option<DomainError> {
    match name {
        "users_username_key" => Some(DomainError::UsernameTaken),
        "users_email_key" => Some(DomainError::EmailTaken),
        "users_username_check" => Some(DomainError::EmptyUsername),
        "users_email_check" => Some(DomainError::EmptyEmail),
        _ => None,
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, username, image_url, header_image_url, bio, location, created_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, username, image_url, header_image_url, bio, location, created_at
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, username, image_url, header_image_url, bio, location, created_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        user.check_constraints()?;

        let created = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (email, username, image_url, header_image_url, password)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, username, image_url, header_image_url, bio, location, created_at
            ",
        )
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.image_url)
        .bind(DEFAULT_HEADER_IMAGE_URL)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_constraint_violation(e, user_constraint))?;

        Ok(User::from(created))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> RepoResult<()> {
        // messages and follows go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>("SELECT password FROM users WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result)
    }
}
