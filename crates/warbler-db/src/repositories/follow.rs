//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use warbler_core::entities::{Follow, User};
use warbler_core::error::DomainError;
use warbler_core::traits::{FollowRepository, RepoResult};
use warbler_core::value_objects::UserId;

use crate::models::UserModel;

use super::error::{map_constraint_violation, map_db_error};

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn exists(&self, follow: Follow) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM follows
                WHERE user_being_followed_id = $1 AND user_following_id = $2
            )
            ",
        )
        .bind(follow.user_being_followed_id.into_inner())
        .bind(follow.user_following_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, follow: Follow) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO follows (user_being_followed_id, user_following_id)
            VALUES ($1, $2)
            ",
        )
        .bind(follow.user_being_followed_id.into_inner())
        .bind(follow.user_following_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_constraint_violation(e, |name| match name {
                "follows_pkey" => Some(DomainError::AlreadyFollowing),
                "follows_user_being_followed_id_fkey" => {
                    Some(DomainError::UserNotFound(follow.user_being_followed_id))
                }
                "follows_user_following_id_fkey" => {
                    Some(DomainError::UserNotFound(follow.user_following_id))
                }
                _ => None,
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, follow: Follow) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM follows
            WHERE user_being_followed_id = $1 AND user_following_id = $2
            ",
        )
        .bind(follow.user_being_followed_id.into_inner())
        .bind(follow.user_following_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn followers(&self, user_id: UserId) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.id, u.email, u.username, u.image_url, u.header_image_url,
                   u.bio, u.location, u.created_at
            FROM users u
            INNER JOIN follows f ON f.user_following_id = u.id
            WHERE f.user_being_followed_id = $1
            ORDER BY u.username
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn following(&self, user_id: UserId) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.id, u.email, u.username, u.image_url, u.header_image_url,
                   u.bio, u.location, u.created_at
            FROM users u
            INNER JOIN follows f ON f.user_being_followed_id = u.id
            WHERE f.user_following_id = $1
            ORDER BY u.username
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_followers(&self, user_id: UserId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM follows WHERE user_being_followed_id = $1",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_following(&self, user_id: UserId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM follows WHERE user_following_id = $1")
            .bind(user_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
