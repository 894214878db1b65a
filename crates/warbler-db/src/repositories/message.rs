//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use warbler_core::entities::{Message, NewMessage};
use warbler_core::error::DomainError;
use warbler_core::traits::{MessageRepository, RepoResult};
use warbler_core::value_objects::{MessageId, UserId};

use crate::models::MessageModel;

use super::error::{map_constraint_violation, map_db_error, message_not_found};

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MessageId) -> RepoResult<Option<Message>> {
        let result = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, text, user_id, created_at
            FROM messages
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Message::from))
    }

    #[instrument(skip(self, message), fields(user_id = %message.user_id))]
    async fn create(&self, message: &NewMessage) -> RepoResult<Message> {
        message.check_constraints()?;

        let author = message.user_id;
        let created = sqlx::query_as::<_, MessageModel>(
            r"
            INSERT INTO messages (text, user_id)
            VALUES ($1, $2)
            RETURNING id, text, user_id, created_at
            ",
        )
        .bind(&message.text)
        .bind(author.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_constraint_violation(e, |name| match name {
                "messages_user_id_fkey" => Some(DomainError::UserNotFound(author)),
                "messages_text_check" => Some(DomainError::EmptyMessage),
                _ => None,
            })
        })?;

        Ok(Message::from(created))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: MessageId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(message_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<Message>> {
        let rows = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, text, user_id, created_at
            FROM messages
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self))]
    async fn timeline(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<Message>> {
        let rows = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, text, user_id, created_at
            FROM messages
            WHERE user_id = $1
               OR user_id IN (
                   SELECT user_being_followed_id FROM follows WHERE user_following_id = $1
               )
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_user(&self, user_id: UserId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages WHERE user_id = $1")
            .bind(user_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
