//! Service context - dependency container for services
//!
//! Holds the repositories, the session signer, and the database pool used
//! for readiness checks.

use std::sync::Arc;

use warbler_common::{PasswordService, SessionService};
use warbler_core::traits::{FollowRepository, MessageRepository, UserRepository};
use warbler_db::{
    ping, MemoryStore, PgFollowRepository, PgMessageRepository, PgPool, PgUserRepository,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool; absent when running on the in-memory store
    pool: Option<PgPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    message_repo: Arc<dyn MessageRepository>,
    follow_repo: Arc<dyn FollowRepository>,

    // Services
    session_service: Arc<SessionService>,
    password_service: PasswordService,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        user_repo: Arc<dyn UserRepository>,
        message_repo: Arc<dyn MessageRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        session_service: Arc<SessionService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            message_repo,
            follow_repo,
            session_service,
            password_service: PasswordService::new(),
        }
    }

    /// Context wired to PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool, session_service: SessionService) -> Self {
        Self::new(
            Some(pool.clone()),
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgMessageRepository::new(pool.clone())),
            Arc::new(PgFollowRepository::new(pool)),
            Arc::new(session_service),
        )
    }

    /// Context wired to a single in-memory store
    pub fn in_memory(store: MemoryStore, session_service: SessionService) -> Self {
        Self::new(
            None,
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
            Arc::new(session_service),
        )
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if any
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Whether the backing store can serve requests
    pub async fn database_ready(&self) -> bool {
        match &self.pool {
            Some(pool) => ping(pool).await.is_ok(),
            None => true,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    // === Services ===

    /// Get the session token service
    pub fn session_service(&self) -> &SessionService {
        self.session_service.as_ref()
    }

    /// Get the password hashing service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("session_service", &self.session_service)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_context() {
        let ctx = ServiceContext::in_memory(MemoryStore::new(), SessionService::new("secret", 60));

        assert!(ctx.pool().is_none());
        assert!(ctx.database_ready().await);
        assert_eq!(ctx.session_service().expiry_secs(), 60);
        assert!(format!("{ctx:?}").contains("ServiceContext"));
    }
}
