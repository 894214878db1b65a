//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod error;
pub mod message;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext};
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use user::UserService;

#[cfg(test)]
pub(crate) mod test_support {
    use warbler_common::SessionService;
    use warbler_db::MemoryStore;

    use super::ServiceContext;

    /// Context backed by a fresh in-memory store
    pub fn memory_context() -> (ServiceContext, MemoryStore) {
        let store = MemoryStore::new();
        let ctx = ServiceContext::in_memory(store.clone(), SessionService::new("test-secret", 3600));
        (ctx, store)
    }
}
