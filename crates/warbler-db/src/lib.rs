//! # warbler-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `warbler-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! [`MemoryStore`] implements the same traits in process memory, enforcing
//! the same constraints as the schema. It backs the service and router tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use warbler_db::pool::{create_pool, run_migrations, PoolConfig};
//! use warbler_db::repositories::PgUserRepository;
//! use warbler_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PoolConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_from_env, ping, run_migrations, PgPool, PoolConfig};
pub use repositories::{PgFollowRepository, PgMessageRepository, PgUserRepository};
