//! Axum extractors for request handling
//!
//! Custom extractors for sessions, path ids, validation, and pagination.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::{clear_session, start_session, CurrentUser, OptionalCurrentUser};
pub use pagination::Pagination;
pub use path::{MessageIdPath, UserIdPath};
pub use validated::ValidatedForm;
