//! Repository traits (ports)

mod repositories;

pub use repositories::{
    FollowRepository, MessageRepository, RepoResult, UserRepository, DEFAULT_PAGE_LIMIT,
};
