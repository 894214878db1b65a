//! Follow edge - join entity between two users

use crate::value_objects::UserId;

/// Directed follow edge: `user_following_id` follows `user_being_followed_id`
///
/// The pair is the primary key, so an edge exists at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Follow {
    pub user_being_followed_id: UserId,
    pub user_following_id: UserId,
}

impl Follow {
    /// Edge meaning `follower` follows `followed`
    pub fn new(follower: UserId, followed: UserId) -> Self {
        Self {
            user_being_followed_id: followed,
            user_following_id: follower,
        }
    }

    /// Whether the edge points back at its own source
    #[inline]
    pub fn is_self_follow(&self) -> bool {
        self.user_being_followed_id == self.user_following_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction() {
        let edge = Follow::new(UserId::new(1), UserId::new(2));
        assert_eq!(edge.user_following_id, UserId::new(1));
        assert_eq!(edge.user_being_followed_id, UserId::new(2));
        assert!(!edge.is_self_follow());
    }

    #[test]
    fn test_self_follow() {
        assert!(Follow::new(UserId::new(4), UserId::new(4)).is_self_follow());
    }
}
