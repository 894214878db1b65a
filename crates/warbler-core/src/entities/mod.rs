//! Domain entities - core business objects

mod follow;
mod message;
mod user;

pub use follow::Follow;
pub use message::{Message, NewMessage, MAX_MESSAGE_LEN};
pub use user::{
    NewUser, User, UserProfile, DEFAULT_HEADER_IMAGE_URL, DEFAULT_IMAGE_URL, MAX_EMAIL_LEN,
    MAX_USERNAME_LEN,
};
