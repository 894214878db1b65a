//! Authentication utilities

mod password;
mod session;

pub use password::{
    hash_password, verify_password, verify_password_timing_safe, PasswordService,
};
pub use session::{SessionClaims, SessionService, SESSION_COOKIE};
