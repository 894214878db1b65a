//! Data transfer objects for form input and JSON output
//!
//! This module provides:
//! - Form DTOs with validation for submitted forms
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{first_validation_message, LoginForm, NewMessageForm, SignupForm};

pub use responses::{
    ApiResponse, HealthChecks, HealthResponse, MessageResponse, ProfileResponse,
    ReadinessResponse, UserResponse,
};
