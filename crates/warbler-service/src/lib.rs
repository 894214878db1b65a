//! # warbler-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    HealthResponse, LoginForm, MessageResponse, NewMessageForm, ProfileResponse,
    ReadinessResponse, SignupForm, UserResponse,
};
pub use services::{
    AuthService, MessageService, ServiceContext, ServiceError,
    ServiceResult, UserService,
};
