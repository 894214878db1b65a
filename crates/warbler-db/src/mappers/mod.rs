//! Entity to model mappers
//!
//! `From<Model> for Entity` converts database rows to domain objects.

mod message;
mod user;
