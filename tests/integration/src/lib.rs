//! Integration test utilities for Warbler
//!
//! This crate provides helpers for running end-to-end tests against
//! a live server backed by PostgreSQL.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
