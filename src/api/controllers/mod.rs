//! # API Controllers Module
//!
//! Handlers behind the HTTP routes. Each controller calls into the registry
//! and shapes its result as an [`crate::models::ApiResponse`].

pub mod health;
pub mod relay;
