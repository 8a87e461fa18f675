//! # Domain Module
//!
//! Core business logic of the relay registry.

mod registry;
pub use registry::*;
