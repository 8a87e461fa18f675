//! Integration tests for the relay registry.
//!
//! Exercises the public crate API and the assembled HTTP service.

mod integration {
    pub mod common;
    mod tests;
}
