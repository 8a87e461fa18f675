//! # API Module
//!
//! HTTP API of the relay registry service.
//!
//! ## Structure
//!
//! * `controllers` - Request handling against the registry
//! * `routes` - API endpoint definitions and routing

pub mod controllers;

pub mod routes;
