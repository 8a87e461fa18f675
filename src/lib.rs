//! # Relay Minifier
//!
//! A cross-chain message relay registry. Relays are recorded with a
//! destination chain, a message hash and a payload size, receive sequential
//! ids, and move once from `Pending` to `Confirmed`.
//!
//! ## Modules
//!
//! * `domain` - the registry state machine and its input validation
//! * `repositories` - relay storage
//! * `models` - relay records, call/receipt types and errors
//! * `api` - actix-web routes and controllers
//! * `config`, `logging`, `constants` - service plumbing

pub mod api;
pub mod config;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod utils;
