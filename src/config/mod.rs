//! Service configuration loaded from the environment.

mod server_config;
pub use server_config::*;
