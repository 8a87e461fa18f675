//! Constants shared across the relay registry service.

mod logging;
pub use logging::*;

mod registry;
pub use registry::*;

mod server;
pub use server::*;
