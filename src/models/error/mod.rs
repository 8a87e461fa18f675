mod api;
pub use api::*;

mod registry;
pub use registry::*;

mod repository;
pub use repository::*;
