mod api_response;
pub use api_response::*;

mod app_state;
pub use app_state::*;

mod error;
pub use error::*;

pub mod relay;
pub use relay::*;
