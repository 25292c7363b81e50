pub mod api;
pub mod documents;
pub mod logging;
pub mod results;
pub mod traits;

mod status;
pub use status::Status;

mod tracing;
pub use crate::tracing::Tracing;
