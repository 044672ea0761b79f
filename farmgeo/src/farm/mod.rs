//! Farm records and the service that creates, reads and edits them.

mod error;
mod model;
mod service;

pub use error::FarmError;
pub use model::*;
pub use service::FarmService;
