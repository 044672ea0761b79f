//! HTTP API for farms.

mod cors;
mod farm_server;
mod handlers;
mod routes;

pub use farm_server::FarmServer;
pub use routes::build_router;
