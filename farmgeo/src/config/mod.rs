//! FarmGeo configuration.
//!
//! - [`Config`]: top-level loader and YAML parser
//! - [`ServerConfig`]: bind address
//! - [`Cors`]: CORS policy
//! - [`DatabaseConfig`]: where farms are stored
//! - [`GeometryConfig`]: coordinate reference system of stored polygons
//!
//! A config file is usually passed to `farmgeo serve --config farmgeo.yml`.
//! Command line flags override the values read from it.

mod cors;
mod database;
mod geometry;
mod main;
mod server;

pub use cors::Cors;
pub use database::DatabaseConfig;
pub use geometry::GeometryConfig;
pub use main::Config;
pub use server::ServerConfig;
