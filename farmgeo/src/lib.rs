//! # FarmGeo
//!
//! Stores farm boundaries as canonical polygons: closed, simple, counterclockwise
//! shells with clockwise holes, tagged with a coordinate reference system.
//!
//! The geometry pipeline lives in [`geometry`]. This crate adds:
//! - [`farm`]: farm records and the [`farm::FarmService`]
//! - [`store`]: in-memory and SQLite persistence
//! - [`server`]: the HTTP API
//! - [`config`]: YAML configuration
//!
//! ```rust
//! use farmgeo::{farm::*, geometry::*, store::MemoryStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = FarmService::new(Arc::new(MemoryStore::new()), Srid::WGS84);
//!     let farm = service
//!         .create(FarmInput {
//!             name: Some("Lot A".into()),
//!             coordinates: vec![
//!                 LatLng::new(0.0, 0.0),
//!                 LatLng::new(1.0, 0.0),
//!                 LatLng::new(1.0, 1.0),
//!                 LatLng::new(0.0, 1.0),
//!             ],
//!         })
//!         .await?;
//!     assert!(farm.area.is_normalized());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod farm;
pub mod server;
pub mod store;

pub use farmgeo_geometry as geometry;
