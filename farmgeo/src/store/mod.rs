//! Persistence backends for farms.
//!
//! The service only calls a store after the polygon pipeline succeeded, so every
//! write receives a canonical polygon. Each write is a single atomic operation.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::farm::{Farm, FarmSummary};
use anyhow::Result;
use async_trait::async_trait;
use farmgeo_geometry::Polygon;

#[async_trait]
pub trait FarmStore: Send + Sync {
	/// Stores a new farm and returns its id.
	async fn insert(&self, name: &str, area: &Polygon) -> Result<i64>;

	async fn get(&self, id: i64) -> Result<Option<Farm>>;

	/// All farms, ordered by id.
	async fn list(&self) -> Result<Vec<FarmSummary>>;

	/// Overwrites name and area. Returns `false` if `id` does not exist.
	async fn replace(&self, id: i64, name: &str, area: &Polygon) -> Result<bool>;

	/// Returns `false` if `id` does not exist.
	async fn remove(&self, id: i64) -> Result<bool>;
}
