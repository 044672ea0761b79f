//! SQLite backend.
//!
//! Polygons are written as GeoJSON geometry text in canonical orientation and
//! read back without normalizing them again.

use super::FarmStore;
use crate::farm::{Farm, FarmSummary};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use farmgeo_geometry::{GeoJsonGeometry, Polygon, Srid};
use log::trace;
use r2d2::Pool;
use r2d2_sqlite::{
	SqliteConnectionManager,
	rusqlite::{OptionalExtension, params},
};
use std::path::Path;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS farms (
	id INTEGER PRIMARY KEY AUTOINCREMENT,
	name TEXT NOT NULL,
	srid INTEGER NOT NULL,
	area TEXT NOT NULL
);";

pub struct SqliteStore {
	pool: Pool<SqliteConnectionManager>,
}

impl SqliteStore {
	/// Opens the database at `path`, creating the file and the `farms` table if needed.
	pub fn open_path(path: &Path) -> Result<SqliteStore> {
		trace!("open {path:?}");
		let manager = SqliteConnectionManager::file(path);
		let pool = Pool::builder()
			.max_size(10)
			.build(manager)
			.with_context(|| format!("opening farm database {path:?}"))?;
		SqliteStore::init(pool)
	}

	/// A private in-memory database. Only one connection is pooled, since every
	/// SQLite memory connection is a separate database.
	pub fn open_in_memory() -> Result<SqliteStore> {
		let pool = Pool::builder().max_size(1).build(SqliteConnectionManager::memory())?;
		SqliteStore::init(pool)
	}

	fn init(pool: Pool<SqliteConnectionManager>) -> Result<SqliteStore> {
		pool.get()?.execute_batch(SCHEMA).context("creating farms table")?;
		Ok(SqliteStore { pool })
	}
}

fn encode_area(area: &Polygon) -> Result<String> {
	Ok(serde_json::to_string(&area.to_geojson())?)
}

fn decode_area(id: i64, srid: u32, text: &str) -> Result<Polygon> {
	let geometry: GeoJsonGeometry =
		serde_json::from_str(text).with_context(|| format!("reading stored area of farm {id}"))?;
	// flattened to a plain message so it is reported as a server error
	geometry
		.into_canonical_polygon(Srid(srid))
		.map_err(|e| anyhow!("stored area of farm {id} is invalid: {e}"))
}

#[async_trait]
impl FarmStore for SqliteStore {
	async fn insert(&self, name: &str, area: &Polygon) -> Result<i64> {
		let conn = self.pool.get()?;
		conn.execute(
			"INSERT INTO farms (name, srid, area) VALUES (?1, ?2, ?3)",
			params![name, area.srid().code(), encode_area(area)?],
		)?;
		Ok(conn.last_insert_rowid())
	}

	async fn get(&self, id: i64) -> Result<Option<Farm>> {
		let row = self
			.pool
			.get()?
			.query_row("SELECT name, srid, area FROM farms WHERE id = ?1", params![id], |row| {
				Ok((row.get::<_, String>(0)?, row.get::<_, u32>(1)?, row.get::<_, String>(2)?))
			})
			.optional()?;

		row.map(|(name, srid, text)| -> Result<Farm> {
			Ok(Farm {
				id,
				name,
				area: decode_area(id, srid, &text)?,
			})
		})
		.transpose()
	}

	async fn list(&self) -> Result<Vec<FarmSummary>> {
		let conn = self.pool.get()?;
		let mut stmt = conn.prepare("SELECT id, name FROM farms ORDER BY id")?;
		let farms = stmt
			.query_map([], |row| {
				Ok(FarmSummary {
					id: row.get(0)?,
					name: row.get(1)?,
				})
			})?
			.collect::<Result<Vec<_>, _>>()?;
		Ok(farms)
	}

	async fn replace(&self, id: i64, name: &str, area: &Polygon) -> Result<bool> {
		let changed = self.pool.get()?.execute(
			"UPDATE farms SET name = ?1, srid = ?2, area = ?3 WHERE id = ?4",
			params![name, area.srid().code(), encode_area(area)?, id],
		)?;
		Ok(changed > 0)
	}

	async fn remove(&self, id: i64) -> Result<bool> {
		let changed = self.pool.get()?.execute("DELETE FROM farms WHERE id = ?1", params![id])?;
		Ok(changed > 0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::tests::{exercise_store, square};
	use tempfile::tempdir;

	#[tokio::test]
	async fn behaves_like_a_store() -> Result<()> {
		exercise_store(&SqliteStore::open_in_memory()?).await
	}

	#[tokio::test]
	async fn survives_reopening() -> Result<()> {
		let dir = tempdir()?;
		let path = dir.path().join("farms.sqlite");

		let id = SqliteStore::open_path(&path)?.insert("Lot A", &square(0.0, 0.0, 1.0)).await?;

		let store = SqliteStore::open_path(&path)?;
		let farm = store.get(id).await?.unwrap();
		assert_eq!(farm.name, "Lot A");
		assert_eq!(farm.area, square(0.0, 0.0, 1.0));
		Ok(())
	}

	#[tokio::test]
	async fn stored_orientation_is_not_changed() -> Result<()> {
		let store = SqliteStore::open_in_memory()?;
		// clockwise, as if written by an older tool
		store.pool.get()?.execute(
			"INSERT INTO farms (name, srid, area) VALUES ('old', 4326, ?1)",
			params![r#"{"type":"Polygon","coordinates":[[[0,0],[0,1],[1,1],[1,0],[0,0]]]}"#],
		)?;
		let farm = store.get(1).await?.unwrap();
		assert!(farm.area.shell().signed_area() < 0.0);
		Ok(())
	}

	#[tokio::test]
	async fn corrupt_area_is_an_error() -> Result<()> {
		let store = SqliteStore::open_in_memory()?;
		store.pool.get()?.execute(
			"INSERT INTO farms (name, srid, area) VALUES ('bad', 4326, ?1)",
			params![r#"{"type":"Polygon","coordinates":[[[0,0],[1,1]]]}"#],
		)?;
		let err = store.get(1).await.unwrap_err();
		assert!(err.to_string().starts_with("stored area of farm 1 is invalid"));
		assert!(err.downcast_ref::<farmgeo_geometry::GeometryError>().is_none());
		Ok(())
	}
}
