use super::FarmStore;
use crate::farm::{Farm, FarmSummary};
use anyhow::Result;
use async_trait::async_trait;
use farmgeo_geometry::Polygon;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Keeps farms in memory. Used when no database is configured.
#[derive(Default)]
pub struct MemoryStore {
	inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
	last_id: i64,
	farms: BTreeMap<i64, Farm>,
}

impl MemoryStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl FarmStore for MemoryStore {
	async fn insert(&self, name: &str, area: &Polygon) -> Result<i64> {
		let mut inner = self.inner.write().await;
		inner.last_id += 1;
		let id = inner.last_id;
		inner.farms.insert(
			id,
			Farm {
				id,
				name: name.to_string(),
				area: area.clone(),
			},
		);
		Ok(id)
	}

	async fn get(&self, id: i64) -> Result<Option<Farm>> {
		Ok(self.inner.read().await.farms.get(&id).cloned())
	}

	async fn list(&self) -> Result<Vec<FarmSummary>> {
		Ok(self.inner.read().await.farms.values().map(Farm::summary).collect())
	}

	async fn replace(&self, id: i64, name: &str, area: &Polygon) -> Result<bool> {
		let mut inner = self.inner.write().await;
		let Some(farm) = inner.farms.get_mut(&id) else {
			return Ok(false);
		};
		farm.name = name.to_string();
		farm.area = area.clone();
		Ok(true)
	}

	async fn remove(&self, id: i64) -> Result<bool> {
		Ok(self.inner.write().await.farms.remove(&id).is_some())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::tests::exercise_store;

	#[tokio::test]
	async fn behaves_like_a_store() -> Result<()> {
		exercise_store(&MemoryStore::new()).await
	}
}
