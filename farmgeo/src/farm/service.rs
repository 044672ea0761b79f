use super::{DEFAULT_NAME, Farm, FarmError, FarmInput, FarmSummary, MAX_NAME_LENGTH};
use crate::store::FarmStore;
use anyhow::{Result, bail};
use farmgeo_geometry::{GeoJsonFeature, LatLng, Polygon, Srid, parse_polygon_geojson, polygon_from_lat_lng};
use std::sync::Arc;

/// Creates, reads and edits farms.
///
/// Every boundary is turned into a canonical [`Polygon`] before anything is
/// written, so a rejected request leaves the store untouched.
#[derive(Clone)]
pub struct FarmService {
	store: Arc<dyn FarmStore>,
	srid: Srid,
}

impl FarmService {
	pub fn new(store: Arc<dyn FarmStore>, srid: Srid) -> Self {
		FarmService { store, srid }
	}

	#[must_use]
	pub fn srid(&self) -> Srid {
		self.srid
	}

	pub async fn create(&self, input: FarmInput) -> Result<Farm> {
		let name = checked_name(input.name)?.unwrap_or_else(|| DEFAULT_NAME.to_string());
		let area = self.build_area(&input.coordinates)?;
		self.insert(name, area).await
	}

	pub async fn get(&self, id: i64) -> Result<Option<Farm>> {
		self.store.get(id).await
	}

	pub async fn list(&self) -> Result<Vec<FarmSummary>> {
		self.store.list().await
	}

	/// Replaces the boundary of farm `id`. Without a name in `input` the stored name is kept.
	pub async fn update(&self, id: i64, input: FarmInput) -> Result<()> {
		let Some(existing) = self.store.get(id).await? else {
			bail!(FarmError::NotFound { id });
		};

		let name = checked_name(input.name)?.unwrap_or(existing.name);
		let area = self.build_area(&input.coordinates)?;

		if !self.store.replace(id, &name, &area).await? {
			bail!(FarmError::NotFound { id });
		}
		log::info!("updated farm {id} '{name}'");
		Ok(())
	}

	/// Returns `false` if there was no farm with this id.
	pub async fn delete(&self, id: i64) -> Result<bool> {
		let removed = self.store.remove(id).await?;
		if removed {
			log::info!("deleted farm {id}");
		}
		Ok(removed)
	}

	/// Creates a farm from a GeoJSON `Polygon` or `Feature`.
	pub async fn import_geojson(&self, json: &str) -> Result<Farm> {
		let (name, area) = parse_polygon_geojson(json, self.srid)?;
		let name = checked_name(name)?.unwrap_or_else(|| DEFAULT_NAME.to_string());
		self.insert(name, area).await
	}

	pub async fn export_geojson(&self, id: i64) -> Result<Option<GeoJsonFeature>> {
		let farm = self.store.get(id).await?;
		Ok(farm.map(|farm| farm.area.to_geojson_feature(Some(&farm.name))))
	}

	fn build_area(&self, coordinates: &[LatLng]) -> Result<Polygon> {
		polygon_from_lat_lng(coordinates, self.srid).map_err(|e| {
			log::warn!("rejected boundary with {} vertices: {e}", coordinates.len());
			e.into()
		})
	}

	async fn insert(&self, name: String, area: Polygon) -> Result<Farm> {
		let id = self.store.insert(&name, &area).await?;
		log::info!("created farm {id} '{name}'");
		Ok(Farm { id, name, area })
	}
}

fn checked_name(name: Option<String>) -> Result<Option<String>, FarmError> {
	match name {
		Some(name) if name.chars().count() > MAX_NAME_LENGTH => Err(FarmError::NameTooLong {
			len: name.chars().count(),
		}),
		name => Ok(name),
	}
}
