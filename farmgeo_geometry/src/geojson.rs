//! GeoJSON interchange for polygons.
//!
//! Only the `Polygon` geometry type is understood, either bare or wrapped in a
//! `Feature` whose `properties.name` carries the boundary's display name.
//! Positions are `[lng, lat]`, which matches the internal `x`/`y` order.

use crate::{Coordinates, GeometryError, GeometryResult, Polygon, Srid, build_polygon_from_rings};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// A GeoJSON `Polygon` geometry object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonGeometry {
	#[serde(rename = "type")]
	pub geometry_type: String,
	pub coordinates: Vec<Vec<Vec<f64>>>,
}

/// A GeoJSON `Feature` holding a polygon and an optional name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
	#[serde(rename = "type")]
	pub feature_type: String,
	pub geometry: GeoJsonGeometry,
	#[serde(default)]
	pub properties: Option<FeatureProperties>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
}

impl GeoJsonGeometry {
	/// Runs the rings through the full normalization pipeline.
	pub fn into_polygon(self, srid: Srid) -> GeometryResult<Polygon> {
		build_polygon_from_rings(self.into_rings()?, srid)
	}

	/// Rebuilds a polygon that was written by [`Polygon::to_geojson`], keeping
	/// the stored ring order.
	pub fn into_canonical_polygon(self, srid: Srid) -> GeometryResult<Polygon> {
		Polygon::from_canonical_rings(self.into_rings()?, srid)
	}

	fn into_rings(self) -> GeometryResult<Vec<Vec<Coordinates>>> {
		if self.geometry_type != "Polygon" {
			return Err(GeometryError::invalid_geojson(format!(
				"only Polygon geometries are supported, got '{}'",
				self.geometry_type
			)));
		}
		self
			.coordinates
			.into_iter()
			.map(|ring| ring.into_iter().map(position).collect::<GeometryResult<Vec<_>>>())
			.collect()
	}
}

impl GeoJsonFeature {
	#[must_use]
	pub fn name(&self) -> Option<&str> {
		self.properties.as_ref().and_then(|p| p.name.as_deref())
	}
}

/// `[lng, lat]` with an optional altitude, which is dropped.
fn position(values: Vec<f64>) -> GeometryResult<Coordinates> {
	match values.as_slice() {
		[lng, lat, ..] => Ok(Coordinates::new(*lng, *lat)),
		_ => Err(GeometryError::invalid_geojson(format!(
			"a position needs at least 2 numbers, got {}",
			values.len()
		))),
	}
}

/// Parses a GeoJSON `Polygon` or `Feature` and runs its rings through the full
/// normalization pipeline.
///
/// Returns the feature's `properties.name`, if any, next to the polygon.
pub fn parse_polygon_geojson(json: &str, srid: Srid) -> GeometryResult<(Option<String>, Polygon)> {
	let value: Value = serde_json::from_str(json).map_err(|e| GeometryError::invalid_geojson(e.to_string()))?;

	let (name, geometry) = match value.get("type").and_then(Value::as_str) {
		Some("Feature") => {
			let feature: GeoJsonFeature = from_value(value)?;
			(feature.name().map(str::to_string), feature.geometry)
		}
		Some("Polygon") => (None, from_value(value)?),
		Some(other) => {
			return Err(GeometryError::invalid_geojson(format!(
				"expected a Polygon or a Feature, got '{other}'"
			)));
		}
		None => return Err(GeometryError::invalid_geojson("missing \"type\" member")),
	};

	Ok((name, geometry.into_polygon(srid)?))
}

fn from_value<T: DeserializeOwned>(value: Value) -> GeometryResult<T> {
	serde_json::from_value(value).map_err(|e| GeometryError::invalid_geojson(e.to_string()))
}

impl Polygon {
	/// The polygon as a GeoJSON geometry, rings in stored order.
	#[must_use]
	pub fn to_geojson(&self) -> GeoJsonGeometry {
		GeoJsonGeometry {
			geometry_type: String::from("Polygon"),
			coordinates: self
				.rings()
				.iter()
				.map(|tagged| tagged.ring.coordinates().iter().map(|c| vec![c.x(), c.y()]).collect())
				.collect(),
		}
	}

	/// The polygon wrapped in a `Feature` with `properties.name` set.
	#[must_use]
	pub fn to_geojson_feature(&self, name: Option<&str>) -> GeoJsonFeature {
		GeoJsonFeature {
			feature_type: String::from("Feature"),
			geometry: self.to_geojson(),
			properties: Some(FeatureProperties {
				name: name.map(str::to_string),
			}),
		}
	}
}
