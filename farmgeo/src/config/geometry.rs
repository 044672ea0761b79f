use farmgeo_geometry::Srid;
use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeometryConfig {
	/// Reference system every stored polygon is tagged with. Defaults to 4326 (WGS84).
	#[serde(default)]
	pub srid: Option<Srid>,
}

impl GeometryConfig {
	#[must_use]
	pub fn srid(&self) -> Srid {
		self.srid.unwrap_or_default()
	}
}
