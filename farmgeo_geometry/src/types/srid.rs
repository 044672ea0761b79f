use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Coordinate reference system identifier attached to every polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Srid(pub u32);

impl Srid {
	/// Geographic longitude/latitude on the WGS84 ellipsoid (EPSG:4326).
	pub const WGS84: Srid = Srid(4326);

	#[must_use]
	pub fn code(&self) -> u32 {
		self.0
	}
}

impl Default for Srid {
	fn default() -> Self {
		Srid::WGS84
	}
}

impl Display for Srid {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<u32> for Srid {
	fn from(value: u32) -> Self {
		Srid(value)
	}
}
