use farmgeo_geometry::{LatLng, Polygon};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Unnamed Farm";
pub const MAX_NAME_LENGTH: usize = 200;

/// A stored farm with its canonical boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Farm {
	pub id: i64,
	pub name: String,
	pub area: Polygon,
}

/// Body of create and update requests.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FarmInput {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub coordinates: Vec<LatLng>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FarmSummary {
	pub id: i64,
	pub name: String,
}

/// A farm as shown to clients: the shell vertices in stored order, as `lat`/`lng` pairs.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FarmDetails {
	pub id: i64,
	pub name: String,
	pub coordinates: Vec<LatLng>,
}

impl Farm {
	#[must_use]
	pub fn summary(&self) -> FarmSummary {
		FarmSummary {
			id: self.id,
			name: self.name.clone(),
		}
	}

	#[must_use]
	pub fn details(&self) -> FarmDetails {
		FarmDetails {
			id: self.id,
			name: self.name.clone(),
			coordinates: self.area.shell().coordinates().iter().map(|c| c.to_lat_lng()).collect(),
		}
	}
}
