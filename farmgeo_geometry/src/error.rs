use thiserror::Error;

/// Reasons why a vertex list could not become a canonical polygon.
///
/// All variants describe malformed caller input. None of them is retryable and
/// none is fatal to the process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
	#[error("need at least 3 distinct coordinates to form a polygon, got {distinct}")]
	InsufficientVertices { distinct: usize },

	#[error("invalid polygon (self-intersection or other geometry error): {reason}")]
	SelfIntersecting { reason: String },

	#[error("polygon has no exterior ring")]
	NoExteriorRing,

	#[error("coordinate (lat: {lat}, lng: {lng}) is not a finite number")]
	InvalidCoordinate { lat: f64, lng: f64 },

	#[error("invalid GeoJSON: {reason}")]
	InvalidGeoJson { reason: String },
}

impl GeometryError {
	pub(crate) fn self_intersecting(reason: impl Into<String>) -> Self {
		GeometryError::SelfIntersecting { reason: reason.into() }
	}

	pub(crate) fn invalid_geojson(reason: impl Into<String>) -> Self {
		GeometryError::InvalidGeoJson { reason: reason.into() }
	}
}

pub type GeometryResult<T> = Result<T, GeometryError>;
