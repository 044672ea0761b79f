use crate::GeometryError;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A vertex in internal axis order: `x` is the longitude, `y` the latitude.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.0[0].is_finite() && self.0[1].is_finite()
	}

	#[must_use]
	pub fn to_lat_lng(&self) -> LatLng {
		LatLng {
			lat: self.y(),
			lng: self.x(),
		}
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

/// A vertex as it crosses the request boundary: latitude first.
///
/// Converting into [`Coordinates`] is the only place where the axis order flips.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
	pub lat: f64,
	pub lng: f64,
}

impl LatLng {
	#[must_use]
	pub fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}
}

impl TryFrom<LatLng> for Coordinates {
	type Error = GeometryError;

	fn try_from(value: LatLng) -> Result<Self, Self::Error> {
		let coordinates = Coordinates::new(value.lng, value.lat);
		if coordinates.is_finite() {
			Ok(coordinates)
		} else {
			Err(GeometryError::InvalidCoordinate {
				lat: value.lat,
				lng: value.lng,
			})
		}
	}
}

impl From<Coordinates> for LatLng {
	fn from(value: Coordinates) -> Self {
		value.to_lat_lng()
	}
}
