//! Geometry core of FarmGeo.
//!
//! Turns user-drawn boundary vertex lists into canonical polygons:
//!
//! 1. [`close_ring`] makes sure the last vertex repeats the first,
//! 2. [`validate_ring`] rejects degenerate and self-touching rings,
//! 3. [`assemble_polygon`] groups a shell and its holes under an [`Srid`],
//! 4. [`normalize_orientation`] winds the shell counterclockwise and holes clockwise.
//!
//! [`build_polygon`] and [`polygon_from_lat_lng`] run all four stages. Every stage is
//! pure and works on owned data, so a failure never leaves a half-built [`Polygon`] behind.
//!
//! ```rust
//! use farmgeo_geometry::*;
//!
//! let input = [
//! 	LatLng::new(0.0, 0.0),
//! 	LatLng::new(1.0, 0.0),
//! 	LatLng::new(1.0, 1.0),
//! 	LatLng::new(0.0, 1.0),
//! ];
//! let polygon = polygon_from_lat_lng(&input, Srid::WGS84).unwrap();
//! assert_eq!(polygon.shell().len(), 5);
//! assert_eq!(polygon.shell().signed_area(), 1.0);
//! ```

mod error;
pub mod geojson;
mod pipeline;
mod types;

pub use error::*;
pub use geojson::{FeatureProperties, GeoJsonFeature, GeoJsonGeometry, parse_polygon_geojson};
pub use pipeline::*;
pub use types::*;
