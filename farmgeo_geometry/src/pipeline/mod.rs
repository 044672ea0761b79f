//! The normalization pipeline: close → validate → assemble → orient.
//!
//! Each stage is a free function over owned values. The end-to-end helpers below
//! only return a [`Polygon`] when every stage succeeded.

mod assemble;
mod close;
mod orientation;
mod validate;

pub use assemble::*;
pub use close::*;
pub use orientation::*;
pub use validate::*;

use crate::{Coordinates, GeometryError, GeometryResult, LatLng, Polygon, Ring, Srid};
use std::iter;

/// Validates `rings` (shell first, then holes) and assembles them, keeping the
/// winding of every ring exactly as given.
pub fn assemble_rings(rings: Vec<Vec<Coordinates>>, srid: Srid) -> GeometryResult<Polygon> {
	let mut rings = rings.into_iter().map(Ring::new);
	let shell = rings.next().transpose()?;
	let holes = rings.collect::<GeometryResult<Vec<_>>>()?;
	assemble_polygon(shell, holes, srid)
}

/// Runs the full create path over `rings`, the first of which is the shell.
pub fn build_polygon_from_rings(rings: Vec<Vec<Coordinates>>, srid: Srid) -> GeometryResult<Polygon> {
	assemble_rings(rings, srid).map(normalize_orientation)
}

/// Runs the full create path for one shell and its holes.
pub fn build_polygon(shell: Vec<Coordinates>, holes: Vec<Vec<Coordinates>>, srid: Srid) -> GeometryResult<Polygon> {
	build_polygon_from_rings(iter::once(shell).chain(holes).collect(), srid)
}

/// Builds a single-ring polygon from vertices in request order (`lat`, `lng`).
///
/// At least three coordinates are required before the ring is closed.
pub fn polygon_from_lat_lng(vertices: &[LatLng], srid: Srid) -> GeometryResult<Polygon> {
	let shell = vertices
		.iter()
		.map(|v| Coordinates::try_from(*v))
		.collect::<GeometryResult<Vec<_>>>()?;

	if shell.len() < 3 {
		log::debug!("rejecting boundary with {} coordinates", shell.len());
		return Err(GeometryError::InsufficientVertices {
			distinct: count_distinct(&shell),
		});
	}

	build_polygon(shell, Vec::new(), srid)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn lat_lng(list: &[(f64, f64)]) -> Vec<LatLng> {
		list.iter().map(|(lat, lng)| LatLng::new(*lat, *lng)).collect()
	}

	#[test]
	fn lot_a_end_to_end() {
		let input = lat_lng(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
		let polygon = polygon_from_lat_lng(&input, Srid::WGS84).unwrap();

		let shell = polygon.shell();
		assert_eq!(shell.len(), 5);
		assert_eq!(shell.coordinates().first(), shell.coordinates().last());
		assert_eq!(shell.signed_area(), 1.0);
		assert_eq!(polygon.srid(), Srid::WGS84);
		assert_eq!(polygon.hole_count(), 0);
	}

	#[test]
	fn two_coordinates_are_rejected() {
		let input = lat_lng(&[(0.0, 0.0), (1.0, 1.0)]);
		assert_eq!(
			polygon_from_lat_lng(&input, Srid::WGS84).unwrap_err(),
			GeometryError::InsufficientVertices { distinct: 2 }
		);
	}

	#[test]
	fn three_points_with_duplicate_are_rejected() {
		let input = lat_lng(&[(0.0, 0.0), (1.0, 1.0), (1.0, 1.0)]);
		assert_eq!(
			polygon_from_lat_lng(&input, Srid::WGS84).unwrap_err(),
			GeometryError::InsufficientVertices { distinct: 2 }
		);
	}

	#[test]
	fn already_closed_input_is_not_closed_twice() {
		let input = lat_lng(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (0.0, 0.0)]);
		let polygon = polygon_from_lat_lng(&input, Srid::WGS84).unwrap();
		assert_eq!(polygon.shell().len(), 4);
	}

	#[test]
	fn figure_eight_is_rejected() {
		let shell = [[0.0, 0.0], [2.0, 2.0], [2.0, 0.0], [0.0, 2.0], [0.0, 0.0]]
			.iter()
			.map(Coordinates::from)
			.collect();
		assert!(matches!(
			build_polygon(shell, vec![], Srid::WGS84),
			Err(GeometryError::SelfIntersecting { .. })
		));
	}

	#[test]
	fn invalid_hole_rejects_whole_polygon() {
		let shell = [[0.0, 0.0], [9.0, 0.0], [9.0, 9.0], [0.0, 9.0]].iter().map(Coordinates::from).collect();
		let hole = [[1.0, 1.0], [1.0, 1.0]].iter().map(Coordinates::from).collect();
		assert_eq!(
			build_polygon(shell, vec![hole], Srid::WGS84).unwrap_err(),
			GeometryError::InsufficientVertices { distinct: 1 }
		);
	}

	#[test]
	fn non_finite_input_is_rejected() {
		let input = lat_lng(&[(0.0, 0.0), (f64::NAN, 1.0), (1.0, 1.0)]);
		assert!(matches!(
			polygon_from_lat_lng(&input, Srid::WGS84),
			Err(GeometryError::InvalidCoordinate { .. })
		));
	}

	#[test]
	fn empty_ring_list_has_no_shell() {
		assert_eq!(
			build_polygon_from_rings(vec![], Srid::WGS84).unwrap_err(),
			GeometryError::NoExteriorRing
		);
	}

	#[test]
	fn assemble_rings_keeps_winding() {
		let cw: Vec<Coordinates> = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]].iter().map(Coordinates::from).collect();
		let polygon = assemble_rings(vec![cw.clone()], Srid::WGS84).unwrap();
		assert!(polygon.shell().signed_area() < 0.0);
		let polygon = build_polygon_from_rings(vec![cw], Srid::WGS84).unwrap();
		assert!(polygon.shell().signed_area() > 0.0);
	}

	#[test]
	fn huge_coordinates_are_rejected() {
		let shell = [[1e200, 1e200], [1e200, 2e200], [2e200, 2e200], [2e200, 1e200]]
			.iter()
			.map(Coordinates::from)
			.collect();
		assert!(matches!(
			build_polygon(shell, vec![], Srid::WGS84),
			Err(GeometryError::SelfIntersecting { .. })
		));
	}

	#[test]
	fn holes_are_oriented() {
		let shell = [[0.0, 0.0], [0.0, 9.0], [9.0, 9.0], [9.0, 0.0]].iter().map(Coordinates::from).collect();
		let hole = [[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 2.0]].iter().map(Coordinates::from).collect();
		let polygon = build_polygon(shell, vec![hole], Srid::WGS84).unwrap();
		assert!(polygon.shell().signed_area() > 0.0);
		assert!(polygon.holes().all(|h| h.signed_area() < 0.0));
	}
}
