use crate::{Coordinates, Polygon, RingRole, TaggedRing, Winding};
use itertools::Itertools;

/// Signed area of a vertex loop via the shoelace formula, wrapping from the last
/// vertex back to the first.
///
/// Positive means counterclockwise, negative clockwise. For a closed sequence the
/// wrap-around pair is the zero-length closing edge and contributes nothing.
pub fn signed_area(coords: &[Coordinates]) -> f64 {
	coords
		.iter()
		.circular_tuple_windows()
		.map(|(p1, p2)| p1.x() * p2.y() - p2.x() * p1.y())
		.sum::<f64>()
		/ 2.0
}

/// Rewinds the shell counterclockwise and every hole clockwise.
///
/// Each ring is reversed only if the sign of its area disagrees with its role, so
/// applying this twice gives the same result as applying it once. The reference
/// system tag is carried over unchanged.
pub fn normalize_orientation(polygon: Polygon) -> Polygon {
	let (srid, rings) = polygon.into_parts();
	Polygon::from_tagged_rings(srid, rings.into_iter().map(orient_ring).collect())
}

fn orient_ring(tagged: TaggedRing) -> TaggedRing {
	let area = tagged.ring.signed_area();
	debug_assert!(area != 0.0, "validated rings never have zero area");

	let wanted = match tagged.role {
		RingRole::Shell => Winding::CounterClockwise,
		RingRole::Hole => Winding::Clockwise,
	};
	if tagged.ring.winding() == wanted {
		return tagged;
	}

	log::debug!("reversing {:?} ring with signed area {area}", tagged.role);
	TaggedRing::new(tagged.role, tagged.ring.reversed())
}
