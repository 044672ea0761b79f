//! Simplicity check for closed rings.
//!
//! A ring is simple when its boundary touches itself nowhere except at the shared
//! closing vertex. The check compares every pair of edges, which is quadratic but
//! fine for hand-drawn boundaries of a few hundred vertices.

use crate::{Coordinates, GeometryError, GeometryResult, signed_area};

/// Checks that `coords` forms a closed, simple ring with at least three distinct vertices.
///
/// Failure order: fewer than three distinct vertices before the closing one,
/// non-finite values, missing closure, zero-length edges, adjacent edges doubling
/// back, non-adjacent edges touching or crossing, an area that overflows or is zero.
pub fn validate_ring(coords: &[Coordinates]) -> GeometryResult<()> {
	let distinct = count_distinct(ring_body(coords));
	if distinct < 3 {
		return Err(GeometryError::InsufficientVertices { distinct });
	}

	if let Some(c) = coords.iter().find(|c| !c.is_finite()) {
		return Err(GeometryError::InvalidCoordinate { lat: c.y(), lng: c.x() });
	}

	if coords.first() != coords.last() {
		return Err(GeometryError::self_intersecting("ring is not closed"));
	}

	let edges: Vec<Edge> = coords.windows(2).map(|w| Edge(w[0], w[1])).collect();
	let n = edges.len();

	for (i, edge) in edges.iter().enumerate() {
		if edge.0 == edge.1 {
			return Err(GeometryError::self_intersecting(format!(
				"edge {i} has zero length (vertex {:?} is repeated)",
				edge.0
			)));
		}
	}

	for i in 0..n {
		let j = (i + 1) % n;
		if edges[i].doubles_back(&edges[j]) {
			return Err(GeometryError::self_intersecting(format!(
				"edges {i} and {j} overlap at vertex {:?}",
				edges[i].1
			)));
		}
	}

	for i in 0..n {
		for j in (i + 2)..n {
			// first and last edge share the closing vertex
			if i == 0 && j == n - 1 {
				continue;
			}
			if edges[i].touches(&edges[j]) {
				return Err(GeometryError::self_intersecting(format!("edges {i} and {j} intersect")));
			}
		}
	}

	let area = signed_area(coords);
	if !area.is_finite() {
		return Err(GeometryError::self_intersecting("ring area is not finite"));
	}
	if area == 0.0 {
		return Err(GeometryError::self_intersecting("ring encloses no area"));
	}

	log::trace!("ring with {} vertices is valid", coords.len());
	Ok(())
}

/// The vertices of a ring without its closing vertex.
fn ring_body(coords: &[Coordinates]) -> &[Coordinates] {
	match coords {
		[first, body @ .., last] if first == last => &coords[..=body.len()],
		_ => coords,
	}
}

/// Number of coordinate-distinct vertices in `coords`.
pub(crate) fn count_distinct(coords: &[Coordinates]) -> usize {
	let mut seen: Vec<&Coordinates> = Vec::with_capacity(coords.len());
	for c in coords {
		if !seen.contains(&c) {
			seen.push(c);
		}
	}
	seen.len()
}

#[derive(Clone, Copy, Debug)]
struct Edge(Coordinates, Coordinates);

impl Edge {
	/// For consecutive edges `self = a→b` and `next = b→d`: true when `d` lies on the
	/// ray from `b` back towards `a`, i.e. the boundary runs over itself.
	fn doubles_back(&self, next: &Edge) -> bool {
		let (a, b, d) = (self.0, self.1, next.1);
		if cross(a, b, d) != 0.0 {
			return false;
		}
		let dot = (a.x() - b.x()) * (d.x() - b.x()) + (a.y() - b.y()) * (d.y() - b.y());
		dot > 0.0
	}

	/// Closed-segment intersection test: shared endpoints and collinear overlaps count.
	fn touches(&self, other: &Edge) -> bool {
		let (p1, p2, q1, q2) = (self.0, self.1, other.0, other.1);

		let d1 = cross(q1, q2, p1);
		let d2 = cross(q1, q2, p2);
		let d3 = cross(p1, p2, q1);
		let d4 = cross(p1, p2, q2);

		if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0)) && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0)) {
			return true;
		}

		(d1 == 0.0 && within_box(q1, q2, p1))
			|| (d2 == 0.0 && within_box(q1, q2, p2))
			|| (d3 == 0.0 && within_box(p1, p2, q1))
			|| (d4 == 0.0 && within_box(p1, p2, q2))
	}
}

/// Z component of `(b - a) × (c - a)`. Positive when `c` is left of `a→b`.
fn cross(a: Coordinates, b: Coordinates, c: Coordinates) -> f64 {
	(b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x())
}

/// Whether `p`, already known to be collinear with `a→b`, lies within the segment.
fn within_box(a: Coordinates, b: Coordinates, p: Coordinates) -> bool {
	p.x() >= a.x().min(b.x()) && p.x() <= a.x().max(b.x()) && p.y() >= a.y().min(b.y()) && p.y() <= a.y().max(b.y())
}
