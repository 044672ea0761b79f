use super::Coordinates;
use crate::{GeometryResult, close_ring, signed_area, validate_ring};
use std::fmt::Debug;

/// Traversal direction of a ring, derived from the sign of its shoelace sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
	Clockwise,
	CounterClockwise,
}

/// Position of a ring inside a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingRole {
	/// Exterior boundary, wound counterclockwise once normalized.
	Shell,
	/// Excluded interior region, wound clockwise once normalized.
	Hole,
}

/// A closed, simple loop of at least four vertices whose first and last vertex are equal.
///
/// The only way to obtain a `Ring` is [`Ring::new`], which closes and validates the
/// input, so every `Ring` in circulation satisfies those invariants.
#[derive(Clone, PartialEq)]
pub struct Ring(Vec<Coordinates>);

impl Ring {
	/// Closes `vertices` if needed and checks that the result is a simple ring.
	pub fn new(vertices: Vec<Coordinates>) -> GeometryResult<Ring> {
		let closed = close_ring(vertices);
		validate_ring(&closed)?;
		Ok(Ring(closed))
	}

	#[must_use]
	pub fn coordinates(&self) -> &[Coordinates] {
		&self.0
	}

	#[must_use]
	pub fn into_coordinates(self) -> Vec<Coordinates> {
		self.0
	}

	/// Number of vertices, including the closing one.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Signed planar area. Positive for counterclockwise rings, negative for clockwise ones.
	#[must_use]
	pub fn signed_area(&self) -> f64 {
		signed_area(&self.0)
	}

	#[must_use]
	pub fn winding(&self) -> Winding {
		if self.signed_area() > 0.0 {
			Winding::CounterClockwise
		} else {
			Winding::Clockwise
		}
	}

	/// Returns the same loop traversed in the opposite direction.
	///
	/// Reversing a closed sequence keeps it closed, so no re-validation is needed.
	#[must_use]
	pub fn reversed(&self) -> Ring {
		Ring(self.0.iter().rev().copied().collect())
	}
}

impl Debug for Ring {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

/// A ring together with its role in the polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedRing {
	pub role: RingRole,
	pub ring: Ring,
}

impl TaggedRing {
	#[must_use]
	pub fn new(role: RingRole, ring: Ring) -> Self {
		Self { role, ring }
	}
}
