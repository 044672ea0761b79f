use super::*;
use crate::{GeometryResult, assemble_rings};
use std::fmt::Debug;

/// One shell plus zero or more holes, tagged with a coordinate reference system.
///
/// A `Polygon` has no mutators. Normalizing or editing it consumes the value and
/// produces a new one.
#[derive(Clone, PartialEq)]
pub struct Polygon {
	srid: Srid,
	rings: Vec<TaggedRing>,
}

impl Polygon {
	pub(crate) fn from_parts(srid: Srid, shell: Ring, holes: Vec<Ring>) -> Self {
		let mut rings = Vec::with_capacity(holes.len() + 1);
		rings.push(TaggedRing::new(RingRole::Shell, shell));
		rings.extend(holes.into_iter().map(|hole| TaggedRing::new(RingRole::Hole, hole)));
		Polygon { srid, rings }
	}

	/// `rings` must come from another polygon, so the first one is the shell.
	pub(crate) fn from_tagged_rings(srid: Srid, rings: Vec<TaggedRing>) -> Self {
		debug_assert!(rings.first().is_some_and(|r| r.role == RingRole::Shell));
		Polygon { srid, rings }
	}

	/// Rebuilds a polygon that was stored in canonical form.
	///
	/// The first ring is the shell. Rings are validated again, but their vertex
	/// order is kept exactly as stored.
	pub fn from_canonical_rings(rings: Vec<Vec<Coordinates>>, srid: Srid) -> GeometryResult<Polygon> {
		assemble_rings(rings, srid)
	}

	#[must_use]
	pub fn srid(&self) -> Srid {
		self.srid
	}

	#[must_use]
	pub fn shell(&self) -> &Ring {
		&self.rings[0].ring
	}

	pub fn holes(&self) -> impl Iterator<Item = &Ring> {
		self.rings[1..].iter().map(|tagged| &tagged.ring)
	}

	#[must_use]
	pub fn hole_count(&self) -> usize {
		self.rings.len() - 1
	}

	#[must_use]
	pub fn rings(&self) -> &[TaggedRing] {
		&self.rings
	}

	pub(crate) fn into_parts(self) -> (Srid, Vec<TaggedRing>) {
		(self.srid, self.rings)
	}

	/// Planar area of the shell minus the areas of its holes, independent of winding.
	#[must_use]
	pub fn area(&self) -> f64 {
		let shell = self.shell().signed_area().abs();
		self.holes().fold(shell, |sum, hole| sum - hole.signed_area().abs())
	}

	/// Whether the shell winds counterclockwise and every hole clockwise.
	#[must_use]
	pub fn is_normalized(&self) -> bool {
		self.rings.iter().all(|tagged| match tagged.role {
			RingRole::Shell => tagged.ring.winding() == Winding::CounterClockwise,
			RingRole::Hole => tagged.ring.winding() == Winding::Clockwise,
		})
	}
}

impl Debug for Polygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Polygon")
			.field("srid", &self.srid)
			.field("shell", self.shell())
			.field("holes", &self.holes().collect::<Vec<_>>())
			.finish()
	}
}
