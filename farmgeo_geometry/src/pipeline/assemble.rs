use crate::{GeometryError, GeometryResult, Polygon, Ring, Srid};

/// Groups a shell and its holes into a polygon tagged with `srid`.
///
/// Holes are not checked for containment in the shell or for overlap with each
/// other, and winding is left as given.
pub fn assemble_polygon(shell: Option<Ring>, holes: Vec<Ring>, srid: Srid) -> GeometryResult<Polygon> {
	let shell = shell.ok_or(GeometryError::NoExteriorRing)?;
	log::debug!(
		"assemble polygon: srid={srid}, shell={} vertices, {} holes",
		shell.len(),
		holes.len()
	);
	Ok(Polygon::from_parts(srid, shell, holes))
}
