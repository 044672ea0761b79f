use crate::Coordinates;

/// Appends a copy of the first vertex unless the sequence already ends on it.
///
/// Repeated vertices elsewhere are left alone, and an empty input stays empty so
/// the validator can report it.
pub fn close_ring(mut vertices: Vec<Coordinates>) -> Vec<Coordinates> {
	if let (Some(first), Some(last)) = (vertices.first(), vertices.last())
		&& first != last
	{
		let first = *first;
		vertices.push(first);
	}
	vertices
}
