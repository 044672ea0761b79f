// Data model of the geometry core: vertices in both axis orders, the reference
// system tag, validated rings with their shell/hole role, and polygons.

mod coordinates;
mod polygon;
mod ring;
mod srid;

pub use coordinates::*;
pub use polygon::*;
pub use ring::*;
pub use srid::*;
