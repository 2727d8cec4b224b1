//! Pure geometry: how each element kind becomes a stroke-only vector primitive.

mod arrowhead;
mod primitives;

pub use arrowhead::{MARKER_HEIGHT, MARKER_REF, MARKER_TRIANGLE, MARKER_WIDTH, arrowhead};
pub use primitives::{
    LineCap, Primitive, PrimitiveGeometry, bounding_box, diamond, primitive_for, star, triangle,
};
