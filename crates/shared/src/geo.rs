//! Ring geometry helpers.
//!
//! A ring is closed when its first and last vertices coincide exactly; the
//! capture core appends a copy of the first vertex on finish, so equality
//! (not tolerance) is the right test.

use crate::models::Coordinate;

/// Minimum vertex count before a polygon can be finished.
pub const MIN_RING_VERTICES: usize = 3;

/// Format a coordinate for on-canvas annotation, fixed to 4 decimal places.
pub fn format_coord(c: Coordinate) -> String {
    format!("({:.4}, {:.4})", c.x, c.y)
}

/// Whether the vertex sequence forms a closed ring (first equals last).
/// Empty and single-vertex sequences are not rings.
pub fn is_closed(points: &[Coordinate]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => points.len() > 1 && first == last,
        _ => false,
    }
}
