use serde::{Deserialize, Serialize};

/// A point in whatever planar coordinate system the host map uses
/// (longitude/latitude, easting/northing, ...). The capture core only ever
/// compares coordinates for equality when closing a ring; it never validates
/// or transforms them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A finalized polygon ring: first vertex equals the last, with at least
/// three distinct vertices before closure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedPolygon {
    pub vertices: Vec<Coordinate>,
}

impl CompletedPolygon {
    /// Vertex count including the closing vertex.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: "#c43030".to_string(),
            size: 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "#2f8f4e".to_string(),
            width: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub color: String,
    pub font_size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: "#4a8fd4".to_string(),
            font_size: 9.0,
        }
    }
}
