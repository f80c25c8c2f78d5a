//! The rendering collaborator seam.
//!
//! The capture core never touches pixels or windowing objects. It issues
//! drawing commands through [`Canvas`] and holds only the opaque
//! [`ElementId`] handles it gets back, so it can remove elements later.
//! Commands are not assumed to take effect synchronously beyond the
//! guarantee that a subsequent `request_refresh` reflects all prior ones.

use maplasso_shared::models::{Coordinate, LineStyle, PointStyle, TextStyle};
use serde::{Deserialize, Serialize};

/// Opaque handle to one rendered visual artifact (a point marker, a line
/// strip, or a text label). Minted by the canvas implementation; the capture
/// core stores it only to ask for removal later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(u64);

impl ElementId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Current interaction mode of the host view. Clicks arriving while the view
/// is zooming or panning must not reach the capture state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Normal,
    Zoom,
    Pan,
}

/// Abstract capability set of the rendering/windowing collaborator.
///
/// Implementations own the actual display state. Each draw call returns a
/// fresh handle; `remove` takes a previously issued handle. Removal order is
/// not significant.
pub trait Canvas {
    fn draw_point(&mut self, at: Coordinate, style: &PointStyle) -> ElementId;

    fn draw_line(&mut self, points: &[Coordinate], style: &LineStyle) -> ElementId;

    fn draw_text(&mut self, at: Coordinate, text: &str, style: &TextStyle) -> ElementId;

    fn remove(&mut self, id: ElementId);

    fn request_refresh(&mut self);

    fn view_mode(&self) -> ViewMode;
}

/// One recorded drawing command, as seen by [`HeadlessCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Point { id: ElementId, at: Coordinate },
    Line { id: ElementId, points: Vec<Coordinate> },
    Text { id: ElementId, at: Coordinate, text: String },
    Remove { id: ElementId },
    Refresh,
}

/// In-memory canvas that records every command and mints sequential handles.
///
/// Used for headless capture sessions and for tests: assertions can inspect
/// the full command log, the set of still-live elements, and the refresh
/// count without any windowing backend.
#[derive(Debug, Default)]
pub struct HeadlessCanvas {
    next_id: u64,
    mode: ViewMode,
    log: Vec<DrawCommand>,
}

impl HeadlessCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Full command log in issue order.
    pub fn log(&self) -> &[DrawCommand] {
        &self.log
    }

    /// Handles that were drawn and not yet removed.
    pub fn live_elements(&self) -> Vec<ElementId> {
        let mut live = Vec::new();
        for cmd in &self.log {
            match cmd {
                DrawCommand::Point { id, .. }
                | DrawCommand::Line { id, .. }
                | DrawCommand::Text { id, .. } => live.push(*id),
                DrawCommand::Remove { id } => live.retain(|e| e != id),
                DrawCommand::Refresh => {}
            }
        }
        live
    }

    pub fn refresh_count(&self) -> usize {
        self.log
            .iter()
            .filter(|c| matches!(c, DrawCommand::Refresh))
            .count()
    }

    fn mint(&mut self) -> ElementId {
        let id = ElementId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Canvas for HeadlessCanvas {
    fn draw_point(&mut self, at: Coordinate, _style: &PointStyle) -> ElementId {
        let id = self.mint();
        self.log.push(DrawCommand::Point { id, at });
        id
    }

    fn draw_line(&mut self, points: &[Coordinate], _style: &LineStyle) -> ElementId {
        let id = self.mint();
        self.log.push(DrawCommand::Line {
            id,
            points: points.to_vec(),
        });
        id
    }

    fn draw_text(&mut self, at: Coordinate, text: &str, _style: &TextStyle) -> ElementId {
        let id = self.mint();
        self.log.push(DrawCommand::Text {
            id,
            at,
            text: text.to_string(),
        });
        id
    }

    fn remove(&mut self, id: ElementId) {
        self.log.push(DrawCommand::Remove { id });
    }

    fn request_refresh(&mut self) {
        self.log.push(DrawCommand::Refresh);
    }

    fn view_mode(&self) -> ViewMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplasso_shared::models::PointStyle;

    #[test]
    fn test_headless_canvas_mints_unique_handles() {
        let mut canvas = HeadlessCanvas::new();
        let style = PointStyle::default();
        let a = canvas.draw_point(Coordinate::new(0.0, 0.0), &style);
        let b = canvas.draw_point(Coordinate::new(1.0, 1.0), &style);
        assert_ne!(a, b);
        assert_ne!(a.raw(), b.raw());
    }

    #[test]
    fn test_headless_canvas_tracks_live_elements() {
        let mut canvas = HeadlessCanvas::new();
        let style = PointStyle::default();
        let a = canvas.draw_point(Coordinate::new(0.0, 0.0), &style);
        let b = canvas.draw_point(Coordinate::new(1.0, 1.0), &style);
        canvas.remove(a);
        assert_eq!(canvas.live_elements(), vec![b]);
    }

    #[test]
    fn test_headless_canvas_counts_refreshes() {
        let mut canvas = HeadlessCanvas::new();
        canvas.request_refresh();
        canvas.request_refresh();
        assert_eq!(canvas.refresh_count(), 2);
    }

    #[test]
    fn test_headless_canvas_view_mode_settable() {
        let mut canvas = HeadlessCanvas::new();
        assert_eq!(canvas.view_mode(), ViewMode::Normal);
        canvas.set_view_mode(ViewMode::Pan);
        assert_eq!(canvas.view_mode(), ViewMode::Pan);
    }
}
