//! The polygon capture state machine.
//!
//! One session owns the in-progress vertex list, the handles of everything it
//! has drawn, and the collection of finished polygons. It runs synchronously
//! inside the host's event handler: each pointer event is fully processed
//! (state mutated, drawing commands issued, refresh requested) before the
//! next one arrives.

use maplasso_shared::geo::{self, MIN_RING_VERTICES};
use maplasso_shared::models::{
    Coordinate, CompletedPolygon, LineStyle, PointStyle, TextStyle,
};
use tracing::{debug, info, trace, warn};

use crate::canvas::{Canvas, ElementId, ViewMode};
use crate::events::{PointerButton, PointerEvent};

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("need at least {MIN_RING_VERTICES} points to form a polygon (have {have})")]
    InsufficientVertices { have: usize },
}

/// Construction-time settings for a capture session.
#[derive(Debug, Clone, Default)]
pub struct CaptureConfig {
    /// Annotate the most recently added vertex with its coordinates
    /// (4 decimal places). At most one annotation is shown at a time.
    pub show_coordinates: bool,
    pub point_style: PointStyle,
    pub line_style: LineStyle,
    pub text_style: TextStyle,
}

/// Interactive polygon capture over an injected canvas.
///
/// The session is the sole owner and mutator of its vertex list and handle
/// list. The canvas owns actual display state; the session only issues
/// commands to it.
pub struct CaptureSession<C: Canvas> {
    canvas: C,
    config: CaptureConfig,
    points: Vec<Coordinate>,
    drawn: Vec<ElementId>,
    // At most one outstanding coordinate label; replaced, never accumulated.
    coord_label: Option<ElementId>,
    polygons: Vec<CompletedPolygon>,
}

impl<C: Canvas> CaptureSession<C> {
    pub fn new(canvas: C, config: CaptureConfig) -> Self {
        Self {
            canvas,
            config,
            points: Vec::new(),
            drawn: Vec::new(),
            coord_label: None,
            polygons: Vec::new(),
        }
    }

    /// Dispatch one classified pointer event, in fixed precedence order.
    ///
    /// Double-click is checked before single-button dispatch: backends that
    /// report a double-click as a primary press with the flag set would
    /// otherwise register a spurious vertex before clearing.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match self.canvas.view_mode() {
            ViewMode::Zoom | ViewMode::Pan => {
                trace!(?event, "click discarded during zoom/pan");
                return;
            }
            ViewMode::Normal => {}
        }

        if event.double_click {
            self.clear_polygon();
            return;
        }

        match event.button {
            Some(PointerButton::Primary) => self.add_point(event.coord),
            Some(PointerButton::Secondary) => {
                // Diagnostic for a too-short ring is emitted inside.
                let _ = self.finish_polygon();
            }
            None => {}
        }
    }

    /// Append a vertex and draw its marker. Always succeeds; coordinates are
    /// taken as-is, without bounds validation.
    pub fn add_point(&mut self, coord: Coordinate) {
        self.points.push(coord);
        let marker = self.canvas.draw_point(coord, &self.config.point_style);
        self.drawn.push(marker);

        if self.config.show_coordinates {
            if let Some(previous) = self.coord_label.take() {
                self.canvas.remove(previous);
            }
            let text = geo::format_coord(coord);
            let label = self.canvas.draw_text(coord, &text, &self.config.text_style);
            self.coord_label = Some(label);
        }

        self.canvas.request_refresh();
        debug!(x = coord.x, y = coord.y, total = self.points.len(), "vertex added");
    }

    /// Close the ring and record it in the polygon collection.
    ///
    /// With fewer than three vertices this is a diagnosed no-op: state is
    /// left untouched and the user can keep adding points.
    ///
    /// The vertex list is NOT cleared on success — the closing vertex stays
    /// appended, and a later `add_point` extends from the closed ring.
    /// Callers that want a fresh ring should call [`Self::clear_polygon`].
    pub fn finish_polygon(&mut self) -> Result<(), CaptureError> {
        if self.points.len() < MIN_RING_VERTICES {
            let have = self.points.len();
            warn!(have, "need at least {MIN_RING_VERTICES} points to form a polygon");
            return Err(CaptureError::InsufficientVertices { have });
        }

        let first = self.points[0];
        self.points.push(first);

        let line = self.canvas.draw_line(&self.points, &self.config.line_style);
        self.drawn.push(line);

        self.polygons.push(CompletedPolygon {
            vertices: self.points.clone(),
        });

        self.canvas.request_refresh();
        info!(
            vertices = self.points.len(),
            total_polygons = self.polygons.len(),
            "polygon finished"
        );
        Ok(())
    }

    /// Remove everything drawn for the in-progress capture and empty the
    /// vertex list. Safe to call with nothing drawn. Finished polygons in
    /// the collection are unaffected.
    pub fn clear_polygon(&mut self) {
        for id in self.drawn.drain(..) {
            self.canvas.remove(id);
        }
        if let Some(label) = self.coord_label.take() {
            self.canvas.remove(label);
        }
        self.points.clear();
        self.canvas.request_refresh();
        info!("polygon cleared");
    }

    /// Current vertex list, or `None` when nothing has been collected.
    pub fn polygon_points(&self) -> Option<&[Coordinate]> {
        if self.points.is_empty() {
            None
        } else {
            Some(&self.points)
        }
    }

    /// All polygons finished during this session, in completion order.
    pub fn polygons(&self) -> &[CompletedPolygon] {
        &self.polygons
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }
}
