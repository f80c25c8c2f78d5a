//! Interactive polygon capture over a map canvas.
//!
//! The host windowing stack delivers classified pointer events
//! ([`events::PointerEvent`]) to a [`session::CaptureSession`], which turns
//! them into a set of closed polygon rings while issuing drawing commands to
//! an injected [`canvas::Canvas`] collaborator. Base-map rendering, borders,
//! and coordinate transforms stay on the host side.

pub mod canvas;
pub mod events;
pub mod session;

pub use canvas::{Canvas, DrawCommand, ElementId, HeadlessCanvas, ViewMode};
pub use events::{PointerButton, PointerEvent};
pub use session::{CaptureConfig, CaptureError, CaptureSession};
