//! Classified pointer events.
//!
//! A plain immutable record replaces the live windowing-backend event object:
//! the host classifies button identity and the double-click flag, the session
//! queries the view mode through [`crate::canvas::Canvas::view_mode`].
//! Coordinates are carried through unvalidated; whether a click landed inside
//! the plotted data region is the host's concern.

use maplasso_shared::models::Coordinate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub button: Option<PointerButton>,
    pub double_click: bool,
    pub coord: Coordinate,
}

impl PointerEvent {
    pub fn primary(coord: Coordinate) -> Self {
        Self {
            button: Some(PointerButton::Primary),
            double_click: false,
            coord,
        }
    }

    pub fn secondary(coord: Coordinate) -> Self {
        Self {
            button: Some(PointerButton::Secondary),
            double_click: false,
            coord,
        }
    }

    /// Some windowing backends deliver a double-click as a primary-button
    /// press with the double-click flag set; the constructor mirrors that.
    pub fn double_click(coord: Coordinate) -> Self {
        Self {
            button: Some(PointerButton::Primary),
            double_click: true,
            coord,
        }
    }
}
