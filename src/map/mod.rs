//! World map surface: pointer-space to coordinate translation.
//!
//! The [`MapSurface`] is the interactive heart of the picker. It owns the
//! currently displayed [`Coordinate`], knows the rendered bounds of the map
//! once layout has happened, and translates pointer positions within those
//! bounds into coordinates (and coordinates back into a marker position).
//!
//! Two update paths are deliberately distinct:
//!
//! - [`MapSurface::pointer_select`] is the user-driven path. It produces a
//!   new coordinate and fires the selection callback.
//! - [`MapSurface::set_coordinate`] is the programmatic path. It moves the
//!   marker without notifying, so an orchestrator echoing state back into
//!   the map cannot create a feedback loop.

pub mod render;

#[cfg(test)]
mod tests;

use crate::coordinates::{Coordinate, CoordinateError};

/// Failure translating pointer positions on the map surface.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// Translation was attempted before the surface was laid out.
    #[error("map bounds are not known yet")]
    BoundsUnknown,
    /// Zero or negative area would make pointer translation divide by zero.
    #[error("map bounds must have positive area (got {width} x {height})")]
    DegenerateBounds { width: f64, height: f64 },
    /// The pointer position mapped outside the coordinate domain.
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

/// Rendered extent of the map surface in pointer units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    width: f64,
    height: f64,
}

impl SurfaceBounds {
    /// Bounds must enclose a positive area; fail fast otherwise.
    pub fn new(width: f64, height: f64) -> Result<Self, MapError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(MapError::DegenerateBounds { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Marker position inside the surface, in the same units as the bounds.
///
/// Screen Y grows downward while latitude grows northward, so the vertical
/// component is flipped relative to the normalized latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPosition {
    pub x: f64,
    pub y: f64,
}

type SelectCallback = Box<dyn FnMut(Coordinate)>;

/// Interactive widget state mapping pointer positions to coordinates.
pub struct MapSurface {
    bounds: Option<SurfaceBounds>,
    coordinate: Coordinate,
    on_select: Option<SelectCallback>,
}

impl MapSurface {
    /// Create a surface displaying `coordinate`, with bounds still unknown.
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            bounds: None,
            coordinate,
            on_select: None,
        }
    }

    /// Register the callback fired on every user-driven selection.
    pub fn set_on_select(&mut self, callback: impl FnMut(Coordinate) + 'static) {
        self.on_select = Some(Box::new(callback));
    }

    /// Record the rendered bounds after layout.
    pub fn set_bounds(&mut self, width: f64, height: f64) -> Result<(), MapError> {
        self.bounds = Some(SurfaceBounds::new(width, height)?);
        Ok(())
    }

    pub fn bounds(&self) -> Option<SurfaceBounds> {
        self.bounds
    }

    /// The coordinate currently displayed by the marker.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Translate a pointer position into a coordinate and select it.
    ///
    /// `x` runs left-to-right, `y` top-to-bottom, both within the rendered
    /// bounds. The top-left corner is (90°N, 180°W), the bottom-right corner
    /// (90°S, 180°E). Fires the selection callback with the new coordinate.
    pub fn pointer_select(&mut self, x: f64, y: f64) -> Result<Coordinate, MapError> {
        let bounds = self.bounds.ok_or(MapError::BoundsUnknown)?;

        let normalized_longitude = x / bounds.width();
        let normalized_latitude = 1.0 - y / bounds.height();
        let coordinate = Coordinate::from_normalized(normalized_latitude, normalized_longitude)?;

        self.coordinate = coordinate;
        if let Some(callback) = self.on_select.as_mut() {
            callback(coordinate);
        }
        Ok(coordinate)
    }

    /// Move the marker programmatically. Does not fire the callback.
    pub fn set_coordinate(&mut self, coordinate: Coordinate) {
        self.coordinate = coordinate;
    }

    /// Marker position derived from the displayed coordinate.
    ///
    /// `None` until bounds are known.
    pub fn marker_position(&self) -> Option<MarkerPosition> {
        let bounds = self.bounds?;
        Some(MarkerPosition {
            x: self.coordinate.normalized_longitude() * bounds.width(),
            y: (1.0 - self.coordinate.normalized_latitude()) * bounds.height(),
        })
    }

    /// Marker cell for a character-grid surface, clamped to the grid.
    ///
    /// The 1.0 edge of either normalized axis would land one past the last
    /// cell, so positions are clamped to the bottom/right cell.
    pub fn marker_cell(&self) -> Option<(u16, u16)> {
        let bounds = self.bounds?;
        let position = self.marker_position()?;
        let column = (position.x.floor()).min(bounds.width() - 1.0).max(0.0);
        let row = (position.y.floor()).min(bounds.height() - 1.0).max(0.0);
        Some((column as u16, row as u16))
    }
}

impl std::fmt::Debug for MapSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapSurface")
            .field("bounds", &self.bounds)
            .field("coordinate", &self.coordinate)
            .field("on_select", &self.on_select.as_ref().map(|_| "…"))
            .finish()
    }
}
