//! Typed errors raised by the simulation core.
//!
//! Grid indexing with out-of-range coordinates is a programmer error and
//! panics in the accessors instead of surfacing here; the public
//! simulator API never produces it for valid inputs.

use thiserror::Error;

/// Errors the fire simulation can return to callers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FireSimError {
    /// `start_fire` parameters produced zero cells after clamping to the
    /// grid. State is left untouched.
    #[error(
        "ignition at ({x_pct:.3}, {y_pct:.3}) with radius {radius_m} m covers no cells after clamping"
    )]
    EmptyIgnition {
        /// Requested horizontal center as a fraction of grid width
        x_pct: f64,
        /// Requested vertical center as a fraction of grid height
        y_pct: f64,
        /// Requested ignition radius in meters
        radius_m: f64,
    },

    /// Elevation input violated the boundary contract: non-positive
    /// pitch, empty raster, or ragged rows.
    #[error("invalid terrain: {0}")]
    InvalidTerrain(String),
}
