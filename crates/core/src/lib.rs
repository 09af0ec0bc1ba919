//! Wildfire Simulation Core Library
//!
//! Simulates the spatial progression of a wildfire across a terrain
//! surface derived from a digital elevation model. Given an elevation
//! grid, an ignition region, and an hourly wind forecast, the simulator
//! advances a discrete-time fire front, marking cells unburnt, actively
//! burning, and burnt, and maintains the convex perimeter bounding the
//! active fire for visualization layers.
//!
//! Spread rates follow an educational simplification of the Rothermel
//! surface fire model: a constant reaction intensity scaled by
//! slope and wind factors over the heat required to ignite the
//! downstream fuel bed.

pub mod error;
pub mod fuel;
pub mod geometry;
pub mod grid;
pub mod simulation;
pub mod spread;
pub mod weather;

// Re-export main types
pub use error::FireSimError;
pub use fuel::{FuelClass, FuelModel};
pub use geometry::{convex_hull, cross, GridPoint, Polygon};
pub use grid::{Cell, CellKey, FireStatus, Grid};
pub use simulation::{Simulator, StepSummary};
pub use weather::{Forecast, WeatherRecord};
