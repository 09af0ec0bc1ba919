//! Grid data model: the elevation raster and per-cell burn state.
//!
//! The grid owns every cell; all other structures (ignited set, fire
//! perimeter) refer to cells by index key only. Cell state changes go
//! through the owning grid's accessors, never through aliased
//! references.

use serde::{Deserialize, Serialize};

use crate::error::FireSimError;
use crate::fuel::FuelClass;

/// Packed cell index: `(y << 32) | x`.
///
/// Keys order row-major (ascending y, then x), which the simulator uses
/// for deterministic traversal of cell sets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CellKey(u64);

impl CellKey {
    /// Pack a cell coordinate into a key.
    pub fn new(x: u32, y: u32) -> Self {
        CellKey((u64::from(y) << 32) | u64::from(x))
    }

    /// Column index.
    pub fn x(self) -> u32 {
        (self.0 & 0xFFFF_FFFF) as u32
    }

    /// Row index.
    pub fn y(self) -> u32 {
        (self.0 >> 32) as u32
    }
}

/// Burn state of a single cell.
///
/// The only transitions are `Unburnt → Active` (ignition) and
/// `Active → Burnt` (burn-down); `Burnt` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireStatus {
    /// Never ignited
    Unburnt,
    /// Currently burning
    Active,
    /// Fully consumed
    Burnt,
}

/// A single point of the elevation raster plus its fire record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    /// Ground elevation in meters above sea level
    pub elevation: i16,
    /// Fuel class selecting the spread-constant row
    pub fuel_class: FuelClass,
    status: FireStatus,
    time_remaining: u16,
}

impl Cell {
    /// Create an unburnt cell.
    pub fn new(elevation: i16, fuel_class: FuelClass) -> Self {
        Cell {
            elevation,
            fuel_class,
            status: FireStatus::Unburnt,
            time_remaining: 0,
        }
    }

    /// Current burn state.
    pub fn status(&self) -> FireStatus {
        self.status
    }

    /// Hours of burning left; zero unless the cell is active.
    pub fn time_remaining(&self) -> u16 {
        self.time_remaining
    }

    /// Ignite the cell: `Unburnt` becomes `Active` with the full burn
    /// duration of its fuel class. Igniting an active or burnt cell is
    /// a no-op.
    pub(crate) fn ignite(&mut self) {
        if self.status != FireStatus::Unburnt {
            return;
        }
        self.status = FireStatus::Active;
        self.time_remaining = self.fuel_class.model().burn_duration_hours;
    }

    /// Burn for one hour: decrement the remaining time, transitioning
    /// to `Burnt` when it reaches zero. Only active cells tick.
    pub(crate) fn burn(&mut self) {
        if self.status != FireStatus::Active {
            return;
        }
        self.time_remaining -= 1;
        if self.time_remaining == 0 {
            self.status = FireStatus::Burnt;
        }
    }
}

/// Rectangular cell raster with its ground pitch in meters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    dx: f64,
    dy: f64,
    /// Cells in row-major order (`y * width + x`)
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from decoded elevation rows, one inner slice per
    /// raster row. This is the seam a DEM reader plugs into.
    ///
    /// # Errors
    ///
    /// Returns [`FireSimError::InvalidTerrain`] when the pitch is not
    /// strictly positive and finite, the raster is empty, or the rows
    /// are ragged.
    pub fn from_elevations(
        dx: f64,
        dy: f64,
        rows: &[Vec<i16>],
        fuel_class: FuelClass,
    ) -> Result<Self, FireSimError> {
        if !(dx.is_finite() && dy.is_finite() && dx > 0.0 && dy > 0.0) {
            return Err(FireSimError::InvalidTerrain(format!(
                "cell pitch must be positive and finite, got dx={dx}, dy={dy}"
            )));
        }
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(FireSimError::InvalidTerrain(
                "elevation raster is empty".to_string(),
            ));
        }
        if let Some(bad) = rows.iter().position(|row| row.len() != width) {
            return Err(FireSimError::InvalidTerrain(format!(
                "row {bad} has {} columns, expected {width}",
                rows[bad].len()
            )));
        }

        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(|&e| Cell::new(e, fuel_class)))
            .collect();
        Ok(Grid {
            width: width as u32,
            height: height as u32,
            dx,
            dy,
            cells,
        })
    }

    /// Flat terrain at a constant elevation.
    pub fn flat(width: u32, height: u32, dx: f64, dy: f64, elevation: i16) -> Self {
        let cells = vec![Cell::new(elevation, FuelClass::Grass); width as usize * height as usize];
        Grid {
            width,
            height,
            dx,
            dy,
            cells,
        }
    }

    /// Terrain rising linearly from `base` at the west and east edges to
    /// `crest` along a north-south ridge through the grid center.
    pub fn ridge(width: u32, height: u32, dx: f64, dy: f64, base: i16, crest: i16) -> Self {
        let mut grid = Grid::flat(width, height, dx, dy, base);
        let half = f64::from(width) / 2.0;
        let rise = f64::from(crest) - f64::from(base);
        for y in 0..height {
            for x in 0..width {
                let from_crest = (f64::from(x) - half).abs() / half;
                let elevation = f64::from(base) + rise * (1.0 - from_crest);
                grid.cell_mut(x, y).elevation = elevation.round() as i16;
            }
        }
        grid
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Meters per cell along x.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Meters per cell along y.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Whether a signed coordinate names a cell of this grid.
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// Cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when the coordinate is out of range; callers validate at
    /// the simulator boundary.
    pub fn cell(&self, x: u32, y: u32) -> &Cell {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Mutable cell access, same bounds contract as [`Grid::cell`].
    pub(crate) fn cell_mut(&mut self, x: u32, y: u32) -> &mut Cell {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        &mut self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Cell behind a packed key.
    pub fn cell_at(&self, key: CellKey) -> &Cell {
        self.cell(key.x(), key.y())
    }

    /// Ground distance between two cell centers in meters.
    pub fn ground_distance(&self, a: CellKey, b: CellKey) -> f64 {
        let dx_m = (f64::from(b.x()) - f64::from(a.x())) * self.dx;
        let dy_m = (f64::from(b.y()) - f64::from(a.y())) * self.dy;
        dx_m.hypot(dy_m)
    }
}
