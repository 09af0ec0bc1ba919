//! Hourly fire growth and the simulator facade.
//!
//! One step advances the fire by one forecast hour: every cell on the
//! current perimeter projects an eight-direction spread ellipse, the
//! covered cells ignite, candidates outside the current bounds feed the
//! next perimeter (the convex hull of the candidate set), and cells
//! that were already burning tick down toward burnt. Steps are
//! single-threaded and deterministic for a given state and weather.

use nalgebra::Vector2;
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::FireSimError;
use crate::geometry::{convex_hull, GridPoint, Polygon};
use crate::grid::{CellKey, FireStatus, Grid};
use crate::spread::{rate_of_spread, FEET_PER_METER};
use crate::weather::WeatherRecord;

/// Compass neighbor offsets in octagon vertex order:
/// N, NE, E, SE, S, SW, W, NW. North is toward row zero.
const COMPASS: [(i64, i64); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// What one simulation step produced, for view layers.
#[derive(Debug, Clone, Serialize)]
pub struct StepSummary {
    /// Forecast hour this step consumed (1-based after the first step)
    pub hour: u32,
    /// Cells that joined the fire this hour, in emission order
    pub newly_ignited: Vec<CellKey>,
    /// Vertices of the committed perimeter, counter-clockwise
    pub perimeter: Vec<CellKey>,
    /// Actively burning cells after the burn tick
    pub active_count: usize,
}

/// Owns the grid and the complete fire state: the ever-ignited set, the
/// active perimeter, its containment polygon, and the current wind.
pub struct Simulator {
    grid: Grid,
    ignited: FxHashSet<CellKey>,
    perimeter: Vec<CellKey>,
    /// `None` while the perimeter is degenerate (fewer than two
    /// distinct vertices); containment is then empty and every
    /// candidate is admitted next step.
    bounds: Option<Polygon>,
    wind_ft_min: Vector2<f64>,
    hour: u32,
}

impl Simulator {
    /// Wrap a grid into an idle simulator with no fire.
    pub fn new(grid: Grid) -> Self {
        Simulator {
            grid,
            ignited: FxHashSet::default(),
            perimeter: Vec::new(),
            bounds: None,
            wind_ft_min: Vector2::new(0.0, 0.0),
            hour: 0,
        }
    }

    /// The owned grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Hours stepped so far.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Current perimeter cells in counter-clockwise hull order.
    pub fn perimeter(&self) -> &[CellKey] {
        &self.perimeter
    }

    /// Every cell that has ever ignited.
    pub fn ignited(&self) -> &FxHashSet<CellKey> {
        &self.ignited
    }

    /// Burn state of the cell at `(x, y)`.
    pub fn status_at(&self, x: u32, y: u32) -> FireStatus {
        self.grid.cell(x, y).status()
    }

    /// Burned and burning footprint in square meters.
    pub fn area_m2(&self) -> f64 {
        self.ignited.len() as f64 * self.grid.dx() * self.grid.dy()
    }

    /// Count of cells currently in the active state.
    pub fn active_count(&self) -> usize {
        self.ignited
            .iter()
            .filter(|&&key| self.grid.cell_at(key).status() == FireStatus::Active)
            .count()
    }

    /// Seed the fire: ignite the rectangle reaching `radius_m` out from
    /// the center `(⌊W·x_pct⌋, ⌊H·y_pct⌋)`, clamped to the grid, and
    /// derive the initial perimeter from it.
    ///
    /// # Errors
    ///
    /// [`FireSimError::EmptyIgnition`] when the clamped rectangle
    /// covers no cells; state is untouched in that case.
    pub fn start_fire(
        &mut self,
        x_pct: f64,
        y_pct: f64,
        radius_m: f64,
    ) -> Result<(), FireSimError> {
        let empty = FireSimError::EmptyIgnition {
            x_pct,
            y_pct,
            radius_m,
        };
        if !(x_pct.is_finite() && y_pct.is_finite() && radius_m.is_finite() && radius_m >= 0.0) {
            return Err(empty);
        }

        let center_x = (f64::from(self.grid.width()) * x_pct).floor() as i64;
        let center_y = (f64::from(self.grid.height()) * y_pct).floor() as i64;
        let reach_x = (radius_m / self.grid.dx()).floor() as i64;
        let reach_y = (radius_m / self.grid.dy()).floor() as i64;

        let x0 = (center_x - reach_x).max(0);
        let x1 = (center_x + reach_x).min(i64::from(self.grid.width()) - 1);
        let y0 = (center_y - reach_y).max(0);
        let y1 = (center_y + reach_y).min(i64::from(self.grid.height()) - 1);
        if x0 > x1 || y0 > y1 {
            return Err(empty);
        }

        let mut seeded = Vec::new();
        for y in y0..=y1 {
            for x in x0..=x1 {
                let key = CellKey::new(x as u32, y as u32);
                self.grid.cell_mut(key.x(), key.y()).ignite();
                self.ignited.insert(key);
                seeded.push(key);
            }
        }
        self.commit_perimeter(&seeded);
        info!(
            "fire started at ({:.2}, {:.2}): {} cells over {:.0} m²",
            x_pct,
            y_pct,
            seeded.len(),
            self.area_m2()
        );
        Ok(())
    }

    /// Advance the fire by one hour under the given weather.
    ///
    /// Emission runs over the stored perimeter first, then the cells
    /// that were already burning tick, then the staged perimeter and
    /// bounds commit. Cells ignited during this step keep their full
    /// burn time for the next hour.
    pub fn step(&mut self, weather: &WeatherRecord) -> StepSummary {
        self.wind_ft_min = weather.wind_vector_ft_min();

        let mut active_before: Vec<CellKey> = self
            .ignited
            .iter()
            .copied()
            .filter(|&key| self.grid.cell_at(key).status() == FireStatus::Active)
            .collect();
        active_before.sort_unstable();

        let sources = self.perimeter.clone();
        let mut candidates: Vec<CellKey> = Vec::new();
        let mut seen: FxHashSet<CellKey> = FxHashSet::default();
        for source in sources {
            for emitted in self.growth_from_cell(source) {
                if seen.insert(emitted) && !self.bounds_contain(emitted) {
                    candidates.push(emitted);
                }
            }
        }

        for key in active_before {
            self.grid.cell_mut(key.x(), key.y()).burn();
        }

        self.commit_perimeter(&candidates);
        self.hour += 1;

        let summary = StepSummary {
            hour: self.hour,
            newly_ignited: candidates,
            perimeter: self.perimeter.clone(),
            active_count: self.active_count(),
        };
        debug!(
            "hour {}: {} newly ignited, {} active, perimeter of {}",
            summary.hour,
            summary.newly_ignited.len(),
            summary.active_count,
            summary.perimeter.len()
        );
        summary
    }

    /// Rebuild `perimeter` and `bounds` as the convex hull of a cell
    /// set. A degenerate hull leaves the bounds empty.
    fn commit_perimeter(&mut self, cells: &[CellKey]) {
        let points: Vec<GridPoint> = cells
            .iter()
            .map(|key| GridPoint::new(i64::from(key.x()), i64::from(key.y())))
            .collect();
        let hull = convex_hull(&points);
        self.perimeter = hull
            .iter()
            .map(|p| CellKey::new(p.x as u32, p.y as u32))
            .collect();
        self.bounds = if hull.len() >= 2 {
            Some(Polygon::new(hull))
        } else {
            None
        };
    }

    fn bounds_contain(&self, key: CellKey) -> bool {
        self.bounds
            .as_ref()
            .is_some_and(|b| b.contains(GridPoint::new(i64::from(key.x()), i64::from(key.y()))))
    }

    /// Ignition footprint one perimeter cell emits in one hour: the
    /// eight directional rates projected to cell offsets, closed into
    /// an octagon, scanned over its bounding box. Covered cells that
    /// are not burnt ignite and are returned in scan order.
    fn growth_from_cell(&mut self, source: CellKey) -> Vec<CellKey> {
        let sx = i64::from(source.x());
        let sy = i64::from(source.y());

        let mut rates = [0.0f64; 8];
        for (slot, &(ox, oy)) in COMPASS.iter().enumerate() {
            let nx = sx + ox;
            let ny = sy + oy;
            if self.grid.in_bounds(nx, ny) {
                rates[slot] = self.directional_rate(source, CellKey::new(nx as u32, ny as u32));
            }
        }
        let [north, northeast, east, southeast, south, southwest, west, northwest] = rates;

        let dx = self.grid.dx();
        let dy = self.grid.dy();
        let cells_x = |meters: f64| (meters / dx).floor() as i64;
        let cells_y = |meters: f64| (meters / dy).floor() as i64;
        // Diagonal rates decompose at an even 45° split
        let diag = std::f64::consts::FRAC_1_SQRT_2;

        let max_x = i64::from(self.grid.width());
        let max_y = i64::from(self.grid.height());
        let vertex =
            |x: i64, y: i64| GridPoint::new(x.clamp(0, max_x), y.clamp(0, max_y));
        let vertices = vec![
            vertex(sx, sy - cells_y(north)),
            vertex(sx + cells_x(northeast * diag), sy - cells_y(northeast * diag)),
            vertex(sx + cells_x(east), sy),
            vertex(sx + cells_x(southeast * diag), sy + cells_y(southeast * diag)),
            vertex(sx, sy + cells_y(south)),
            vertex(sx - cells_x(southwest * diag), sy + cells_y(southwest * diag)),
            vertex(sx - cells_x(west), sy),
            vertex(sx - cells_x(northwest * diag), sy - cells_y(northwest * diag)),
        ];

        let x_lo = vertices.iter().map(|p| p.x).min().unwrap_or(sx);
        let x_hi = vertices.iter().map(|p| p.x).max().unwrap_or(sx).min(max_x - 1);
        let y_lo = vertices.iter().map(|p| p.y).min().unwrap_or(sy);
        let y_hi = vertices.iter().map(|p| p.y).max().unwrap_or(sy).min(max_y - 1);
        let footprint = Polygon::new(vertices);

        let mut emitted = Vec::new();
        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                if !footprint.contains(GridPoint::new(x, y)) {
                    continue;
                }
                let key = CellKey::new(x as u32, y as u32);
                let cell = self.grid.cell_mut(key.x(), key.y());
                if cell.status() == FireStatus::Burnt {
                    continue;
                }
                cell.ignite();
                self.ignited.insert(key);
                emitted.push(key);
            }
        }
        emitted
    }

    /// Rate of spread from one cell toward an adjacent or diagonal
    /// neighbor under the current wind, in m/hr.
    fn directional_rate(&self, source: CellKey, target: CellKey) -> f64 {
        let src = self.grid.cell_at(source);
        let tgt = self.grid.cell_at(target);
        let rise = f64::from(tgt.elevation) - f64::from(src.elevation);
        let run = self.grid.ground_distance(source, target);
        let direction = Vector2::new(
            (f64::from(target.x()) - f64::from(source.x())) * self.grid.dx() * FEET_PER_METER,
            (f64::from(target.y()) - f64::from(source.y())) * self.grid.dy() * FEET_PER_METER,
        );
        rate_of_spread(
            &src.fuel_class.model(),
            &tgt.fuel_class.model(),
            rise,
            run,
            direction,
            self.wind_ft_min,
        )
    }
}
