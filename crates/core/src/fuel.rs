//! Fuel model table for surface fire spread.
//!
//! Constants follow the fuel classification by particle diameter:
//! fuels under 0.25 in are 1-hour fuels, 0.25-1 in are 10-hour fuels,
//! 1-3 in are 100-hour fuels. Each class selects one row of Rothermel
//! constants; the spread kernel is table-driven so new classes only
//! need a new row here.

use serde::{Deserialize, Serialize};

/// Categorical fuel descriptor carried by every grid cell.
///
/// This release ignites class 1 (grass) only, but the brush and timber
/// litter rows ship so the kernel stays table-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelClass {
    /// Short/long grass average (1-hour fuel)
    Grass,
    /// Average brush (10-hour fuel)
    Brush,
    /// Timber litter (100-hour fuel)
    TimberLitter,
}

impl FuelClass {
    /// Look up a fuel class by its numeric tag (1=grass, 2=brush,
    /// 3=timber litter). Returns `None` for tags with no table row.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(FuelClass::Grass),
            2 => Some(FuelClass::Brush),
            3 => Some(FuelClass::TimberLitter),
            _ => None,
        }
    }

    /// Numeric tag of this class.
    pub fn id(self) -> u8 {
        match self {
            FuelClass::Grass => 1,
            FuelClass::Brush => 2,
            FuelClass::TimberLitter => 3,
        }
    }

    /// Constants row for this class.
    pub fn model(self) -> FuelModel {
        match self {
            FuelClass::Grass => FuelModel::grass(),
            FuelClass::Brush => FuelModel::brush(),
            FuelClass::TimberLitter => FuelModel::timber_litter(),
        }
    }
}

/// One row of fuel constants consumed by the spread kernel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelModel {
    /// Moisture content of the fuel bed (fraction, 0-1)
    pub fuel_moisture: f64,
    /// Fuel bed bulk density (lb/ft³)
    pub bulk_density: f64,
    /// Fuel particle density (lb/ft³)
    pub particle_density: f64,
    /// Ratio of actual to optimum packing ratio (dimensionless)
    pub relative_packing_ratio: f64,
    /// Surface-area-to-volume ratio of fuel particles (1/ft)
    pub sav: f64,
    /// Hours an ignited cell stays in the active state
    pub burn_duration_hours: u16,
}

impl FuelModel {
    /// Grass row, averaged between short and long grass.
    pub fn grass() -> Self {
        FuelModel {
            fuel_moisture: 0.40,
            bulk_density: 0.03,
            particle_density: 30.0,
            relative_packing_ratio: 0.23,
            sav: 2000.0,
            burn_duration_hours: 1,
        }
    }

    /// Average brush row.
    ///
    /// Moisture and density columns are carried over from grass until
    /// calibrated against published fuel beds.
    pub fn brush() -> Self {
        FuelModel {
            fuel_moisture: 0.40,
            bulk_density: 0.03,
            particle_density: 30.0,
            relative_packing_ratio: 0.33,
            sav: 350.0,
            burn_duration_hours: 10,
        }
    }

    /// Timber litter row. Moisture and density columns as for `brush`.
    pub fn timber_litter() -> Self {
        FuelModel {
            fuel_moisture: 0.40,
            bulk_density: 0.03,
            particle_density: 30.0,
            relative_packing_ratio: 2.35,
            sav: 2000.0,
            burn_duration_hours: 100,
        }
    }

    /// Packing ratio β = bulk density / particle density.
    pub fn packing_ratio(&self) -> f64 {
        self.bulk_density / self.particle_density
    }

    /// Effective heating number ε = exp(−138 / σ).
    pub fn effective_heating_number(&self) -> f64 {
        (-138.0 / self.sav).exp()
    }
}
