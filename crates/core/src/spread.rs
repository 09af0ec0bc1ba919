//! Rothermel-style surface fire spread kernel.
//!
//! Computes the directional rate of spread between a burning cell and
//! one of its eight neighbors from the fuel table, the local slope, and
//! the wind projected onto the spread direction. This is an educational
//! simplification of the full model: reaction intensity is a constant
//! and moisture enters only through the heat sink.
//!
//! # References
//! - Rothermel, R.C. (1972). "A mathematical model for predicting fire
//!   spread in wildland fuels." USDA Forest Service Research Paper
//!   INT-115.

use nalgebra::Vector2;

use crate::fuel::FuelModel;

/// Feet per meter, used wherever grid distances feed the imperial-unit
/// Rothermel formulas.
pub const FEET_PER_METER: f64 = 3.28084;

/// Reaction intensity I_R (Btu/ft²/min), fixed for packing ratios in
/// the 0.20-0.30 band this fuel table occupies.
pub const REACTION_INTENSITY: f64 = 3000.0;

/// Directional rate of spread in m/hr from a source cell toward one
/// neighbor.
///
/// # Arguments
/// * `source` - Fuel constants of the burning cell
/// * `target` - Fuel constants of the cell in prospect to catch fire
/// * `rise_m` - Elevation of the target minus the source (meters)
/// * `run_m` - Ground distance between the two cell centers (meters)
/// * `direction_ft` - Vector from source to target center, in feet
/// * `wind_ft_min` - Wind vector in feet/minute
pub fn rate_of_spread(
    source: &FuelModel,
    target: &FuelModel,
    rise_m: f64,
    run_m: f64,
    direction_ft: Vector2<f64>,
    wind_ft_min: Vector2<f64>,
) -> f64 {
    let rate_ft_min = heat_source(source, rise_m, run_m, direction_ft, wind_ft_min)
        / heat_sink(target);
    // feet/min to meters/hr
    rate_ft_min * 60.0 / FEET_PER_METER
}

/// Numerator of the spread quotient:
/// `I_R · ξ · (1 + Φ_w + Φ_s)`.
fn heat_source(
    source: &FuelModel,
    rise_m: f64,
    run_m: f64,
    direction_ft: Vector2<f64>,
    wind_ft_min: Vector2<f64>,
) -> f64 {
    REACTION_INTENSITY
        * propagating_flux(source)
        * (1.0 + wind_factor(source, direction_ft, wind_ft_min) + slope_factor(source, rise_m, run_m))
}

/// Denominator of the spread quotient: the heat required to bring the
/// target fuel to ignition, `ρ_b · ε · Q_ig` with
/// `Q_ig = 250 + 1116 · M_f`.
fn heat_sink(target: &FuelModel) -> f64 {
    let heat_of_preignition = 250.0 + 1116.0 * target.fuel_moisture;
    target.bulk_density * target.effective_heating_number() * heat_of_preignition
}

/// Slope factor `Φ_s = 5.275 · β^(−0.3) · tan²θ`.
///
/// `tan θ` is the elevation change over the ground run; squaring makes
/// uphill and downhill spread symmetric, an intentional simplification.
fn slope_factor(source: &FuelModel, rise_m: f64, run_m: f64) -> f64 {
    let tan_theta = rise_m / run_m;
    5.275 * source.packing_ratio().powf(-0.3) * (tan_theta * tan_theta)
}

/// Wind factor `Φ_w = C · U^B · β_rel^E`, with the local wind speed `U`
/// taken from the projection of the wind vector onto the spread
/// direction. Wind with a negative projection (pushing away from the
/// target) contributes nothing.
fn wind_factor(source: &FuelModel, direction_ft: Vector2<f64>, wind_ft_min: Vector2<f64>) -> f64 {
    let sav = source.sav;
    let c = 7.47 * (-0.133 * sav.powf(0.55)).exp();
    let b = 0.02526 * sav.powf(0.54);
    let e = -(0.715 * (-3.59e-4 * sav).exp());

    let scalar = wind_ft_min.dot(&direction_ft) / direction_ft.dot(&direction_ft);
    if scalar < 0.0 {
        return 0.0;
    }
    let local_wind = direction_ft * scalar;
    let local_speed = local_wind.norm();
    c * local_speed.powf(b) * source.relative_packing_ratio.powf(e)
}

/// Propagating flux ratio
/// `ξ = (192 + 0.2595·σ)^(−1) · exp((0.792 + 0.681·σ^0.5) · 0.1·β)`,
/// a function of the source fuel only.
fn propagating_flux(source: &FuelModel) -> f64 {
    let sav = source.sav;
    (192.0 + 0.2595 * sav).recip()
        * ((0.792 + 0.681 * sav.sqrt()) * (source.packing_ratio() * 0.1)).exp()
}
