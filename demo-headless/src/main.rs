//! Headless wildfire growth demo.
//!
//! Seeds a fire on synthetic terrain and steps it through an hourly
//! wind forecast, printing per-hour growth statistics. Forecasts come
//! from a JSON file of hourly records or from a constant-wind preset.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use wildfire_sim_core::{Forecast, Grid, Simulator, WeatherRecord};

/// Synthetic terrain options
#[derive(Debug, Clone, Copy, ValueEnum)]
enum TerrainPreset {
    /// Flat terrain at 100 m elevation
    Flat,
    /// North-south ridge rising from 100 m to 400 m
    Ridge,
}

#[derive(Parser, Debug)]
#[command(name = "demo-headless")]
#[command(about = "Headless wildfire front growth demo", long_about = None)]
struct Args {
    /// Terrain preset
    #[arg(short, long, value_enum, default_value_t = TerrainPreset::Flat)]
    terrain: TerrainPreset,

    /// Grid width in cells
    #[arg(long, default_value_t = 200)]
    width: u32,

    /// Grid height in cells
    #[arg(long, default_value_t = 200)]
    height: u32,

    /// Cell pitch in meters
    #[arg(long, default_value_t = 10.0)]
    pitch: f64,

    /// Fire start x position as a fraction of grid width (0.0-1.0)
    #[arg(long, default_value_t = 0.5)]
    x_pct: f64,

    /// Fire start y position as a fraction of grid height (0.0-1.0)
    #[arg(long, default_value_t = 0.5)]
    y_pct: f64,

    /// Ignition radius in meters
    #[arg(short, long, default_value_t = 30.0)]
    radius: f64,

    /// Hours of constant wind to simulate (ignored with --forecast)
    #[arg(long, default_value_t = 6)]
    hours: usize,

    /// Constant wind speed in mph
    #[arg(long, default_value_t = 10.0)]
    wind_speed: f64,

    /// Constant wind direction in degrees, mathematical convention
    #[arg(long, default_value_t = 0.0)]
    wind_direction: f64,

    /// JSON file holding an array of hourly weather records
    #[arg(long)]
    forecast: Option<PathBuf>,
}

fn load_forecast(args: &Args) -> Result<Forecast, String> {
    match &args.forecast {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("{}: {e}", path.display()))?;
            let records: Vec<WeatherRecord> =
                serde_json::from_str(&text).map_err(|e| format!("{}: {e}", path.display()))?;
            Ok(Forecast::new(records))
        }
        None => Ok(Forecast::constant(
            WeatherRecord::wind_only(args.wind_speed, args.wind_direction),
            args.hours,
        )),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let grid = match args.terrain {
        TerrainPreset::Flat => Grid::flat(args.width, args.height, args.pitch, args.pitch, 100),
        TerrainPreset::Ridge => {
            Grid::ridge(args.width, args.height, args.pitch, args.pitch, 100, 400)
        }
    };

    let mut forecast = match load_forecast(&args) {
        Ok(forecast) => forecast,
        Err(msg) => {
            eprintln!("demo-headless: {msg}");
            return ExitCode::FAILURE;
        }
    };

    let mut sim = Simulator::new(grid);
    if let Err(err) = sim.start_fire(args.x_pct, args.y_pct, args.radius) {
        eprintln!("demo-headless: {err}");
        return ExitCode::FAILURE;
    }
    println!(
        "Seeded {} cells covering {:.0} m²",
        sim.ignited().len(),
        sim.area_m2()
    );

    while let Some(weather) = forecast.next_hour() {
        let summary = sim.step(weather);
        println!(
            "hour {:>3}: +{:>5} cells, {:>6} active, {:>12.0} m² total, perimeter of {}",
            summary.hour,
            summary.newly_ignited.len(),
            summary.active_count,
            sim.area_m2(),
            summary.perimeter.len()
        );
    }

    println!(
        "Forecast exhausted after {} hours; final fire area {:.0} m²",
        sim.hour(),
        sim.area_m2()
    );
    ExitCode::SUCCESS
}
