//! Hourly weather records consumed by the simulator.
//!
//! The engine only reads wind speed and direction; the remaining fields
//! ride along from forecast providers for display layers. Wind
//! direction uses the standard mathematical convention (0° along +x,
//! counter-clockwise positive). Providers reporting meteorological
//! bearings must convert before records reach the core.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Feet per minute in one mile per hour.
pub const FT_MIN_PER_MPH: f64 = 5280.0 / 60.0;

/// One forecast hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Sustained wind speed in miles per hour
    pub wind_speed_mph: f64,
    /// Wind direction in degrees, mathematical convention
    pub wind_direction_deg: f64,
    /// Air temperature in °F
    #[serde(default)]
    pub temperature_f: Option<f64>,
    /// Peak gust in miles per hour
    #[serde(default)]
    pub wind_gust_mph: Option<f64>,
    /// Cloud cover percentage
    #[serde(default)]
    pub cloud_cover_pct: Option<f64>,
    /// Probability of precipitation, percent
    #[serde(default)]
    pub precipitation_probability_pct: Option<f64>,
    /// Precipitation rate in millimeters per hour
    #[serde(default)]
    pub precipitation_intensity_mm: Option<f64>,
    /// Precipitation kind as reported by the provider (rain, snow, ...)
    #[serde(default)]
    pub precipitation_type: Option<String>,
}

impl WeatherRecord {
    /// Record carrying only wind, for synthetic forecasts.
    pub fn wind_only(wind_speed_mph: f64, wind_direction_deg: f64) -> Self {
        WeatherRecord {
            wind_speed_mph,
            wind_direction_deg,
            temperature_f: None,
            wind_gust_mph: None,
            cloud_cover_pct: None,
            precipitation_probability_pct: None,
            precipitation_intensity_mm: None,
            precipitation_type: None,
        }
    }

    /// Wind vector in feet/minute: `(|w|·cos θ, |w|·sin θ)`.
    pub fn wind_vector_ft_min(&self) -> Vector2<f64> {
        let speed = self.wind_speed_mph * FT_MIN_PER_MPH;
        let theta = self.wind_direction_deg.to_radians();
        Vector2::new(speed * theta.cos(), speed * theta.sin())
    }
}

/// Ordered hourly forecast, consumed one record per simulation step.
///
/// `next_hour` returning `None` is the end-of-forecast signal; callers
/// branch on it instead of catching an exhaustion error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    records: Vec<WeatherRecord>,
    cursor: usize,
}

impl Forecast {
    /// Wrap an hourly record sequence.
    pub fn new(records: Vec<WeatherRecord>) -> Self {
        Forecast { records, cursor: 0 }
    }

    /// Constant-wind forecast of a given length.
    pub fn constant(record: WeatherRecord, hours: usize) -> Self {
        Forecast::new(vec![record; hours])
    }

    /// Next unconsumed hour, or `None` when the forecast is exhausted.
    pub fn next_hour(&mut self) -> Option<&WeatherRecord> {
        let record = self.records.get(self.cursor)?;
        self.cursor += 1;
        Some(record)
    }

    /// Hours left in the forecast.
    pub fn remaining(&self) -> usize {
        self.records.len() - self.cursor
    }
}

impl From<Vec<WeatherRecord>> for Forecast {
    fn from(records: Vec<WeatherRecord>) -> Self {
        Forecast::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn wind_vector_converts_mph_to_feet_per_minute() {
        let east = WeatherRecord::wind_only(20.0, 0.0).wind_vector_ft_min();
        assert_relative_eq!(east.x, 1760.0, max_relative = 1e-12);
        assert_relative_eq!(east.y, 0.0, epsilon = 1e-9);

        let north = WeatherRecord::wind_only(10.0, 90.0).wind_vector_ft_min();
        assert_relative_eq!(north.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(north.y, 880.0, max_relative = 1e-12);
    }

    #[test]
    fn forecast_yields_each_hour_once_then_none() {
        let mut forecast = Forecast::new(vec![
            WeatherRecord::wind_only(5.0, 0.0),
            WeatherRecord::wind_only(7.0, 90.0),
        ]);
        assert_eq!(forecast.remaining(), 2);
        assert_eq!(forecast.next_hour().map(|w| w.wind_speed_mph), Some(5.0));
        assert_eq!(forecast.next_hour().map(|w| w.wind_speed_mph), Some(7.0));
        assert!(forecast.next_hour().is_none());
        assert_eq!(forecast.remaining(), 0);
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let json = r#"{"wind_speed_mph": 12.5, "wind_direction_deg": 180.0}"#;
        let record: WeatherRecord = serde_json::from_str(json).expect("minimal record parses");
        assert_eq!(record.wind_speed_mph, 12.5);
        assert_eq!(record.temperature_f, None);
        assert_eq!(record.cloud_cover_pct, None);
        assert_eq!(record.precipitation_intensity_mm, None);
        assert_eq!(record.precipitation_type, None);
    }

    #[test]
    fn precipitation_fields_ride_along_when_present() {
        let json = r#"{
            "wind_speed_mph": 8.0,
            "wind_direction_deg": 45.0,
            "precipitation_probability_pct": 60.0,
            "precipitation_intensity_mm": 1.4,
            "precipitation_type": "rain"
        }"#;
        let record: WeatherRecord = serde_json::from_str(json).expect("full record parses");
        assert_eq!(record.precipitation_probability_pct, Some(60.0));
        assert_eq!(record.precipitation_intensity_mm, Some(1.4));
        assert_eq!(record.precipitation_type.as_deref(), Some("rain"));
    }
}
