use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of days in a forecast. Entry 0 always represents "today".
pub const FORECAST_DAYS: usize = 5;

/// Current conditions at the moment of fetch.
///
/// Immutable once produced; a new search replaces the whole snapshot rather
/// than patching fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub visibility_m: u32,
    pub sunrise_epoch: i64,
    pub condition: String,
    pub description: String,
}

/// One day of the 5-day outlook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub date: NaiveDate,
    pub temp_max_c: f64,
    pub temp_min_c: f64,
    pub condition: String,
}

/// A complete provider response: current conditions plus the 5-day outlook.
pub type WeatherReport = (WeatherSnapshot, Vec<ForecastEntry>);
