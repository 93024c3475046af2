//! Display formatting rules for the dashboard.
//!
//! Pinned here as plain functions so the rendering layer and the tests agree
//! on the exact output, including the rounding rule at `.5` boundaries.

use chrono::{DateTime, Local, NaiveDate};

/// Round a temperature to the nearest whole degree, halves away from zero.
///
/// 21.5 → 22 and -0.5 → -1; the rule is fixed so negative values do not
/// depend on ambient rounding behavior.
pub fn round_temp(value: f64) -> i64 {
    value.round() as i64
}

/// Temperature with unit, e.g. "22°C".
pub fn temp_label(value: f64) -> String {
    format!("{}°C", round_temp(value))
}

/// Bare degrees for the forecast column, e.g. "25°".
pub fn degrees_label(value: f64) -> String {
    format!("{}°", round_temp(value))
}

/// Visibility in kilometers with one decimal, e.g. 10000 m → "10.0 km".
pub fn visibility_km(meters: u32) -> String {
    format!("{:.1} km", f64::from(meters) / 1000.0)
}

pub fn humidity_label(pct: u8) -> String {
    format!("{pct}%")
}

pub fn wind_label(mps: f64) -> String {
    format!("{mps} m/s")
}

pub fn pressure_label(hpa: u32) -> String {
    format!("{hpa} hPa")
}

/// Sunrise as local hour:minute, or a placeholder for an invalid timestamp.
pub fn sunrise_label(epoch: i64) -> String {
    DateTime::from_timestamp(epoch, 0)
        .map(|utc| utc.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_owned())
}

/// Forecast row label: the first entry is always "Today", later entries show
/// the short weekday name of their date.
pub fn forecast_day_label(index: usize, date: NaiveDate) -> String {
    if index == 0 {
        "Today".to_owned()
    } else {
        date.format("%a").to_string()
    }
}
