use async_trait::async_trait;
use chrono::{Duration, Local};

use crate::model::{FORECAST_DAYS, ForecastEntry, WeatherReport, WeatherSnapshot};

use super::{FetchError, WeatherProvider};

/// Synthetic provider returning fixed conditions for any city.
///
/// Stand-in for a live weather backend: it resolves immediately, echoes the
/// requested city name back as the location, and never fails. A real
/// implementation behind [`WeatherProvider`] must additionally define a
/// timeout policy, retry count, and mapping of transport errors to
/// [`FetchError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MockProvider;

// (condition, max °C, min °C) per forecast day, day 0 first.
const OUTLOOK: [(&str, f64, f64); FORECAST_DAYS] = [
    ("Sunny", 25.0, 18.0),
    ("Cloudy", 23.0, 16.0),
    ("Rain", 20.0, 14.0),
    ("Partly Cloudy", 24.0, 17.0),
    ("Sunny", 26.0, 19.0),
];

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WeatherProvider for MockProvider {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherReport, FetchError> {
        let snapshot = WeatherSnapshot {
            location_name: city.to_owned(),
            temperature_c: 22.0,
            feels_like_c: 25.0,
            humidity_pct: 65,
            pressure_hpa: 1013,
            wind_speed_mps: 3.5,
            visibility_m: 10_000,
            sunrise_epoch: 1_640_925_600,
            condition: "Clear".to_owned(),
            description: "clear sky".to_owned(),
        };

        let today = Local::now().date_naive();
        let forecast = OUTLOOK
            .iter()
            .enumerate()
            .map(|(day, (condition, max, min))| ForecastEntry {
                date: today + Duration::days(day as i64),
                temp_max_c: *max,
                temp_min_c: *min,
                condition: (*condition).to_owned(),
            })
            .collect();

        Ok((snapshot, forecast))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_requested_city() {
        let (snapshot, _) = MockProvider::new().fetch_weather("Tokyo").await.unwrap();
        assert_eq!(snapshot.location_name, "Tokyo");
    }

    #[tokio::test]
    async fn forecast_starts_today_and_stays_ordered() {
        let (_, forecast) = MockProvider::new().fetch_weather("Paris").await.unwrap();

        assert_eq!(forecast.len(), FORECAST_DAYS);
        assert_eq!(forecast[0].date, Local::now().date_naive());
        for pair in forecast.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
        }
    }

    #[tokio::test]
    async fn current_conditions_match_fixture() {
        let (snapshot, _) = MockProvider::new().fetch_weather("London").await.unwrap();

        assert_eq!(snapshot.temperature_c, 22.0);
        assert_eq!(snapshot.feels_like_c, 25.0);
        assert_eq!(snapshot.humidity_pct, 65);
        assert_eq!(snapshot.pressure_hpa, 1013);
        assert_eq!(snapshot.visibility_m, 10_000);
        assert_eq!(snapshot.condition, "Clear");
        assert_eq!(snapshot.description, "clear sky");
    }
}
