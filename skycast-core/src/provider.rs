use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::WeatherReport;

pub mod mock;

/// Error surfaced when a weather request cannot be completed.
///
/// A live backend would map transport failures, timeouts and bad payloads
/// here; the current synthetic provider never produces one.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fetch failed: {0}")]
    Request(String),
}

/// Source of current conditions and the 5-day outlook for a city.
///
/// Callers are responsible for rejecting empty or whitespace-only city
/// names before invoking; the provider does not validate its input.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherReport, FetchError>;
}

/// Construct the provider used by the dashboard.
///
/// Currently always the synthetic one; a future live backend slots in here.
pub fn default_provider() -> Box<dyn WeatherProvider> {
    Box::new(mock::MockProvider::new())
}
