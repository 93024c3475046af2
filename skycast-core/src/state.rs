use crate::model::{ForecastEntry, WeatherReport, WeatherSnapshot};
use crate::provider::FetchError;

/// City fetched on mount, before the user has searched for anything.
pub const DEFAULT_CITY: &str = "London";

/// Tag for one issued fetch, monotonically increasing per dashboard.
///
/// Completions carrying anything but the latest issued token are discarded,
/// so an older search can never overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// What the main region of the dashboard currently shows.
#[derive(Debug, Clone)]
pub enum RequestState {
    Loading,
    Error(String),
    Ready(WeatherSnapshot, Vec<ForecastEntry>),
}

/// Request lifecycle for the dashboard's main region.
///
/// Single-owner: every transition happens on the UI loop. In-flight fetches
/// are not cancelled; stale completions are filtered by token instead.
#[derive(Debug)]
pub struct Dashboard {
    state: RequestState,
    latest: u64,
}

impl Dashboard {
    /// A freshly mounted dashboard, loading until the first completion.
    pub fn new() -> Self {
        Self { state: RequestState::Loading, latest: 0 }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Begin a search, entering Loading and clearing any prior error.
    ///
    /// Empty or whitespace-only input issues no token and leaves the current
    /// state untouched. Returns the issued token and the trimmed city name.
    pub fn submit(&mut self, query: &str) -> Option<(RequestToken, String)> {
        let city = query.trim();
        if city.is_empty() {
            return None;
        }

        self.latest += 1;
        self.state = RequestState::Loading;
        Some((RequestToken(self.latest), city.to_owned()))
    }

    /// Apply a provider completion for a previously issued token.
    ///
    /// Returns `false` and leaves the state untouched when the token is not
    /// the latest issued one.
    pub fn complete(
        &mut self,
        token: RequestToken,
        result: Result<WeatherReport, FetchError>,
    ) -> bool {
        if token.0 != self.latest {
            return false;
        }

        self.state = match result {
            Ok((snapshot, forecast)) => RequestState::Ready(snapshot, forecast),
            Err(err) => RequestState::Error(err.to_string()),
        };

        true
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::forecast_day_label;
    use crate::model::FORECAST_DAYS;
    use crate::provider::{WeatherProvider, mock::MockProvider};

    async fn fetch(city: &str) -> Result<WeatherReport, FetchError> {
        MockProvider::new().fetch_weather(city).await
    }

    #[tokio::test]
    async fn mount_scenario_reaches_ready_with_full_forecast() {
        let mut dashboard = Dashboard::new();

        let (token, city) = dashboard.submit(DEFAULT_CITY).expect("default city is non-empty");
        assert!(matches!(dashboard.state(), RequestState::Loading));

        assert!(dashboard.complete(token, fetch(&city).await));

        match dashboard.state() {
            RequestState::Ready(snapshot, forecast) => {
                assert_eq!(snapshot.location_name, "London");
                assert_eq!(forecast.len(), FORECAST_DAYS);
                assert_eq!(forecast_day_label(0, forecast[0].date), "Today");
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn whitespace_search_causes_no_transition() {
        let mut dashboard = Dashboard::new();
        let (token, city) = dashboard.submit("London").unwrap();
        dashboard.complete(token, fetch(&city).await);

        for query in ["", "   ", "\t\n"] {
            assert!(dashboard.submit(query).is_none());
            assert!(matches!(dashboard.state(), RequestState::Ready(..)));
        }
    }

    #[tokio::test]
    async fn stale_completion_is_discarded() {
        let mut dashboard = Dashboard::new();

        let (paris, paris_city) = dashboard.submit("Paris").unwrap();
        let (tokyo, tokyo_city) = dashboard.submit("Tokyo").unwrap();

        // Older fetch resolves first: ignored, still loading.
        assert!(!dashboard.complete(paris, fetch(&paris_city).await));
        assert!(matches!(dashboard.state(), RequestState::Loading));

        assert!(dashboard.complete(tokyo, fetch(&tokyo_city).await));
        match dashboard.state() {
            RequestState::Ready(snapshot, _) => assert_eq!(snapshot.location_name, "Tokyo"),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn stale_completion_after_newer_one_is_discarded() {
        let mut dashboard = Dashboard::new();

        let (paris, paris_city) = dashboard.submit("Paris").unwrap();
        let (tokyo, tokyo_city) = dashboard.submit("Tokyo").unwrap();

        // Newer fetch resolves first and wins.
        assert!(dashboard.complete(tokyo, fetch(&tokyo_city).await));
        assert!(!dashboard.complete(paris, fetch(&paris_city).await));

        match dashboard.state() {
            RequestState::Ready(snapshot, _) => assert_eq!(snapshot.location_name, "Tokyo"),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn failure_surfaces_as_error_and_next_search_clears_it() {
        let mut dashboard = Dashboard::new();

        let (token, _) = dashboard.submit("Atlantis").unwrap();
        assert!(dashboard.complete(token, Err(FetchError::Request("city not found".into()))));

        match dashboard.state() {
            RequestState::Error(message) => {
                assert_eq!(message, "fetch failed: city not found");
            }
            other => panic!("expected Error, got {other:?}"),
        }

        dashboard.submit("London").unwrap();
        assert!(matches!(dashboard.state(), RequestState::Loading));
    }
}
