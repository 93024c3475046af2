//! Core library for the SkyCast dashboard.
//!
//! This crate defines:
//! - Shared domain models (snapshots, forecast entries)
//! - Abstraction over weather providers, with the synthetic default
//! - Theme preference storage and the display formatting rules
//! - The token-tagged request state machine driving the view
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod format;
pub mod icons;
pub mod model;
pub mod provider;
pub mod state;
pub mod theme;

pub use model::{FORECAST_DAYS, ForecastEntry, WeatherReport, WeatherSnapshot};
pub use provider::{FetchError, WeatherProvider, default_provider};
pub use state::{DEFAULT_CITY, Dashboard, RequestState, RequestToken};
pub use theme::ThemeStore;
