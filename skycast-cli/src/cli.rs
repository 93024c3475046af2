use anyhow::Result;
use clap::{Parser, Subcommand};
use skycast_core::{
    DEFAULT_CITY, Dashboard, ThemeStore, WeatherProvider, default_provider,
};

use crate::view::{self, Palette};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "SkyCast terminal weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Use the dark palette for this run without persisting it.
    #[arg(long, global = true, conflicts_with = "light")]
    pub dark: bool,

    /// Use the light palette for this run without persisting it.
    #[arg(long, global = true)]
    pub light: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the dashboard once for a city and exit.
    Show {
        /// City name; defaults to London.
        city: Option<String>,
    },

    /// Interactive dashboard: search cities, toggle the theme (default).
    Dashboard,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut store = ThemeStore::load();
        if self.dark {
            store.set_dark(true);
        } else if self.light {
            store.set_dark(false);
        }

        let provider = default_provider();

        match self.command.unwrap_or(Command::Dashboard) {
            Command::Show { city } => {
                let city = city.as_deref().unwrap_or(DEFAULT_CITY);
                show_once(provider.as_ref(), &store, city).await
            }
            Command::Dashboard => run_dashboard(provider.as_ref(), store).await,
        }
    }
}

/// Run one search through the state machine.
///
/// Empty or whitespace-only input issues no fetch and leaves the state as
/// is. The fetch is not cancellable; the token check in `complete` keeps an
/// older completion from overwriting a newer one.
async fn refresh(provider: &dyn WeatherProvider, dashboard: &mut Dashboard, query: &str) {
    let Some((token, city)) = dashboard.submit(query) else {
        return;
    };

    let result = provider.fetch_weather(&city).await;
    dashboard.complete(token, result);
}

async fn show_once(provider: &dyn WeatherProvider, store: &ThemeStore, city: &str) -> Result<()> {
    let mut dashboard = Dashboard::new();
    refresh(provider, &mut dashboard, city).await;

    view::print_dashboard(&Palette::for_mode(store.is_dark()), store.is_dark(), dashboard.state());
    Ok(())
}

async fn run_dashboard(provider: &dyn WeatherProvider, mut store: ThemeStore) -> Result<()> {
    let mut dashboard = Dashboard::new();

    // Mount: show the loading frame, then resolve the default city.
    view::print_dashboard(&Palette::for_mode(store.is_dark()), store.is_dark(), dashboard.state());
    refresh(provider, &mut dashboard, DEFAULT_CITY).await;

    loop {
        view::print_dashboard(
            &Palette::for_mode(store.is_dark()),
            store.is_dark(),
            dashboard.state(),
        );

        let input = inquire::Text::new("Search for a city")
            .with_help_message(":t toggles the theme, :q quits")
            .prompt();

        match input {
            Ok(line) => match line.trim() {
                ":q" => break,
                ":t" => store.toggle(),
                query => refresh(provider, &mut dashboard, query).await,
            },
            Err(
                inquire::InquireError::OperationCanceled
                | inquire::InquireError::OperationInterrupted,
            ) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
