//! Themed rendering of the dashboard.
//!
//! Pure functions from palette + request state to terminal output; the whole
//! view is reprinted on every state transition.

use colored::{Color, Colorize};
use skycast_core::{ForecastEntry, RequestState, WeatherSnapshot, format, icons};

const CARD_WIDTH: usize = 46;

/// Render-side color set for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub secondary: Color,
    pub border: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            accent: Color::TrueColor { r: 0x3B, g: 0x82, b: 0xF6 },
            text: Color::TrueColor { r: 0x1F, g: 0x29, b: 0x37 },
            secondary: Color::TrueColor { r: 0x6B, g: 0x72, b: 0x80 },
            border: Color::TrueColor { r: 0x9C, g: 0xA3, b: 0xAF },
        }
    }

    pub fn dark() -> Self {
        Self {
            accent: Color::TrueColor { r: 0x60, g: 0xA5, b: 0xFA },
            text: Color::TrueColor { r: 0xF9, g: 0xFA, b: 0xFB },
            secondary: Color::TrueColor { r: 0xD1, g: 0xD5, b: 0xDB },
            border: Color::TrueColor { r: 0x4B, g: 0x55, b: 0x63 },
        }
    }

    pub fn for_mode(is_dark: bool) -> Self {
        if is_dark { Self::dark() } else { Self::light() }
    }
}

/// Print the full dashboard for the current request state.
pub fn print_dashboard(palette: &Palette, is_dark: bool, state: &RequestState) {
    println!();
    print_header(palette, is_dark);

    match state {
        RequestState::Loading => print_loading(palette),
        RequestState::Error(message) => print_error(palette, message),
        RequestState::Ready(snapshot, forecast) => {
            print_current(palette, snapshot);
            print_forecast(palette, forecast);
        }
    }
}

fn rule(palette: &Palette) {
    println!("{}", "─".repeat(CARD_WIDTH).color(palette.border));
}

fn print_header(palette: &Palette, is_dark: bool) {
    let marker = if is_dark { "☾ dark" } else { "☀ light" };
    println!(
        "{}  {}",
        "☀️ SkyCast".color(palette.accent).bold(),
        format!("[{marker}]").color(palette.secondary),
    );
}

fn print_loading(palette: &Palette) {
    rule(palette);
    println!("{}", "  ⟳ Fetching weather…".color(palette.secondary));
    rule(palette);
}

/// The error message replaces the main content area; no stale data is kept
/// alongside it.
fn print_error(palette: &Palette, message: &str) {
    rule(palette);
    println!("  {}", message.red().bold());
    rule(palette);
}

fn print_current(palette: &Palette, snapshot: &WeatherSnapshot) {
    rule(palette);
    println!("  📍 {}", snapshot.location_name.color(palette.text).bold());
    println!(
        "  {}  {}",
        icons::resolve(&snapshot.condition),
        format::temp_label(snapshot.temperature_c).color(palette.text).bold(),
    );
    println!("  {}", snapshot.description.color(palette.secondary));
    println!();

    detail_row(
        palette,
        ("Feels like", &format::temp_label(snapshot.feels_like_c)),
        ("Humidity", &format::humidity_label(snapshot.humidity_pct)),
    );
    detail_row(
        palette,
        ("Wind", &format::wind_label(snapshot.wind_speed_mps)),
        ("Pressure", &format::pressure_label(snapshot.pressure_hpa)),
    );
    detail_row(
        palette,
        ("Visibility", &format::visibility_km(snapshot.visibility_m)),
        ("Sunrise", &format::sunrise_label(snapshot.sunrise_epoch)),
    );
    rule(palette);
}

// Widths are fixed before coloring so ANSI escapes do not skew the columns.
fn detail_row(palette: &Palette, left: (&str, &str), right: (&str, &str)) {
    println!(
        "  {} {}   {} {}",
        format!("{:<11}", left.0).color(palette.secondary),
        format!("{:<9}", left.1).color(palette.text),
        format!("{:<9}", right.0).color(palette.secondary),
        right.1.color(palette.text),
    );
}

fn print_forecast(palette: &Palette, forecast: &[ForecastEntry]) {
    println!();
    println!("  {}", "5-Day Forecast".color(palette.text).bold());
    rule(palette);

    for (day, entry) in forecast.iter().enumerate() {
        let label = format::forecast_day_label(day, entry.date);
        println!(
            "  {} {}  {} {} {}",
            format!("{label:<6}").color(palette.text).bold(),
            icons::resolve(&entry.condition),
            format!("{:<14}", entry.condition).color(palette.secondary),
            format!("{:>4}", format::degrees_label(entry.temp_max_c)).color(palette.text).bold(),
            format!("{:<4}", format::degrees_label(entry.temp_min_c)).color(palette.secondary),
        );
    }

    rule(palette);
}
