//! Condition label → display glyph mapping.

/// Glyph used for any condition label without a mapping of its own.
pub const DEFAULT_GLYPH: &str = "☀️";

/// Resolve a condition label to its glyph.
///
/// Total over all inputs: unrecognized labels, including the empty string,
/// fall back to [`DEFAULT_GLYPH`].
pub fn resolve(condition: &str) -> &'static str {
    match condition {
        "Clear" | "Sunny" => "☀️",
        "Clouds" | "Cloudy" => "☁️",
        "Rain" => "🌧️",
        "Snow" => "❄️",
        "Thunderstorm" => "⛈️",
        "Drizzle" => "🌦️",
        "Mist" => "🌫️",
        "Partly Cloudy" => "⛅",
        _ => DEFAULT_GLYPH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_resolve_to_their_glyph() {
        assert_eq!(resolve("Clear"), "☀️");
        assert_eq!(resolve("Clouds"), "☁️");
        assert_eq!(resolve("Rain"), "🌧️");
        assert_eq!(resolve("Snow"), "❄️");
        assert_eq!(resolve("Thunderstorm"), "⛈️");
        assert_eq!(resolve("Drizzle"), "🌦️");
        assert_eq!(resolve("Mist"), "🌫️");
        assert_eq!(resolve("Sunny"), "☀️");
        assert_eq!(resolve("Cloudy"), "☁️");
        assert_eq!(resolve("Partly Cloudy"), "⛅");
    }

    #[test]
    fn unmapped_labels_fall_back_to_default() {
        assert_eq!(resolve("Sandstorm"), DEFAULT_GLYPH);
        assert_eq!(resolve("clear"), DEFAULT_GLYPH); // case-sensitive
        assert_eq!(resolve(""), DEFAULT_GLYPH);
    }
}
