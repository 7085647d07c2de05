//! Day/night-adaptive color theme.

use egui::Color32;
use weather_core::SearchState;

/// Palette shared by the whole screen.
pub mod colors {
    use egui::Color32;

    /// Daytime sky at the top of the gradient, also the neutral background.
    pub const DAY: Color32 = Color32::from_rgb(165, 216, 255);
    /// Deeper blue the day gradient falls into.
    pub const DAY_DEEP: Color32 = Color32::from_rgb(96, 166, 232);
    /// Top of the night gradient; the bottom is plain black.
    pub const NIGHT: Color32 = Color32::from_rgb(28, 34, 72);
    /// Accent blue used for daytime text, the condition label, and values.
    pub const BLUE: Color32 = Color32::from_rgb(21, 101, 192);
    /// Muted gray for the "feels like" line.
    pub const GRAY: Color32 = Color32::from_rgb(100, 100, 110);
    /// Translucent dark fill behind the metric grid.
    pub const CARD: Color32 = Color32::from_rgba_premultiplied(20, 30, 48, 160);
    /// Error text.
    pub const ERROR: Color32 = Color32::from_rgb(220, 40, 40);
}

/// Derived (background gradient, text color) for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub top: Color32,
    pub bottom: Color32,
    pub text: Color32,
}

impl Theme {
    /// Derivation rules: an empty query field always reads as neutral day;
    /// a loaded snapshot picks day or night from its `is_day` flag; loading
    /// and error states stay neutral.
    pub fn for_view(query: &str, state: &SearchState) -> Self {
        if query.is_empty() {
            return Self::neutral();
        }

        match state {
            SearchState::Loaded(snapshot) if snapshot.is_daytime() => Self {
                top: colors::DAY,
                bottom: colors::DAY_DEEP,
                text: colors::BLUE,
            },
            SearchState::Loaded(_) => Self {
                top: colors::NIGHT,
                bottom: Color32::BLACK,
                text: Color32::WHITE,
            },
            _ => Self::neutral(),
        }
    }

    fn neutral() -> Self {
        Self { top: colors::DAY, bottom: colors::DAY, text: colors::BLUE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::WeatherSnapshot;

    fn snapshot(is_day: u8) -> WeatherSnapshot {
        WeatherSnapshot {
            location_name: "Kyiv".to_string(),
            country: "Ukraine".to_string(),
            localtime: "2024-03-05 14:30".to_string(),
            temp_c: 20.1,
            feelslike_c: 18.4,
            condition_text: "Sunny".to_string(),
            condition_icon: "//cdn.example/64x64/sunny.png".to_string(),
            humidity: 74.0,
            wind_kph: 11.2,
            uv: 4.0,
            pressure_mb: 1013.0,
            is_day,
        }
    }

    #[test]
    fn empty_query_is_always_neutral() {
        let theme = Theme::for_view("", &SearchState::Loaded(snapshot(0)));
        assert_eq!(theme.top, theme.bottom);
        assert_eq!(theme.top, colors::DAY);
        assert_eq!(theme.text, colors::BLUE);
    }

    #[test]
    fn daytime_snapshot_selects_day_gradient_and_blue_text() {
        let theme = Theme::for_view("Kyiv", &SearchState::Loaded(snapshot(1)));
        assert_eq!(theme.top, colors::DAY);
        assert_eq!(theme.bottom, colors::DAY_DEEP);
        assert_eq!(theme.text, colors::BLUE);
    }

    #[test]
    fn night_snapshot_selects_night_gradient_and_white_text() {
        let theme = Theme::for_view("Kyiv", &SearchState::Loaded(snapshot(0)));
        assert_eq!(theme.top, colors::NIGHT);
        assert_eq!(theme.bottom, Color32::BLACK);
        assert_eq!(theme.text, Color32::WHITE);
    }

    #[test]
    fn loading_error_and_idle_stay_neutral() {
        for state in [
            SearchState::Idle,
            SearchState::Loading,
            SearchState::Failed("boom".to_string()),
        ] {
            let theme = Theme::for_view("Kyiv", &state);
            assert_eq!(theme.top, colors::DAY);
            assert_eq!(theme.bottom, colors::DAY);
            assert_eq!(theme.text, colors::BLUE);
        }
    }
}
