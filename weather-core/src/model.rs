use chrono::NaiveDateTime;

/// Format of the provider's `localtime` field, local to the searched place.
const LOCALTIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parsed current-weather payload for one successful query.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub country: String,
    /// `YYYY-MM-DD HH:MM`, as reported by the provider.
    pub localtime: String,
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub condition_text: String,
    /// Protocol-relative icon path, e.g. `//cdn.weatherapi.com/.../64x64/day/113.png`.
    pub condition_icon: String,
    pub humidity: f64,
    pub wind_kph: f64,
    pub uv: f64,
    pub pressure_mb: f64,
    /// 1 for daytime, 0 for night.
    pub is_day: u8,
}

impl WeatherSnapshot {
    pub fn is_daytime(&self) -> bool {
        self.is_day == 1
    }

    /// Absolute URL of the condition icon, upgraded to the 128x128 variant.
    pub fn icon_url(&self) -> String {
        format!("https:{}", self.condition_icon.replace("64x64", "128x128"))
    }

    /// `HH:MM` part of the local date-time.
    pub fn local_time(&self) -> String {
        match NaiveDateTime::parse_from_str(&self.localtime, LOCALTIME_FORMAT) {
            Ok(dt) => dt.format("%H:%M").to_string(),
            Err(_) => self
                .localtime
                .split(' ')
                .nth(1)
                .unwrap_or(self.localtime.as_str())
                .to_string(),
        }
    }

    /// Date part of the local date-time, reordered day-month-year.
    pub fn local_date(&self) -> String {
        match NaiveDateTime::parse_from_str(&self.localtime, LOCALTIME_FORMAT) {
            Ok(dt) => dt.format("%d-%m-%Y").to_string(),
            Err(_) => {
                let date = self.localtime.split(' ').next().unwrap_or_default();
                date.rsplit('-').collect::<Vec<_>>().join("-")
            }
        }
    }
}

/// Render a numeric payload field for display: whole numbers drop the
/// redundant `.0`, everything else uses the plain `f64` formatting.
pub fn format_metric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
