use serde::Serialize;

/// Current conditions for a location, as reported by the weather source.
///
/// Temperatures are in Kelvin, exactly as received. Use
/// [`snapshot`](Self::snapshot) for display strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReading {
    /// Current temperature, in Kelvin.
    pub temp: f64,
    /// Forecast low for the day, in Kelvin.
    pub temp_min: f64,
    /// Forecast high for the day, in Kelvin.
    pub temp_max: f64,
    /// Short condition text (e.g., "overcast clouds").
    pub description: String,
}

impl WeatherReading {
    /// Formats the reading into the display strings the weather panel shows:
    /// Celsius, one decimal place, with the unit suffix.
    #[must_use]
    pub fn snapshot(&self) -> WeatherSnapshot {
        WeatherSnapshot {
            current: format_celsius(self.temp),
            high: format_celsius(self.temp_max),
            low: format_celsius(self.temp_min),
            description: self.description.clone(),
        }
    }
}

/// Display-ready strings for the weather panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherSnapshot {
    /// Current temperature, e.g. `"20.5°C"`.
    pub current: String,
    /// Daily high, same format as `current`.
    pub high: String,
    /// Daily low, same format as `current`.
    pub low: String,
    /// Condition text, passed through unmodified.
    pub description: String,
}

fn format_celsius(kelvin: f64) -> String {
    format!("{:.1}°C", kelvin - 273.15)
}
