//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Variant;

/// Identifier handed out to each issued weather request
pub type RequestId = u64;

/// Weather lookup result as returned by WeatherAPI.com
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherResult {
    pub location: Location,
    #[serde(default)]
    pub current: Option<CurrentConditions>,
    #[serde(default)]
    pub forecast: Option<Forecast>,
}

impl WeatherResult {
    /// Forecast days in provider order, empty when no forecast was requested
    pub fn forecast_days(&self) -> &[ForecastDay] {
        self.forecast
            .as_ref()
            .map(|f| f.forecastday.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
}

impl Location {
    /// "Name, Country" when the country is known
    pub fn display_name(&self) -> String {
        match self.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub condition: Condition,
    pub humidity: u8,
    pub wind_kph: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Condition {
    pub text: String,
    /// Icon URL; protocol-relative on the wire, absolute after parsing
    #[serde(default)]
    pub icon: String,
    /// Provider condition code (1000 = clear, 1063 = patchy rain, ...)
    #[serde(default)]
    pub code: Option<u16>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Forecast {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastDay {
    pub date: String,
    pub day: DaySummary,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DaySummary {
    pub avgtemp_c: f64,
    pub condition: Condition,
}

/// Format a Celsius reading the way the board shows it ("21.5°C", "10°C")
pub fn format_celsius(celsius: f64) -> String {
    format!("{celsius}°C")
}

/// Animation timing for the title gradient while a request is in flight.
pub const LOADING_ANIM_TICK_MS: u64 = 15;
pub const LOADING_ANIM_CYCLE_TICKS: u32 = 60;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// City name as typed
    #[debug(section = "Query", label = "City", debug_fmt)]
    pub query: String,

    /// Last successful lookup (None before the first fetch or after a provider error)
    #[debug(section = "Weather", label = "Result", debug_fmt)]
    pub weather: Option<WeatherResult>,

    /// True while the latest request is in flight
    #[debug(section = "Weather", label = "Loading")]
    pub is_loading: bool,

    /// Empty when there is nothing to report
    #[debug(section = "Weather", label = "Error", debug_fmt)]
    pub error: String,

    #[debug(section = "Request", label = "Variant", debug_fmt)]
    pub variant: Variant,

    /// Id of the most recently issued request; replies for older ids are dropped
    #[debug(section = "Request", label = "Latest", debug_fmt)]
    pub latest_request: RequestId,

    // --- Animation internals (skipped) ---
    #[debug(skip)]
    pub tick_count: u32,

    /// Remaining ticks to finish the current animation cycle after loading
    #[debug(skip)]
    pub loading_anim_ticks_remaining: u32,
}

impl AppState {
    pub fn new(variant: Variant) -> Self {
        Self {
            query: String::new(),
            weather: None,
            is_loading: false,
            error: String::new(),
            variant,
            latest_request: 0,
            tick_count: 0,
            loading_anim_ticks_remaining: 0,
        }
    }

    /// Start with a prefilled query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Current conditions, if the last result carried them
    pub fn current(&self) -> Option<&CurrentConditions> {
        self.weather.as_ref().and_then(|w| w.current.as_ref())
    }

    pub fn forecast_days(&self) -> &[ForecastDay] {
        self.weather
            .as_ref()
            .map(WeatherResult::forecast_days)
            .unwrap_or_default()
    }

    pub fn loading_anim_active(&self) -> bool {
        self.is_loading || self.loading_anim_ticks_remaining > 0
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_celsius_keeps_provider_precision() {
        assert_eq!(format_celsius(21.5), "21.5°C");
        assert_eq!(format_celsius(10.0), "10°C");
        assert_eq!(format_celsius(-3.2), "-3.2°C");
    }

    #[test]
    fn test_display_name_includes_country() {
        let location = Location {
            name: "Paris".into(),
            country: Some("France".into()),
        };
        assert_eq!(location.display_name(), "Paris, France");

        let bare = Location {
            name: "Paris".into(),
            ..Default::default()
        };
        assert_eq!(bare.display_name(), "Paris");
    }

    #[test]
    fn test_forecast_days_empty_without_forecast() {
        let state = AppState {
            weather: Some(WeatherResult::default()),
            ..Default::default()
        };
        assert!(state.forecast_days().is_empty());
        assert!(state.current().is_none());
    }
}
