//! Provider configuration, built once at startup and handed to the client

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";
pub const DEFAULT_FORECAST_DAYS: u8 = 3;

/// Which flavour of the board to run
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Current conditions only, loading shown on the submit button
    #[default]
    Current,
    /// Current conditions plus a multi-day forecast, with a loading banner
    Forecast,
}

impl Variant {
    /// Endpoint path relative to the provider base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            Variant::Current => "current.json",
            Variant::Forecast => "forecast.json",
        }
    }

    pub fn shows_forecast(&self) -> bool {
        matches!(self, Variant::Forecast)
    }
}

/// Everything the HTTP client needs to talk to WeatherAPI.com
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
    /// Number of forecast days requested by the forecast variant
    pub forecast_days: u8,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            forecast_days: DEFAULT_FORECAST_DAYS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_forecast_days(mut self, days: u8) -> Self {
        self.forecast_days = days;
        self
    }

    /// Full URL for the given variant's endpoint
    pub fn endpoint_url(&self, variant: Variant) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            variant.endpoint()
        )
    }
}
