//! WeatherAPI.com client

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::{ProviderConfig, Variant};
use crate::error::FetchError;
use crate::state::{Condition, CurrentConditions, Forecast, Location, WeatherResult};

/// Result of a request that reached the provider and produced a readable body
#[derive(Clone, Debug, PartialEq)]
pub enum WeatherOutcome {
    Success(WeatherResult),
    /// The provider answered with an application-level error (unknown city, bad key)
    ProviderError(String),
}

// ============================================================================
// Wire format
// ============================================================================

/// Raw reply body. Either `error` or `location` is expected to be present.
#[derive(Debug, Deserialize)]
struct ProviderReply {
    error: Option<ProviderErrorBody>,
    location: Option<Location>,
    current: Option<CurrentConditions>,
    forecast: Option<Forecast>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    code: Option<u32>,
    message: String,
}

const ICON_SCHEME: &str = "https:";

/// Icons come back protocol-relative (`//cdn.weatherapi.com/...`)
fn absolute_icon_url(icon: &str) -> String {
    if icon.starts_with("//") {
        format!("{ICON_SCHEME}{icon}")
    } else {
        icon.to_string()
    }
}

fn normalize_condition(condition: &mut Condition) {
    condition.icon = absolute_icon_url(&condition.icon);
}

/// Validate a reply body and turn it into an outcome.
///
/// An embedded `error` object wins over everything else. A body with neither
/// an error nor a location is a parse failure.
pub fn parse_reply(body: &str) -> Result<WeatherOutcome, FetchError> {
    let reply: ProviderReply = serde_json::from_str(body)?;

    if let Some(error) = reply.error {
        debug!(code = ?error.code, message = %error.message, "provider reported an error");
        return Ok(WeatherOutcome::ProviderError(error.message));
    }

    let location = reply
        .location
        .ok_or_else(|| FetchError::Parse("response has neither `error` nor `location`".into()))?;

    let mut result = WeatherResult {
        location,
        current: reply.current,
        forecast: reply.forecast,
    };
    if let Some(current) = result.current.as_mut() {
        normalize_condition(&mut current.condition);
    }
    if let Some(forecast) = result.forecast.as_mut() {
        for day in &mut forecast.forecastday {
            normalize_condition(&mut day.day.condition);
        }
    }

    Ok(WeatherOutcome::Success(result))
}

// ============================================================================
// Client
// ============================================================================

#[derive(Clone, Debug)]
pub struct WeatherApiClient {
    http: Client,
    config: ProviderConfig,
}

impl WeatherApiClient {
    pub fn new(config: ProviderConfig) -> Result<Self, FetchError> {
        let http = Client::builder().build().map_err(FetchError::Client)?;
        Ok(Self { http, config })
    }

    /// Look up `query` on the endpoint matching `variant`.
    ///
    /// The body is inspected before the HTTP status because the provider
    /// reports unknown locations and bad keys as JSON with a 4xx status.
    #[instrument(skip(self), fields(endpoint = variant.endpoint()))]
    pub async fn fetch(&self, query: &str, variant: Variant) -> Result<WeatherOutcome, FetchError> {
        let url = self.config.endpoint_url(variant);

        let mut params = vec![
            ("key", self.config.api_key.clone()),
            ("q", query.to_string()),
        ];
        if variant.shows_forecast() {
            params.push(("days", self.config.forecast_days.to_string()));
        }

        let response = self.http.get(&url).query(&params).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "provider replied");

        let parsed = parse_reply(&body);
        if !status.is_success() && !matches!(parsed, Ok(WeatherOutcome::ProviderError(_))) {
            warn!(status = status.as_u16(), "provider returned an unreadable error");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }
        parsed
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
