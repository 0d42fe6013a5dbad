//! Effects - side effects declared by the reducer, and how they resolve

use tracing::{error, info, warn};

use crate::action::Action;
use crate::api::{WeatherApiClient, WeatherOutcome};
use crate::config::Variant;
use crate::state::RequestId;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Look up weather for `query`; the reply is tagged with `request`
    FetchWeather {
        request: RequestId,
        query: String,
        variant: Variant,
    },
}

/// Run one lookup and turn whatever happened into the action the reducer expects.
///
/// Never fails: transport and parse errors become `WeatherDidError` and are logged here.
pub async fn fetch_action(
    client: &WeatherApiClient,
    request: RequestId,
    query: &str,
    variant: Variant,
) -> Action {
    match client.fetch(query, variant).await {
        Ok(WeatherOutcome::Success(result)) => {
            info!(request, location = %result.location.name, "weather loaded");
            Action::WeatherDidLoad { request, result }
        }
        Ok(WeatherOutcome::ProviderError(message)) => {
            warn!(request, %message, "provider rejected lookup");
            Action::WeatherDidReject { request, message }
        }
        Err(e) => {
            error!(request, error = %e, "error fetching weather");
            Action::WeatherDidError {
                request,
                detail: e.to_string(),
            }
        }
    }
}
