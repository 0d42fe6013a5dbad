//! Transport-level failures of a weather request

/// Shown to the user whenever a request fails below the provider level
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// A failure of the HTTP call itself or of decoding its body.
///
/// Provider-reported errors (unknown city, bad key) are not `FetchError`s;
/// they arrive as [`crate::api::WeatherOutcome::ProviderError`].
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}
