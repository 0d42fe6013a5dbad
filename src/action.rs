//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{RequestId, WeatherResult};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Query category =====
    /// Query text edited
    QueryChange(String),

    /// Query submitted from the input (stores it, then fetches; blank text is ignored)
    QuerySubmit(String),

    // ===== Weather category =====
    /// Intent: fetch weather for the current query (triggers async task)
    WeatherFetch,

    /// Result: provider returned weather data
    WeatherDidLoad {
        request: RequestId,
        result: WeatherResult,
    },

    /// Result: provider answered with an error message of its own
    WeatherDidReject { request: RequestId, message: String },

    /// Result: the request or its body failed (detail is for logs only)
    WeatherDidError { request: RequestId, detail: String },

    // ===== Uncategorized (global) =====
    /// Force a re-render (cursor movement in the input)
    Render,

    /// Periodic tick for the loading animation
    Tick,

    /// Exit the application
    Quit,
}
