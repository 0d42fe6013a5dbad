//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::error::GENERIC_ERROR_MESSAGE;
use crate::state::{AppState, RequestId, LOADING_ANIM_CYCLE_TICKS};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Query actions =====
        Action::QueryChange(query) => {
            if state.query == query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        Action::QuerySubmit(query) => {
            // A blank submission leaves the board exactly as it was.
            if query.trim().is_empty() {
                return DispatchResult::unchanged();
            }
            state.query = query;
            request_weather(state)
        }

        // ===== Weather actions =====
        Action::WeatherFetch => request_weather(state),

        Action::WeatherDidLoad { request, result } => {
            if !settle(state, request) {
                return DispatchResult::unchanged();
            }
            state.weather = Some(result);
            state.error.clear();
            DispatchResult::changed()
        }

        Action::WeatherDidReject { request, message } => {
            if !settle(state, request) {
                return DispatchResult::unchanged();
            }
            state.weather = None;
            state.error = message;
            DispatchResult::changed()
        }

        Action::WeatherDidError { request, .. } => {
            if !settle(state, request) {
                return DispatchResult::unchanged();
            }
            // Previous result stays on screen next to the error.
            state.error = GENERIC_ERROR_MESSAGE.to_string();
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.loading_anim_active() {
                state.tick_count = state.tick_count.wrapping_add(1);
                if state.loading_anim_ticks_remaining > 0 {
                    state.loading_anim_ticks_remaining -= 1;
                }
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Start a lookup for the current query, or do nothing if it is blank
fn request_weather(state: &mut AppState) -> DispatchResult<Effect> {
    let query = state.query.trim().to_string();
    if query.is_empty() {
        return DispatchResult::unchanged();
    }

    state.latest_request = state.latest_request.wrapping_add(1);
    state.is_loading = true;
    state.error.clear();
    state.tick_count = 0;
    state.loading_anim_ticks_remaining = 0;

    DispatchResult::changed_with(Effect::FetchWeather {
        request: state.latest_request,
        query,
        variant: state.variant,
    })
}

/// Clear loading for the latest request. Returns false for superseded replies.
fn settle(state: &mut AppState, request: RequestId) -> bool {
    if request != state.latest_request {
        return false;
    }
    state.is_loading = false;
    state.loading_anim_ticks_remaining = sweep_ticks_left(state.tick_count);
    true
}

/// Ticks left before the title sweep finishes its current pass.
/// A sweep that never started still plays one full pass.
fn sweep_ticks_left(tick_count: u32) -> u32 {
    let pass = LOADING_ANIM_CYCLE_TICKS.max(1);
    match tick_count % pass {
        0 if tick_count == 0 => pass,
        0 => 0,
        into_pass => pass - into_pass,
    }
}
