//! Full request cycles through EffectStoreTestHarness
//!
//! Each test drives the store the way the runtime does: dispatch an intent,
//! drain the declared effect, then feed back the async result.

use tui_dispatch::testing::*;
use weather_board::{
    action::Action,
    components::{Component, WeatherBoard, WeatherBoardProps},
    config::Variant,
    effect::Effect,
    error::GENERIC_ERROR_MESSAGE,
    reducer::reducer,
    state::{AppState, Condition, CurrentConditions, Location, WeatherResult},
};

fn sunny_london() -> WeatherResult {
    WeatherResult {
        location: Location {
            name: "London".into(),
            country: Some("United Kingdom".into()),
        },
        current: Some(CurrentConditions {
            temp_c: 21.5,
            condition: Condition {
                text: "Sunny".into(),
                icon: "https://cdn.weatherapi.com/weather/64x64/day/113.png".into(),
                code: Some(1000),
            },
            humidity: 40,
            wind_kph: 10.0,
        }),
        forecast: None,
    }
}

#[test]
fn test_success_cycle() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::QuerySubmit("London".into()));
    harness.assert_state(|s| s.is_loading);

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(
        |e| matches!(e, Effect::FetchWeather { query, .. } if query == "London"),
    );

    harness.complete_action(Action::WeatherDidLoad {
        request: 1,
        result: sunny_london(),
    });
    let (changed, total) = harness.process_emitted();
    assert_eq!((changed, total), (1, 1));

    harness.assert_state(|s| !s.is_loading);
    harness.assert_state(|s| s.error.is_empty());
    harness.assert_state(|s| s.weather.as_ref().map(|w| w.location.name.as_str()) == Some("London"));
}

#[test]
fn test_provider_error_cycle() {
    let mut harness = EffectStoreTestHarness::new(
        AppState {
            weather: Some(sunny_london()),
            ..AppState::default().with_query("Atlantis")
        },
        reducer,
    );

    harness.dispatch_collect(Action::WeatherFetch);
    harness.assert_state(|s| s.is_loading);

    harness.complete_action(Action::WeatherDidReject {
        request: 1,
        message: "No matching location found.".into(),
    });
    harness.process_emitted();

    harness.assert_state(|s| s.error == "No matching location found.");
    harness.assert_state(|s| s.weather.is_none());
    harness.assert_state(|s| !s.is_loading);
}

#[test]
fn test_transport_error_cycle_keeps_board_usable() {
    let mut harness = EffectStoreTestHarness::new(AppState::default().with_query("London"), reducer);

    harness.dispatch_collect(Action::WeatherFetch);
    harness.complete_action(Action::WeatherDidError {
        request: 1,
        detail: "connection refused".into(),
    });
    harness.process_emitted();

    harness.assert_state(|s| s.error == GENERIC_ERROR_MESSAGE);
    harness.assert_state(|s| !s.is_loading);

    // Resubmitting starts a fresh request and clears the error
    harness.drain_effects();
    harness.dispatch_collect(Action::WeatherFetch);
    harness.assert_state(|s| s.is_loading && s.error.is_empty());
    harness
        .drain_effects()
        .effects_first_matches(|e| matches!(e, Effect::FetchWeather { request: 2, .. }));
}

#[test]
fn test_last_request_wins() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::QuerySubmit("London".into()));
    harness.dispatch_collect(Action::QuerySubmit("Paris".into()));
    harness.drain_effects().effects_count(2);

    let mut paris = sunny_london();
    paris.location.name = "Paris".into();

    // Paris answers first, then the stale London reply arrives
    harness.complete_action(Action::WeatherDidLoad {
        request: 2,
        result: paris,
    });
    harness.complete_action(Action::WeatherDidLoad {
        request: 1,
        result: sunny_london(),
    });
    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 2);
    assert_eq!(changed, 1, "stale reply should be dropped");
    harness.assert_state(|s| s.weather.as_ref().map(|w| w.location.name.as_str()) == Some("Paris"));
}

#[test]
fn test_empty_submit_emits_no_effect() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    let results = harness.dispatch_all([
        Action::WeatherFetch,
        Action::QuerySubmit(String::new()),
    ]);

    assert_eq!(results, vec![false, false]);
    harness.drain_effects().effects_empty();
    harness.assert_state(|s| !s.is_loading);
}

#[test]
fn test_loading_label_then_result_render() {
    let mut harness =
        EffectStoreTestHarness::new(AppState::new(Variant::Current).with_query("London"), reducer);

    harness.dispatch_collect(Action::WeatherFetch);
    let mut board = WeatherBoard::new();
    let loading = harness.render_plain(80, 30, |frame, area, state| {
        let props = WeatherBoardProps {
            state,
            is_focused: true,
        };
        board.render(frame, area, props);
    });
    assert!(
        loading.contains("Loading..."),
        "Button should show loading text:\n{}",
        loading
    );

    harness.complete_action(Action::WeatherDidLoad {
        request: 1,
        result: sunny_london(),
    });
    harness.process_emitted();

    let loaded = harness.render_plain(80, 30, |frame, area, state| {
        let props = WeatherBoardProps {
            state,
            is_focused: true,
        };
        board.render(frame, area, props);
    });
    assert!(loaded.contains("Get Weather"), "Button label restored:\n{}", loaded);
    for expected in ["London", "21.5", "Sunny", "40", "10"] {
        assert!(
            loaded.contains(expected),
            "Expected {expected:?} in output:\n{}",
            loaded
        );
    }
}
