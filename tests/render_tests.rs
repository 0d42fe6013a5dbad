//! Render snapshot tests using RenderHarness
//!
//! The board is a pure function of state, so each test builds a state,
//! renders it to a plain-text buffer and checks what is visible.

use tui_dispatch::testing::*;
use weather_board::{
    components::{Component, WeatherBoard, WeatherBoardProps},
    config::Variant,
    state::{
        AppState, Condition, CurrentConditions, DaySummary, Forecast, ForecastDay, Location,
        WeatherResult,
    },
};

fn render(state: &AppState) -> String {
    let mut render = RenderHarness::new(80, 30);
    let mut board = WeatherBoard::new();

    render.render_to_string_plain(|frame| {
        let props = WeatherBoardProps {
            state,
            is_focused: true,
        };
        board.render(frame, frame.area(), props);
    })
}

fn condition(text: &str, code: u16) -> Condition {
    Condition {
        text: text.into(),
        icon: String::new(),
        code: Some(code),
    }
}

fn current(temp_c: f64, text: &str, humidity: u8, wind_kph: f64) -> CurrentConditions {
    CurrentConditions {
        temp_c,
        condition: condition(text, 1000),
        humidity,
        wind_kph,
    }
}

fn day(date: &str, avgtemp_c: f64, text: &str) -> ForecastDay {
    ForecastDay {
        date: date.into(),
        day: DaySummary {
            avgtemp_c,
            condition: condition(text, 1003),
        },
    }
}

fn loaded(variant: Variant, result: WeatherResult) -> AppState {
    AppState {
        weather: Some(result),
        ..AppState::new(variant)
    }
}

#[test]
fn test_render_initial_state() {
    let output = render(&AppState::default());

    assert!(output.contains("Get Weather"), "Should show submit control");
    assert!(output.contains("Enter city name"), "Should show placeholder");
    assert!(!output.contains("Humidity"), "No conditions before a fetch");
}

#[test]
fn test_render_current_conditions() {
    let state = loaded(
        Variant::Current,
        WeatherResult {
            location: Location {
                name: "London".into(),
                ..Default::default()
            },
            current: Some(current(21.5, "Sunny", 40, 10.0)),
            forecast: None,
        },
    );

    let output = render(&state);

    assert!(output.contains("London"));
    assert!(output.contains("21.5"));
    assert!(output.contains("Sunny"));
    assert!(output.contains("Humidity: 40%"));
    assert!(output.contains("Wind: 10 kph"));
    assert!(state.error.is_empty());
}

#[test]
fn test_render_result_without_current_block() {
    let state = loaded(
        Variant::Current,
        WeatherResult {
            location: Location {
                name: "Nowhere".into(),
                ..Default::default()
            },
            current: None,
            forecast: None,
        },
    );

    let output = render(&state);
    assert!(!output.contains("Nowhere"), "Conditions block needs `current`");
    assert!(!output.contains("Humidity"));
}

#[test]
fn test_render_error_only_when_present() {
    let mut state = AppState::default();
    assert!(!render(&state).contains("No matching location"));

    state.error = "No matching location found.".into();
    let output = render(&state);
    assert!(output.contains("No matching location found."));
}

#[test]
fn test_render_stale_result_with_error() {
    let mut state = loaded(
        Variant::Current,
        WeatherResult {
            location: Location {
                name: "Berlin".into(),
                ..Default::default()
            },
            current: Some(current(12.0, "Overcast", 70, 18.0)),
            forecast: None,
        },
    );
    state.error = "Something went wrong".into();

    let output = render(&state);
    assert!(output.contains("Something went wrong"));
    assert!(output.contains("Overcast"), "Previous result stays visible");
}

#[test]
fn test_render_forecast_cards_in_order() {
    let state = loaded(
        Variant::Forecast,
        WeatherResult {
            location: Location {
                name: "Oslo".into(),
                ..Default::default()
            },
            current: Some(current(4.0, "Cloudy", 80, 12.0)),
            forecast: Some(Forecast {
                forecastday: vec![
                    day("2024-05-03", 6.1, "Rain"),
                    day("2024-05-01", 5.0, "Snow"),
                    day("2024-05-02", 7.3, "Mist"),
                ],
            }),
        },
    );

    let output = render(&state);

    assert_eq!(output.matches("Avg ").count(), 3, "One card per day:\n{output}");
    for expected in ["Avg 6.1°C", "Avg 5°C", "Avg 7.3°C"] {
        assert!(output.contains(expected), "Missing {expected:?}:\n{output}");
    }

    let first = output.find("2024-05-03").expect("first date rendered");
    let second = output.find("2024-05-01").expect("second date rendered");
    let third = output.find("2024-05-02").expect("third date rendered");
    assert!(first < second && second < third, "Cards keep provider order");
}

#[test]
fn test_render_week_forecast_wraps_and_keeps_every_date() {
    let dates: Vec<String> = (1..=7).map(|d| format!("2024-05-0{d}")).collect();
    let state = loaded(
        Variant::Forecast,
        WeatherResult {
            location: Location {
                name: "Oslo".into(),
                ..Default::default()
            },
            current: Some(current(4.0, "Cloudy", 80, 12.0)),
            forecast: Some(Forecast {
                forecastday: dates
                    .iter()
                    .enumerate()
                    .map(|(i, date)| day(date, 3.0 + i as f64, "Rain"))
                    .collect(),
            }),
        },
    );

    let output = render(&state);

    let missing: Vec<_> = dates
        .iter()
        .filter(|date| !output.contains(date.as_str()))
        .collect();
    assert!(missing.is_empty(), "Dates cut off: {missing:?}\n{output}");
    assert_eq!(output.matches("Avg ").count(), 7, "One card per day:\n{output}");

    // Wrapped rows still read in provider order
    let positions: Vec<_> = dates
        .iter()
        .filter_map(|date| output.find(date.as_str()))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "Order lost:\n{output}");
}

#[test]
fn test_render_no_forecast_block_for_empty_days() {
    let state = loaded(
        Variant::Forecast,
        WeatherResult {
            location: Location {
                name: "Oslo".into(),
                ..Default::default()
            },
            current: Some(current(4.0, "Cloudy", 80, 12.0)),
            forecast: Some(Forecast {
                forecastday: Vec::new(),
            }),
        },
    );

    assert!(!render(&state).contains("Avg "));
}

#[test]
fn test_render_forecast_loading_banner() {
    let state = AppState {
        is_loading: true,
        ..AppState::new(Variant::Forecast).with_query("Oslo")
    };

    let output = render(&state);
    assert!(output.contains("Loading weather..."), "Banner shown:\n{output}");
    assert!(output.contains("Get Weather"), "Label stays static");
}

#[test]
fn test_render_current_loading_label() {
    let state = AppState {
        is_loading: true,
        ..AppState::new(Variant::Current).with_query("Oslo")
    };

    let output = render(&state);
    assert!(output.contains("Loading..."));
    assert!(!output.contains("Loading weather..."));
}

#[test]
fn test_render_help_bar() {
    let output = render(&AppState::default());

    assert!(output.contains("refresh"), "Should show refresh hint");
    assert!(output.contains("quit"), "Should show quit hint");
}
