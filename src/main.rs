//! Weather Board - look up current weather (and a short forecast) by city name

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::info;
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem};
use weather_board::action::Action;
use weather_board::api::WeatherApiClient;
use weather_board::components::{Component, WeatherBoard, WeatherBoardProps};
use weather_board::config::{DEFAULT_BASE_URL, DEFAULT_FORECAST_DAYS, ProviderConfig, Variant};
use weather_board::effect::{Effect, fetch_action};
use weather_board::logging;
use weather_board::reducer::reducer;
use weather_board::state::{AppState, LOADING_ANIM_TICK_MS};

/// Weather Board - terminal weather lookup
#[derive(Parser, Debug)]
#[command(name = "weather-board")]
#[command(about = "Look up current weather and a short forecast by city name")]
struct Args {
    /// WeatherAPI.com API key
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    api_key: String,

    /// City to look up on start
    #[arg(long, short)]
    city: Option<String>,

    /// Board flavour: current conditions only, or with a forecast
    #[arg(long, value_enum, default_value_t = Variant::Current)]
    variant: Variant,

    /// Forecast days requested by the forecast board
    #[arg(long, default_value_t = DEFAULT_FORECAST_DAYS, value_parser = clap::value_parser!(u8).range(1..=14))]
    days: u8,

    /// Provider base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Where diagnostics are written (defaults to the system temp dir)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum BoardComponentId {
    Board,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum BoardContext {
    Main,
}

impl EventRoutingState<BoardComponentId, BoardContext> for AppState {
    fn focused(&self) -> Option<BoardComponentId> {
        Some(BoardComponentId::Board)
    }

    fn modal(&self) -> Option<BoardComponentId> {
        None
    }

    fn binding_context(&self, _id: BoardComponentId) -> BoardContext {
        BoardContext::Main
    }

    fn default_context(&self) -> BoardContext {
        BoardContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        api_key,
        city,
        variant,
        days,
        base_url,
        log_file,
        debug: debug_args,
    } = Args::parse();

    let log_path = log_file.unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;
    info!(?variant, log = %log_path.display(), "starting weather board");

    let config = ProviderConfig::new(api_key)
        .with_base_url(base_url)
        .with_forecast_days(days);
    let client = WeatherApiClient::new(config).map_err(io::Error::other)?;

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            let state = AppState::new(variant);
            let state = match city {
                Some(city) => state.with_query(city),
                None => state,
            };
            Ok::<AppState, io::Error>(state)
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &debug,
        store,
        Arc::new(client),
        replay_actions,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    info!("weather board closed");
    Ok(())
}

struct BoardUi {
    board: WeatherBoard,
}

impl BoardUi {
    fn new() -> Self {
        Self {
            board: WeatherBoard::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<BoardComponentId>,
    ) {
        event_ctx.set_component_area(BoardComponentId::Board, area);

        let props = WeatherBoardProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.board.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = WeatherBoardProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.board.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    client: Arc<WeatherApiClient>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(BoardUi::new()));
    let mut bus: EventBus<AppState, Action, BoardComponentId, BoardContext> = EventBus::new();
    let keybindings: Keybindings<BoardContext> = Keybindings::new();

    let ui_board = Rc::clone(&ui);
    bus.register(BoardComponentId::Board, move |event, state| {
        ui_board.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            // A no-op unless --city prefilled the query
            Some(Action::WeatherFetch),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_ANIM_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, Arc::clone(&client)),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: Arc<WeatherApiClient>) {
    match effect {
        Effect::FetchWeather {
            request,
            query,
            variant,
        } => {
            // Same key: a newer lookup replaces one still in flight.
            ctx.tasks().spawn("weather", async move {
                fetch_action(&client, request, &query, variant).await
            });
        }
    }
}
