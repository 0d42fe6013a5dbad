use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::conditions_panel::CONDITIONS_HEIGHT;
use super::forecast_cards::forecast_height;
use super::search_bar::{BUTTON_LABEL, BUTTON_LOADING_LABEL};
use super::{
    Component, ConditionsPanel, ConditionsPanelProps, ForecastCards, ForecastCardsProps,
    SearchBar, SearchBarProps, TitleBanner, TitleBannerProps,
};
use crate::action::Action;
use crate::config::Variant;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";
pub const LOADING_BANNER: &str = "Loading weather...";

/// Props for WeatherBoard - read-only view of state
pub struct WeatherBoardProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole board: title, search bar, status lines, conditions and forecast
#[derive(Default)]
pub struct WeatherBoard {
    search: SearchBar,
}

/// Submit control label; only the current-conditions board swaps it while loading
pub fn button_label(state: &AppState) -> &'static str {
    match state.variant {
        Variant::Current if state.is_loading => BUTTON_LOADING_LABEL,
        _ => BUTTON_LABEL,
    }
}

/// The forecast board reports loading on a line of its own
pub fn shows_loading_banner(state: &AppState) -> bool {
    state.variant == Variant::Forecast && state.is_loading
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Title,
    Search,
    Loading,
    Error,
    Conditions,
    Forecast,
    Filler,
    Help,
}

impl Section {
    fn constraint(self, state: &AppState, width: u16) -> Constraint {
        match self {
            Section::Title => Constraint::Max(6),
            Section::Search => Constraint::Length(3),
            Section::Loading | Section::Error | Section::Help => Constraint::Length(1),
            Section::Conditions => Constraint::Length(CONDITIONS_HEIGHT),
            Section::Forecast => {
                Constraint::Length(forecast_height(state.forecast_days().len(), width))
            }
            Section::Filler => Constraint::Min(0),
        }
    }
}

/// Sections present for this state, top to bottom
fn sections(state: &AppState) -> Vec<Section> {
    let mut sections = vec![Section::Title, Section::Search];
    if shows_loading_banner(state) {
        sections.push(Section::Loading);
    }
    if state.has_error() {
        sections.push(Section::Error);
    }
    if state.current().is_some() {
        sections.push(Section::Conditions);
    }
    if !state.forecast_days().is_empty() {
        sections.push(Section::Forecast);
    }
    sections.push(Section::Filler);
    sections.push(Section::Help);
    sections
}

impl WeatherBoard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for WeatherBoard {
    type Props<'a> = WeatherBoardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let state = props.state;
        let search_props = SearchBarProps {
            query: &state.query,
            button_label: button_label(state),
            is_focused: props.is_focused,
            on_query_change: Action::QueryChange,
            on_query_submit: Action::QuerySubmit,
        };
        self.search
            .handle_event(event, search_props)
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherBoardProps<'_>) {
        let state = props.state;
        let sections = sections(state);
        let chunks = Layout::vertical(sections.iter().map(|s| s.constraint(state, area.width)))
            .split(area);

        for (section, chunk) in sections.iter().zip(chunks.iter().copied()) {
            match section {
                Section::Title => TitleBanner.render(
                    frame,
                    chunk,
                    TitleBannerProps {
                        is_animating: state.loading_anim_active(),
                        tick_count: state.tick_count,
                    },
                ),
                Section::Search => self.search.render(
                    frame,
                    chunk,
                    SearchBarProps {
                        query: &state.query,
                        button_label: button_label(state),
                        is_focused: props.is_focused,
                        on_query_change: Action::QueryChange,
                        on_query_submit: Action::QuerySubmit,
                    },
                ),
                Section::Loading => {
                    let banner = Line::from(Span::styled(
                        LOADING_BANNER,
                        Style::default().fg(Color::Cyan),
                    ))
                    .centered();
                    frame.render_widget(Paragraph::new(banner), chunk);
                }
                Section::Error => {
                    let error = Line::from(vec![
                        Span::raw(ERROR_ICON),
                        Span::raw(" "),
                        Span::styled(state.error.clone(), Style::default().fg(Color::Red).bold()),
                    ])
                    .centered();
                    frame.render_widget(Paragraph::new(error), chunk);
                }
                Section::Conditions => {
                    if let (Some(weather), Some(current)) = (&state.weather, state.current()) {
                        ConditionsPanel.render(
                            frame,
                            chunk,
                            ConditionsPanelProps {
                                location: &weather.location,
                                current,
                                show_icon: state.variant == Variant::Forecast,
                            },
                        );
                    }
                }
                Section::Forecast => ForecastCards.render(
                    frame,
                    chunk,
                    ForecastCardsProps {
                        days: state.forecast_days(),
                    },
                ),
                Section::Filler => {}
                Section::Help => render_help(frame, chunk),
            }
        }
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    let mut status_bar = StatusBar::new();
    <StatusBar as Component<Action>>::render(
        &mut status_bar,
        frame,
        area,
        StatusBarProps {
            left: StatusBarSection::empty(),
            center: StatusBarSection::hints(&[
                StatusBarHint::new("enter", "get weather"),
                StatusBarHint::new("F5", "refresh"),
                StatusBarHint::new("esc", "quit"),
            ]),
            right: StatusBarSection::empty(),
            style: StatusBarStyle::default(),
            is_focused: false,
        },
    );
}
