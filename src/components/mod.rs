pub mod conditions_panel;
pub mod forecast_cards;
pub mod search_bar;
pub mod title_banner;
pub mod weather_board;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use conditions_panel::{ConditionsPanel, ConditionsPanelProps};
pub use forecast_cards::{ForecastCards, ForecastCardsProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use title_banner::{TitleBanner, TitleBannerProps};
pub use weather_board::{ERROR_ICON, WeatherBoard, WeatherBoardProps};
