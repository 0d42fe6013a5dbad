//! Condition glyphs - the terminal stand-in for the provider's icon images

use ratatui::style::Color;

/// Weather condition categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionKind {
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Sleet,
    Snow,
    Thunderstorm,
    Unknown,
}

impl ConditionKind {
    /// Map a WeatherAPI.com condition code to a category
    pub fn from_code(code: u16) -> Self {
        match code {
            1000 => ConditionKind::Clear,
            1003 => ConditionKind::PartlyCloudy,
            1006 | 1009 => ConditionKind::Cloudy,
            1030 | 1135 | 1147 => ConditionKind::Fog,
            1072 | 1150..=1171 => ConditionKind::Drizzle,
            1063 | 1180..=1201 | 1240..=1246 => ConditionKind::Rain,
            1069 | 1204..=1207 | 1237 | 1249..=1252 | 1261 | 1264 => ConditionKind::Sleet,
            1066 | 1114 | 1117 | 1210..=1225 | 1255..=1258 => ConditionKind::Snow,
            1087 | 1273..=1282 => ConditionKind::Thunderstorm,
            _ => ConditionKind::Unknown,
        }
    }

    /// Conditions without a provider code render as unknown
    pub fn from_optional(code: Option<u16>) -> Self {
        code.map_or(ConditionKind::Unknown, Self::from_code)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ConditionKind::Clear => "\u{2600}\u{fe0f}",
            ConditionKind::PartlyCloudy => "\u{26c5}",
            ConditionKind::Cloudy => "\u{2601}\u{fe0f}",
            ConditionKind::Fog => "\u{1f32b}\u{fe0f}",
            ConditionKind::Drizzle => "\u{1f326}\u{fe0f}",
            ConditionKind::Rain => "\u{1f327}\u{fe0f}",
            ConditionKind::Sleet => "\u{1f328}\u{fe0f}",
            ConditionKind::Snow => "\u{2744}\u{fe0f}",
            ConditionKind::Thunderstorm => "\u{26c8}\u{fe0f}",
            ConditionKind::Unknown => "\u{1f321}\u{fe0f}",
        }
    }

    pub fn color(self) -> Color {
        match self {
            ConditionKind::Clear => Color::Yellow,
            ConditionKind::PartlyCloudy => Color::LightYellow,
            ConditionKind::Cloudy | ConditionKind::Fog | ConditionKind::Unknown => Color::Gray,
            ConditionKind::Drizzle | ConditionKind::Rain => Color::LightBlue,
            ConditionKind::Sleet | ConditionKind::Snow => Color::White,
            ConditionKind::Thunderstorm => Color::Magenta,
        }
    }
}
