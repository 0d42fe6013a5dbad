use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::glyphs::ConditionKind;
use crate::state::{CurrentConditions, Location, format_celsius};

pub const THERMOMETER: &str = "\u{1f321}\u{fe0f}";

/// Rows the panel needs: five lines plus the border
pub const CONDITIONS_HEIGHT: u16 = 7;

/// Current conditions card
pub struct ConditionsPanel;

pub struct ConditionsPanelProps<'a> {
    pub location: &'a Location,
    pub current: &'a CurrentConditions,
    /// Render the condition glyph next to the text
    pub show_icon: bool,
}

impl Component<Action> for ConditionsPanel {
    type Props<'a> = ConditionsPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let current = props.current;
        let muted = Style::default().fg(Color::Gray);

        let condition = if props.show_icon {
            let kind = ConditionKind::from_optional(current.condition.code);
            Line::from(vec![
                Span::styled(kind.glyph(), Style::default().fg(kind.color())),
                Span::raw(" "),
                Span::styled(current.condition.text.clone(), muted),
            ])
        } else {
            Line::from(Span::styled(current.condition.text.clone(), muted))
        };

        let lines = vec![
            Line::from(Span::raw(props.location.display_name()).bold()),
            Line::from(format!("{THERMOMETER} {}", format_celsius(current.temp_c))),
            condition,
            Line::from(format!("Humidity: {}%", current.humidity)),
            Line::from(format!("Wind: {} kph", current.wind_kph)),
        ];

        let panel = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(panel, area);
    }
}
