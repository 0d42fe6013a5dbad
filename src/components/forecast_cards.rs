use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::glyphs::ConditionKind;
use crate::state::{ForecastDay, format_celsius};

/// Rows a card needs: three lines plus the border
pub const CARD_HEIGHT: u16 = 5;

/// Narrowest card that still fits a `YYYY-MM-DD` date and an `Avg -10.5°C` line
pub const CARD_MIN_WIDTH: u16 = 16;

/// One card per forecast day in provider order, wrapping onto extra rows
/// when the area is too narrow for all of them side by side
pub struct ForecastCards;

/// Cards that fit next to each other in `width` columns
pub fn cards_per_row(count: usize, width: u16) -> usize {
    let fit = usize::from((width / CARD_MIN_WIDTH).max(1));
    fit.min(count.max(1))
}

/// Height of the whole forecast block for `count` days
pub fn forecast_height(count: usize, width: u16) -> u16 {
    let rows = count.div_ceil(cards_per_row(count, width));
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_mul(CARD_HEIGHT)
}

pub struct ForecastCardsProps<'a> {
    pub days: &'a [ForecastDay],
}

fn card_lines(day: &ForecastDay) -> Vec<Line<'static>> {
    let kind = ConditionKind::from_optional(day.day.condition.code);

    vec![
        Line::from(Span::raw(day.date.clone()).bold()),
        Line::from(vec![
            Span::styled(kind.glyph(), Style::default().fg(kind.color())),
            Span::raw(" "),
            Span::styled(day.day.condition.text.clone(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(format!("Avg {}", format_celsius(day.day.avgtemp_c))),
    ]
}

impl Component<Action> for ForecastCards {
    type Props<'a> = ForecastCardsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.days.is_empty() {
            return;
        }

        let per_row = cards_per_row(props.days.len(), area.width);
        let row_count = props.days.len().div_ceil(per_row);
        let rows = Layout::vertical((0..row_count).map(|_| Constraint::Length(CARD_HEIGHT)))
            .split(area);

        // Every row is split the same way so a short last row keeps the card width.
        let ratio = per_row as u32;
        for (days, row) in props.days.chunks(per_row).zip(rows.iter()) {
            let columns =
                Layout::horizontal((0..per_row).map(|_| Constraint::Ratio(1, ratio))).split(*row);

            for (day, column) in days.iter().zip(columns.iter()) {
                let card = Paragraph::new(card_lines(day))
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL));
                frame.render_widget(card, *column);
            }
        }
    }
}
