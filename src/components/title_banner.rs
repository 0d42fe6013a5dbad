use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, ColorStop, Fill, LinearGradient, Renderer,
    fonts, integrations::ratatui::ArtBox,
};
use ratatui::{Frame, layout::Rect};

use super::Component;
use crate::action::Action;
use crate::state::LOADING_ANIM_CYCLE_TICKS;

pub const TITLE: &str = "Weather Board";

/// Big gradient title; the highlight sweeps across while a request is in flight
pub struct TitleBanner;

pub struct TitleBannerProps {
    pub is_animating: bool,
    pub tick_count: u32,
}

const SKY: (u8, u8, u8) = (100, 180, 255);
const SUN: (u8, u8, u8) = (255, 220, 100);

fn rgb((r, g, b): (u8, u8, u8)) -> ArtColor {
    ArtColor::rgb(r, g, b)
}

fn animated_phase(tick_count: u32) -> f32 {
    let steps = LOADING_ANIM_CYCLE_TICKS.max(1);
    (tick_count % steps) as f32 / steps as f32
}

fn banner_fill(props: &TitleBannerProps) -> Fill {
    if !props.is_animating {
        return Fill::Linear(LinearGradient::horizontal(rgb(SKY), rgb(SUN)));
    }

    // Keep the highlight strictly inside the stop range so stops stay ordered.
    let peak = animated_phase(props.tick_count).clamp(0.05, 0.95);
    let stops = vec![
        ColorStop::new(0.0, rgb(SKY)),
        ColorStop::new(peak, rgb(SUN)),
        ColorStop::new(1.0, rgb(SKY)),
    ];
    Fill::Linear(LinearGradient::new(0.0, stops))
}

impl Component<Action> for TitleBanner {
    type Props<'a> = TitleBannerProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(banner_fill(&props));

        frame.render_widget(ArtBox::new(&renderer, TITLE), area);
    }
}
