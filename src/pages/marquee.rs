//! Marquee strip rendering: one row of continuously scrolling text.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::screen::HitAreas;
use crate::state::MarqueeState;

#[derive(Debug, Default)]
pub struct MarqueePage;

impl MarqueePage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        marquee: &MarqueeState,
        focused: bool,
        hits: &mut HitAreas,
    ) {
        hits.marquee = Some(area);
        let text = if marquee.is_started() {
            marquee.visible_text(area.width)
        } else {
            // Still waiting on badge art; hold an empty strip.
            String::new()
        };
        let style = if focused {
            // Focus pauses the strip; show it dimmed so that reads as held.
            Style::new().dim()
        } else {
            Style::new().cyan()
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(text, style))),
            area,
        );
    }
}
