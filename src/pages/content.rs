//! Scrollable content pane and the floating back-to-top control.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::screen::HitAreas;
use crate::state::ScrollState;
use crate::ui_utils::focused_block;

#[derive(Debug, Default)]
pub struct ContentPage;

impl ContentPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        body: &[String],
        scroll: &ScrollState,
        focused: bool,
        hits: &mut HitAreas,
    ) {
        let block = focused_block("Content", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        hits.content = Some(area);

        let offset = scroll.row_offset();
        let lines: Vec<Line> = body
            .iter()
            .skip(offset)
            .take(inner.height as usize)
            .map(|l| {
                if let Some(heading) = l.strip_prefix("## ") {
                    Line::from(Span::styled(heading.to_string(), Style::new().bold().blue()))
                } else {
                    Line::from(l.clone())
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);

        if scroll.top_control_visible() {
            let label = " ↑ Top (t) ";
            let w = label.chars().count() as u16;
            let control = Rect::new(
                inner.right().saturating_sub(w + 1),
                inner.y,
                w,
                1,
            )
            .intersection(frame.area());
            frame.render_widget(
                Paragraph::new(Span::styled(label, Style::new().reversed())),
                control,
            );
            hits.back_to_top = Some(control);
        } else {
            hits.back_to_top = None;
        }
    }
}
