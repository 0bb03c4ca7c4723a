//! Hero slideshow rendering: active slide, manual controls, position dots.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::screen::HitAreas;
use crate::state::{Autoplay, SlideshowState};
use crate::ui_utils::focused_block;

#[derive(Debug, Default)]
pub struct SlideshowPage;

impl SlideshowPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        show: &SlideshowState,
        focused: bool,
        hits: &mut HitAreas,
    ) {
        let block = focused_block("Slideshow", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        hits.slideshow = Some(area);
        if inner.height < 3 {
            return;
        }

        let slide = show.active_slide();
        let dots: String = (0..show.len())
            .map(|i| if i == show.index() { '●' } else { '○' })
            .collect();
        let autoplay = match show.autoplay() {
            Autoplay::Running => "▶",
            Autoplay::Paused => "⏸",
            Autoplay::Stopped => "■",
        };

        let lines = vec![
            Line::from(Span::styled(slide.title.clone(), Style::new().bold())),
            Line::from(slide.caption.clone()),
            Line::from(vec![
                Span::raw("‹ prev   "),
                Span::raw(dots),
                Span::raw("   next ›   "),
                Span::raw(autoplay).dim(),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);

        // Manual controls live on the third inner row.
        let controls_y = inner.y + 2;
        hits.slide_prev = Some(Rect::new(inner.x, controls_y, 6, 1));
        let next_x = inner.x + 9 + show.len() as u16 + 3;
        hits.slide_next = Some(Rect::new(next_x.min(inner.right()), controls_y, 6, 1));
    }
}
