//! Header and navigation panel rendering.
//!
//! Narrow viewports get a toggle control and, while open, an overlay panel
//! listing the links. Wide viewports show the links inline and the toggle
//! disappears, matching the breakpoint behavior in the nav state.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListState, Paragraph},
    Frame,
};

use crate::screen::HitAreas;
use crate::state::NavState;

#[derive(Debug, Default)]
pub struct NavPage;

impl NavPage {
    pub fn new() -> Self {
        Self
    }

    /// Renders the one-row header into `area`; the open panel overlays the
    /// rows below it. Rendered rects are recorded for click hit-testing.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        nav: &NavState,
        title: &str,
        wide: bool,
        focused: bool,
        hits: &mut HitAreas,
    ) {
        let mut spans: Vec<Span> = Vec::new();
        if wide {
            spans.push(Span::styled(format!(" {title}  "), Style::new().bold()));
            for link in nav.links() {
                spans.push(Span::raw(format!("{link}  ")).blue());
            }
            hits.nav_toggle = None;
        } else {
            // The expanded flag rides along on the control label.
            let label = if nav.is_open() {
                " ≡ Menu ▾ "
            } else {
                " ≡ Menu ▸ "
            };
            let toggle = if focused {
                Span::styled(label, Style::new().reversed())
            } else {
                Span::styled(label, Style::new().bold())
            };
            spans.push(toggle);
            spans.push(Span::styled(format!(" {title}"), Style::new().bold()));
            hits.nav_toggle = Some(Rect::new(area.x, area.y, label.chars().count() as u16, 1));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);

        if !wide && nav.is_open() {
            self.render_panel(frame, area, nav, hits);
        } else {
            hits.nav_panel = None;
            hits.nav_links.clear();
        }
    }

    fn render_panel(&self, frame: &mut Frame, header: Rect, nav: &NavState, hits: &mut HitAreas) {
        let width = nav
            .links()
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u16
            + 6;
        let height = nav.links().len() as u16 + 2;
        // Keep the overlay inside the frame on tiny terminals.
        let panel = Rect::new(header.x, header.y + 1, width, height).intersection(frame.area());

        frame.render_widget(Clear, panel);
        let mut state = ListState::default().with_selected(Some(nav.selected_link));
        frame.render_stateful_widget(
            List::new(nav.links().to_vec())
                .block(Block::bordered())
                .highlight_style(Style::new().reversed())
                .highlight_symbol("> "),
            panel,
            &mut state,
        );

        hits.nav_panel = Some(panel);
        hits.nav_links = nav
            .links()
            .iter()
            .enumerate()
            .map(|(i, _)| Rect::new(panel.x + 1, panel.y + 1 + i as u16, width - 2, 1))
            .collect();
    }
}
