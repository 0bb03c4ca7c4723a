//! Tab bar and panel rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Tabs, Wrap},
    Frame,
};

use crate::screen::HitAreas;
use crate::state::TabsState;
use crate::ui_utils::focused_block;

#[derive(Debug, Default)]
pub struct TabsPage;

impl TabsPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        tabs: &TabsState,
        focused: bool,
        hits: &mut HitAreas,
    ) {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(1), Constraint::Min(0)],
        )
        .split(area);

        let labels: Vec<Line> = tabs.tabs().iter().map(|t| Line::from(t.label.clone())).collect();
        frame.render_widget(
            Tabs::new(labels)
                .select(tabs.selected())
                .highlight_style(Style::new().reversed()),
            layout[0],
        );

        // Tab bar hit rects mirror the Tabs widget layout: one cell of
        // padding around each label, separated by a divider.
        hits.tab_buttons.clear();
        let mut x = layout[0].x;
        for tab in tabs.tabs() {
            let w = tab.label.chars().count() as u16 + 2;
            hits.tab_buttons.push(Rect::new(x, layout[0].y, w, 1));
            x = x.saturating_add(w + 1);
        }

        let panel_block = focused_block("Panel", focused);
        let inner = panel_block.inner(layout[1]);
        frame.render_widget(panel_block, layout[1]);
        let lines: Vec<Line> = tabs
            .visible_panel()
            .iter()
            .map(|l| Line::from(l.clone()))
            .collect();
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}
