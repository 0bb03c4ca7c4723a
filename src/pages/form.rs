//! Form rendering: labelled fields, inline errors, success notice.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::page::FieldKind;
use crate::screen::HitAreas;
use crate::state::FormState;
use crate::ui_utils::focused_block;

#[derive(Debug, Default)]
pub struct FormPage;

impl FormPage {
    pub fn new() -> Self {
        Self
    }

    /// Rows the form needs: two per field (input + error slot), plus the
    /// success row and borders.
    pub fn required_height(form: &FormState) -> u16 {
        form.fields().len() as u16 * 2 + 3
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        form: &FormState,
        focused: bool,
        hits: &mut HitAreas,
    ) {
        let block = focused_block(&form.title, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        hits.form = Some(area);
        hits.form_fields.clear();

        let mut lines: Vec<Line> = Vec::new();
        if form.success_visible() {
            lines.push(Line::from(
                Span::styled(
                    "Thank you! Your message has been received.",
                    Style::new().green().bold(),
                ),
            ));
        } else {
            lines.push(Line::from(Span::raw("Enter submits · ↑↓ move between fields").dim()));
        }

        for (i, field) in form.fields().iter().enumerate() {
            let marker = if field.spec.required { "*" } else { " " };
            let kind = match field.spec.kind {
                FieldKind::Email => " (email)",
                FieldKind::Text => "",
            };
            let cursor = if focused && i == form.focused_field {
                "▏"
            } else {
                ""
            };
            let label = format!("{marker}{}{kind}: ", field.spec.label);
            let mut spans = vec![Span::styled(label, Style::new().bold())];
            let value_style = if field.error.is_some() {
                Style::new().red()
            } else {
                Style::new()
            };
            spans.push(Span::styled(format!("{}{cursor}", field.value), value_style));
            lines.push(Line::from(spans));
            hits.form_fields
                .push(Rect::new(inner.x, inner.y + lines.len() as u16 - 1, inner.width, 1));

            // Inline error slot directly under the field.
            match &field.error {
                Some(message) => lines.push(Line::from(Span::styled(
                    format!("  {message}"),
                    Style::new().red(),
                ))),
                None => lines.push(Line::from("")),
            }
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
