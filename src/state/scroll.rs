//! Content scrolling and the back-to-top control.
//!
//! The content pane scrolls by whole rows, but the offset is kept as a
//! float so the back-to-top glide can animate smoothly through the tick
//! loop. The floating control shows once the offset passes a threshold and
//! hides otherwise; manual scrolling cancels an in-flight glide.

use std::time::Duration;

use crate::page::BackToTopSpec;

/// Glide speed in rows per second.
const GLIDE_SPEED: f32 = 80.0;

/// State for the scrollable content pane.
///
/// The pane always scrolls; the back-to-top control only participates when
/// the page carries its section.
#[derive(Debug, Clone)]
pub struct ScrollState {
    offset: f32,
    content_rows: usize,
    viewport_rows: u16,
    threshold: f32,
    control_enabled: bool,
    gliding: bool,
}

impl ScrollState {
    pub fn new(spec: Option<&BackToTopSpec>, content_rows: usize) -> Self {
        Self {
            offset: 0.0,
            content_rows,
            viewport_rows: 0,
            threshold: spec.map_or(f32::INFINITY, |s| s.threshold() as f32),
            control_enabled: spec.is_some(),
            gliding: false,
        }
    }

    /// Offset in whole rows, for rendering.
    pub fn row_offset(&self) -> usize {
        self.offset.round().max(0.0) as usize
    }

    /// The back-to-top control is shown past the threshold.
    pub fn top_control_visible(&self) -> bool {
        self.control_enabled && self.offset > self.threshold
    }

    pub fn is_gliding(&self) -> bool {
        self.gliding
    }

    /// Viewport height feeds the scroll limit; called on render and resize.
    pub fn set_viewport_rows(&mut self, rows: u16) {
        self.viewport_rows = rows;
        self.clamp();
    }

    fn max_offset(&self) -> f32 {
        self.content_rows.saturating_sub(self.viewport_rows as usize) as f32
    }

    fn clamp(&mut self) {
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.gliding = false;
        self.offset += rows as f32;
        self.clamp();
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.gliding = false;
        self.offset -= rows as f32;
        self.clamp();
    }

    /// Starts the smooth glide back to the top.
    pub fn back_to_top(&mut self) {
        if self.control_enabled && self.offset > 0.0 {
            self.gliding = true;
        }
    }

    /// Advances the glide; a finished glide rests at offset 0.
    pub fn tick(&mut self, dt: Duration) {
        if !self.gliding {
            return;
        }
        self.offset -= GLIDE_SPEED * dt.as_secs_f32();
        if self.offset <= 0.0 {
            self.offset = 0.0;
            self.gliding = false;
        }
    }
}
