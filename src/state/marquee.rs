//! Marquee state.
//!
//! A continuously scrolling strip with no visible seam. The item list is
//! duplicated once at setup so that scrolling exactly one segment width and
//! resetting lands on a visually identical frame. The offset is stepped by
//! elapsed wall time, not frame count, so the speed is the same on every
//! display.
//!
//! Badge items resolve through the background asset loader; the scroll
//! clock holds until every one of them has reported back (success or
//! failure), so the segment measurement is taken from final content.

use std::time::Duration;

use unicode_width::UnicodeWidthStr;

use crate::page::{MarqueeItemSpec, MarqueeSpec};

/// Segment width used when measurement comes back non-positive.
const GUARD_WIDTH: f32 = 1.0;

#[derive(Debug, Clone)]
enum ItemContent {
    Ready(String),
    /// Waiting on the asset loader; the name doubles as the fallback text.
    Pending { name: String },
}

/// State for one marquee instance.
#[derive(Debug, Clone)]
pub struct MarqueeState {
    /// The duplicated track: page items repeated twice.
    track: Vec<ItemContent>,
    /// Items of one copy, before duplication.
    segment_items: usize,
    gap: u16,
    speed: f32,
    offset: f32,
    segment_width: f32,
    paused: bool,
    pending: usize,
    started: bool,
}

impl MarqueeState {
    /// Builds the marquee from its page section, duplicating the content.
    ///
    /// Returns `None` for an empty item list. Badge items start out pending;
    /// the caller is expected to request them from the asset loader and feed
    /// results back through [`MarqueeState::resolve_badge`].
    pub fn new(spec: &MarqueeSpec) -> Option<Self> {
        if spec.items.is_empty() {
            return None;
        }
        let one_copy: Vec<ItemContent> = spec
            .items
            .iter()
            .map(|item| match item {
                MarqueeItemSpec::Text(text) => ItemContent::Ready(text.clone()),
                MarqueeItemSpec::Badge { name } => ItemContent::Pending { name: name.clone() },
            })
            .collect();
        let pending = one_copy
            .iter()
            .filter(|i| matches!(i, ItemContent::Pending { .. }))
            .count();

        let mut track = one_copy.clone();
        track.extend(one_copy);

        let mut state = Self {
            segment_items: spec.items.len(),
            track,
            gap: spec.gap(),
            speed: spec.speed(),
            offset: 0.0,
            segment_width: GUARD_WIDTH,
            paused: false,
            pending,
            started: false,
        };
        if state.pending == 0 {
            state.start();
        }
        Some(state)
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn segment_width(&self) -> f32 {
        self.segment_width
    }

    /// Names of badges still waiting on the loader, from one copy of the
    /// content. The caller uses the copy index as the badge id.
    pub fn pending_badges(&self) -> Vec<(usize, String)> {
        self.track[..self.segment_items]
            .iter()
            .enumerate()
            .filter_map(|(i, item)| match item {
                ItemContent::Pending { name } => Some((i, name.clone())),
                ItemContent::Ready(_) => None,
            })
            .collect()
    }

    /// Feeds one loader result back in. Failures fall back to the badge
    /// name so a broken asset never stalls the strip. The scroll clock
    /// starts once nothing is pending.
    pub fn resolve_badge(&mut self, index: usize, result: Result<String, String>) {
        if index >= self.segment_items {
            return;
        }
        let name = match &self.track[index] {
            ItemContent::Pending { name } => name.clone(),
            ItemContent::Ready(_) => return,
        };
        let text = result.unwrap_or(name);
        // Both copies of the duplicated track carry the item.
        self.track[index] = ItemContent::Ready(text.clone());
        self.track[index + self.segment_items] = ItemContent::Ready(text);
        self.pending -= 1;
        if self.pending == 0 {
            self.start();
        }
    }

    fn start(&mut self) {
        self.remeasure();
        self.started = true;
    }

    /// Recomputes the segment width from rendered item widths plus gaps.
    /// Called at start and on every viewport resize; a non-positive result
    /// falls back to the guard value.
    pub fn remeasure(&mut self) {
        let width: f32 = self.track[..self.segment_items]
            .iter()
            .map(|item| (item_text(item).width() + self.gap as usize) as f32)
            .sum();
        self.segment_width = if width > 0.0 { width } else { GUARD_WIDTH };
        // Keep the offset inside the (possibly smaller) new segment.
        while -self.offset >= self.segment_width {
            self.offset += self.segment_width;
        }
    }

    /// Focus, hover, or touch entered the strip.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Corresponding leave; the clock never stopped, so motion resumes on
    /// the very next tick.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Advances the offset by `speed × dt`, wrapping by one segment width
    /// whenever the magnitude reaches it.
    pub fn advance(&mut self, dt: Duration) {
        if !self.started || self.paused {
            return;
        }
        self.offset -= self.speed * dt.as_secs_f32();
        while -self.offset >= self.segment_width {
            self.offset += self.segment_width;
        }
    }

    /// Renders the strip as it appears through a viewport of `width` cells,
    /// tiling the duplicated track as often as the viewport needs.
    pub fn visible_text(&self, width: u16) -> String {
        let gap = " ".repeat(self.gap as usize);
        let mut strip = String::new();
        for item in &self.track {
            strip.push_str(item_text(item));
            strip.push_str(&gap);
        }
        if strip.width() == 0 {
            return String::new();
        }
        // Tile until one full scroll position plus the viewport fits.
        let needed = (-self.offset) as usize + width as usize;
        let tile = strip.clone();
        while strip.width() < needed {
            strip.push_str(&tile);
        }
        slice_cells(&strip, (-self.offset) as usize, width as usize)
    }
}

fn item_text(item: &ItemContent) -> &str {
    match item {
        ItemContent::Ready(text) => text,
        ItemContent::Pending { name } => name,
    }
}

/// Takes `take` display cells starting `skip` cells into `s`, padding wide
/// character boundaries with spaces so the result is exactly `take` cells.
fn slice_cells(s: &str, skip: usize, take: usize) -> String {
    let mut out = String::new();
    let mut pos = 0usize;
    let mut filled = 0usize;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if filled >= take {
            break;
        }
        if pos + w <= skip {
            pos += w;
            continue;
        }
        if pos < skip || filled + w > take {
            // Partially visible wide character.
            let visible = (pos + w).saturating_sub(skip.max(pos)).min(take - filled);
            for _ in 0..visible {
                out.push(' ');
            }
            filled += visible;
        } else {
            out.push(ch);
            filled += w;
        }
        pos += w;
    }
    while filled < take {
        out.push(' ');
        filled += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MarqueeItemSpec;

    fn spec(items: Vec<MarqueeItemSpec>) -> MarqueeSpec {
        MarqueeSpec {
            items,
            speed: Some(10.0),
            gap: Some(2),
        }
    }

    fn text_items(labels: &[&str]) -> Vec<MarqueeItemSpec> {
        labels
            .iter()
            .map(|l| MarqueeItemSpec::Text((*l).into()))
            .collect()
    }

    #[test]
    fn test_empty_items_skip_init() {
        assert!(MarqueeState::new(&spec(vec![])).is_none());
    }

    #[test]
    fn test_content_duplicated_once() {
        let m = MarqueeState::new(&spec(text_items(&["a", "bb"]))).unwrap();
        assert_eq!(m.track.len(), 4);
        assert_eq!(m.segment_items, 2);
    }

    #[test]
    fn test_segment_width_includes_gaps() {
        let m = MarqueeState::new(&spec(text_items(&["ab", "cde"]))).unwrap();
        // (2 + 2) + (3 + 2)
        assert_eq!(m.segment_width(), 9.0);
    }

    #[test]
    fn test_starts_immediately_without_badges() {
        let m = MarqueeState::new(&spec(text_items(&["x"]))).unwrap();
        assert!(m.is_started());
    }

    #[test]
    fn test_badges_defer_start_until_all_resolve() {
        let items = vec![
            MarqueeItemSpec::Badge { name: "one".into() },
            MarqueeItemSpec::Text("plain".into()),
            MarqueeItemSpec::Badge { name: "two".into() },
        ];
        let mut m = MarqueeState::new(&spec(items)).unwrap();
        assert!(!m.is_started());
        assert_eq!(m.pending_badges().len(), 2);

        m.advance(Duration::from_secs(1));
        assert_eq!(m.offset(), 0.0);

        m.resolve_badge(0, Ok("[ONE]".into()));
        assert!(!m.is_started());
        // Failure counts as done, falling back to the name.
        m.resolve_badge(2, Err("missing".into()));
        assert!(m.is_started());
        assert!(m.pending_badges().is_empty());
    }

    #[test]
    fn test_resolved_badge_updates_both_copies() {
        let items = vec![MarqueeItemSpec::Badge { name: "n".into() }];
        let mut m = MarqueeState::new(&spec(items)).unwrap();
        m.resolve_badge(0, Ok("label".into()));
        assert_eq!(item_text(&m.track[0]), "label");
        assert_eq!(item_text(&m.track[1]), "label");
    }

    #[test]
    fn test_offset_magnitude_stays_below_segment() {
        let mut m = MarqueeState::new(&spec(text_items(&["abc", "de"]))).unwrap();
        let segment = m.segment_width();
        for _ in 0..1000 {
            m.advance(Duration::from_millis(37));
            assert!(m.offset() <= 0.0);
            assert!(-m.offset() < segment, "offset escaped the segment");
        }
    }

    #[test]
    fn test_position_periodic_in_segment_over_speed() {
        let mut m = MarqueeState::new(&spec(text_items(&["abcdefgh"]))).unwrap();
        // segment = 8 + 2 = 10 cells, speed = 10 cells/s: period is 1 s.
        assert_eq!(m.segment_width(), 10.0);
        m.advance(Duration::from_millis(300));
        let before = m.offset();
        m.advance(Duration::from_secs(1));
        assert!((m.offset() - before).abs() < 1e-3);
    }

    #[test]
    fn test_pause_freezes_resume_continues() {
        let mut m = MarqueeState::new(&spec(text_items(&["abcd"]))).unwrap();
        m.advance(Duration::from_millis(100));
        let frozen = m.offset();
        m.pause();
        m.advance(Duration::from_secs(5));
        assert_eq!(m.offset(), frozen);
        m.resume();
        m.advance(Duration::from_millis(100));
        assert!(m.offset() < frozen);
    }

    #[test]
    fn test_remeasure_guards_non_positive_width() {
        let mut m = MarqueeState::new(&spec(vec![MarqueeItemSpec::Text(String::new())])).unwrap();
        m.gap = 0;
        m.remeasure();
        assert_eq!(m.segment_width(), GUARD_WIDTH);
    }

    #[test]
    fn test_remeasure_rewraps_offset_into_new_segment() {
        let mut m = MarqueeState::new(&spec(text_items(&["abcdefgh"]))).unwrap();
        m.advance(Duration::from_millis(900)); // offset -9 of segment 10
        m.track = vec![ItemContent::Ready("ab".into()), ItemContent::Ready("ab".into())];
        m.segment_items = 1;
        m.remeasure(); // segment now 4
        assert!(-m.offset() < m.segment_width());
    }

    #[test]
    fn test_visible_text_is_seamless_across_wrap() {
        let mut m = MarqueeState::new(&spec(text_items(&["abcdefgh"]))).unwrap();
        // One segment is 10 cells; the view at offset 0 and offset -10 match.
        let start = m.visible_text(10);
        m.advance(Duration::from_secs(1));
        assert_eq!(m.visible_text(10), start);
    }

    #[test]
    fn test_visible_text_width_exact() {
        let m = MarqueeState::new(&spec(text_items(&["ab"]))).unwrap();
        assert_eq!(m.visible_text(17).width(), 17);
    }

    #[test]
    fn test_slice_cells_handles_wide_chars() {
        // Each char is two cells wide; cutting through both pads with spaces.
        let sliced = slice_cells("日本", 1, 2);
        assert_eq!(sliced.width(), 2);
        assert_eq!(sliced, "  ");
        // A clean cut keeps the glyph.
        assert_eq!(slice_cells("日本", 2, 2), "本");
    }
}
