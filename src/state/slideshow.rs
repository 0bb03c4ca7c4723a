//! Slideshow state.
//!
//! A timed rotation over a fixed set of slides. Exactly one slide carries
//! the active flag at any time; transitions clear the old flag before
//! setting the new one. Autoplay is advanced by elapsed-time ticks so the
//! rotation speed does not depend on how often the event loop wakes up.

use std::time::Duration;

use crate::page::SlideshowSpec;

#[derive(Debug, Clone)]
pub struct Slide {
    pub title: String,
    pub caption: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Autoplay {
    Running,
    /// Paused by focus; resumes on focus leave.
    Paused,
    /// Stopped by a manual control; stays off until the next focus leave.
    Stopped,
}

/// State for one slideshow instance.
#[derive(Debug, Clone)]
pub struct SlideshowState {
    slides: Vec<Slide>,
    index: usize,
    interval: Duration,
    elapsed: Duration,
    autoplay: Autoplay,
}

impl SlideshowState {
    /// Builds the slideshow from its page section.
    ///
    /// Returns `None` for fewer than two slides; a one-slide show has
    /// nothing to rotate and skips initialization entirely.
    pub fn new(spec: &SlideshowSpec) -> Option<Self> {
        if spec.slides.len() < 2 {
            return None;
        }
        let mut slides: Vec<Slide> = spec
            .slides
            .iter()
            .map(|s| Slide {
                title: s.title.clone(),
                caption: s.caption.clone(),
                active: false,
            })
            .collect();
        // First slide the page flagged active wins, else slide 0.
        let index = spec.slides.iter().position(|s| s.active).unwrap_or(0);
        slides[index].active = true;
        Some(Self {
            slides,
            index,
            interval: Duration::from_millis(spec.interval_ms()),
            elapsed: Duration::ZERO,
            autoplay: Autoplay::Running,
        })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.index]
    }

    /// Number of slides currently flagged active. Always 1; exposed so the
    /// invariant is checkable from tests.
    pub fn active_count(&self) -> usize {
        self.slides.iter().filter(|s| s.active).count()
    }

    pub fn autoplay(&self) -> Autoplay {
        self.autoplay
    }

    fn show(&mut self, index: usize) {
        // Remove-then-add keeps the single-active invariant through the swap.
        self.slides[self.index].active = false;
        self.index = index % self.slides.len();
        self.slides[self.index].active = true;
    }

    pub fn next(&mut self) {
        self.show((self.index + 1) % self.slides.len());
    }

    pub fn prev(&mut self) {
        self.show((self.index + self.slides.len() - 1) % self.slides.len());
    }

    /// Manual next control: stops autoplay before advancing.
    pub fn manual_next(&mut self) {
        self.autoplay = Autoplay::Stopped;
        self.elapsed = Duration::ZERO;
        self.next();
    }

    /// Manual previous control: stops autoplay before stepping back.
    pub fn manual_prev(&mut self) {
        self.autoplay = Autoplay::Stopped;
        self.elapsed = Duration::ZERO;
        self.prev();
    }

    /// Focus entered the slideshow; autoplay pauses while it stays.
    pub fn focus_entered(&mut self) {
        if self.autoplay == Autoplay::Running {
            self.autoplay = Autoplay::Paused;
        }
    }

    /// Focus left the slideshow; autoplay resumes, also clearing a manual
    /// stop (the hover-driven resume of the richer historical variant).
    pub fn focus_left(&mut self) {
        self.autoplay = Autoplay::Running;
        self.elapsed = Duration::ZERO;
    }

    /// Advances the autoplay clock by elapsed wall time, firing `next` once
    /// per full interval.
    pub fn tick(&mut self, dt: Duration) {
        if self.autoplay != Autoplay::Running {
            return;
        }
        self.elapsed += dt;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::SlideSpec;

    fn spec(n: usize) -> SlideshowSpec {
        SlideshowSpec {
            slides: (0..n)
                .map(|i| SlideSpec {
                    title: format!("Slide {i}"),
                    caption: String::new(),
                    active: false,
                })
                .collect(),
            interval_ms: Some(1000),
        }
    }

    #[test]
    fn test_too_few_slides_skip_init() {
        assert!(SlideshowState::new(&spec(0)).is_none());
        assert!(SlideshowState::new(&spec(1)).is_none());
        assert!(SlideshowState::new(&spec(2)).is_some());
    }

    #[test]
    fn test_initial_index_honors_active_flag() {
        let mut s = spec(3);
        s.slides[2].active = true;
        let show = SlideshowState::new(&s).unwrap();
        assert_eq!(show.index(), 2);
        assert_eq!(show.active_count(), 1);
    }

    #[test]
    fn test_initial_index_defaults_to_zero() {
        let show = SlideshowState::new(&spec(3)).unwrap();
        assert_eq!(show.index(), 0);
        assert_eq!(show.active_count(), 1);
    }

    #[test]
    fn test_next_wraps_and_keeps_one_active() {
        let mut show = SlideshowState::new(&spec(3)).unwrap();
        for expected in [1, 2, 0, 1] {
            show.next();
            assert_eq!(show.index(), expected);
            assert_eq!(show.active_count(), 1);
        }
    }

    #[test]
    fn test_prev_wraps_and_keeps_one_active() {
        let mut show = SlideshowState::new(&spec(3)).unwrap();
        for expected in [2, 1, 0, 2] {
            show.prev();
            assert_eq!(show.index(), expected);
            assert_eq!(show.active_count(), 1);
        }
    }

    #[test]
    fn test_tick_fires_on_interval() {
        let mut show = SlideshowState::new(&spec(3)).unwrap();
        show.tick(Duration::from_millis(999));
        assert_eq!(show.index(), 0);
        show.tick(Duration::from_millis(1));
        assert_eq!(show.index(), 1);
    }

    #[test]
    fn test_large_tick_fires_multiple_transitions() {
        let mut show = SlideshowState::new(&spec(3)).unwrap();
        show.tick(Duration::from_millis(3500));
        assert_eq!(show.index(), 0); // three full intervals, wrapped around
        assert_eq!(show.active_count(), 1);
    }

    #[test]
    fn test_focus_pauses_autoplay() {
        let mut show = SlideshowState::new(&spec(3)).unwrap();
        show.focus_entered();
        show.tick(Duration::from_secs(10));
        assert_eq!(show.index(), 0);
        show.focus_left();
        show.tick(Duration::from_millis(1000));
        assert_eq!(show.index(), 1);
    }

    #[test]
    fn test_manual_control_stops_autoplay_until_focus_leave() {
        let mut show = SlideshowState::new(&spec(3)).unwrap();
        show.manual_next();
        assert_eq!(show.index(), 1);
        assert_eq!(show.autoplay(), Autoplay::Stopped);
        show.tick(Duration::from_secs(10));
        assert_eq!(show.index(), 1);
        show.focus_left();
        assert_eq!(show.autoplay(), Autoplay::Running);
        show.tick(Duration::from_millis(1000));
        assert_eq!(show.index(), 2);
    }

    #[test]
    fn test_manual_prev_from_first_wraps() {
        let mut show = SlideshowState::new(&spec(4)).unwrap();
        show.manual_prev();
        assert_eq!(show.index(), 3);
        assert_eq!(show.active_count(), 1);
    }
}
