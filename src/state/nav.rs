//! Navigation toggle state.
//!
//! Tracks whether the collapsible menu panel is open and which link the
//! keyboard is on. Opening and closing are idempotent; the caller mirrors
//! `is_open` into the rendered toggle control (the "expanded" flag) and the
//! page-level scroll-lock marker.

use crate::page::NavSpec;

/// State for the collapsible navigation panel.
#[derive(Debug, Clone)]
pub struct NavState {
    open: bool,
    links: Vec<String>,
    /// Link the keyboard is currently on while the panel is open.
    pub selected_link: usize,
    wide_breakpoint: u16,
}

impl NavState {
    /// Builds the nav module from its page section.
    ///
    /// Returns `None` when the page carries no links to toggle; the whole
    /// module then stays uninitialized.
    pub fn new(spec: &NavSpec) -> Option<Self> {
        if spec.links.is_empty() {
            return None;
        }
        Some(Self {
            open: false,
            links: spec.links.clone(),
            selected_link: 0,
            wide_breakpoint: spec.breakpoint(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Viewport width at which the page counts as wide.
    pub fn wide_breakpoint(&self) -> u16 {
        self.wide_breakpoint
    }

    /// Opens the panel. No-op if already open; returns whether state changed.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.selected_link = 0;
        true
    }

    /// Closes the panel. No-op if already closed; returns whether state changed.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        true
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// A click landed outside both the toggle control and the panel.
    pub fn click_outside(&mut self) -> bool {
        self.close()
    }

    /// Escape pressed while the panel is open.
    ///
    /// Returns `true` when the panel closed, in which case the caller moves
    /// focus back to the toggle control.
    pub fn escape(&mut self) -> bool {
        self.close()
    }

    /// Viewport width changed. Entering the wide breakpoint while open
    /// collapses the panel, since the full menu is shown inline there.
    pub fn viewport_resized(&mut self, width: u16) -> bool {
        if width >= self.wide_breakpoint {
            self.close()
        } else {
            false
        }
    }

    /// Activates a link, closing the panel.
    ///
    /// Returns the link label for the caller's status feedback, or `None`
    /// for an out-of-range index.
    pub fn activate_link(&mut self, index: usize) -> Option<&str> {
        let label = self.links.get(index)?;
        self.open = false;
        Some(label)
    }

    pub fn select_prev_link(&mut self) {
        if self.selected_link > 0 {
            self.selected_link -= 1;
        }
    }

    pub fn select_next_link(&mut self) {
        if self.selected_link + 1 < self.links.len() {
            self.selected_link += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::NavSpec;

    fn spec() -> NavSpec {
        NavSpec {
            links: vec!["Home".into(), "About".into(), "Contact".into()],
            wide_breakpoint: Some(90),
        }
    }

    #[test]
    fn test_empty_links_disable_module() {
        let empty = NavSpec {
            links: vec![],
            wide_breakpoint: None,
        };
        assert!(NavState::new(&empty).is_none());
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut nav = NavState::new(&spec()).unwrap();
        assert!(!nav.is_open());
        nav.toggle();
        assert!(nav.is_open());
        nav.toggle();
        assert!(!nav.is_open());
    }

    #[test]
    fn test_open_close_idempotent() {
        let mut nav = NavState::new(&spec()).unwrap();
        assert!(nav.open());
        assert!(!nav.open());
        assert!(nav.close());
        assert!(!nav.close());
    }

    #[test]
    fn test_click_outside_closes_only_when_open() {
        let mut nav = NavState::new(&spec()).unwrap();
        assert!(!nav.click_outside());
        nav.open();
        assert!(nav.click_outside());
        assert!(!nav.is_open());
    }

    #[test]
    fn test_escape_closes_and_reports() {
        let mut nav = NavState::new(&spec()).unwrap();
        nav.open();
        assert!(nav.escape());
        assert!(!nav.is_open());
        assert!(!nav.escape());
    }

    #[test]
    fn test_resize_into_wide_closes() {
        let mut nav = NavState::new(&spec()).unwrap();
        nav.open();
        assert!(!nav.viewport_resized(80));
        assert!(nav.is_open());
        assert!(nav.viewport_resized(90));
        assert!(!nav.is_open());
    }

    #[test]
    fn test_link_activation_closes() {
        let mut nav = NavState::new(&spec()).unwrap();
        nav.open();
        assert_eq!(nav.activate_link(1), Some("About"));
        assert!(!nav.is_open());
        assert_eq!(nav.activate_link(99), None);
    }

    #[test]
    fn test_link_selection_clamps() {
        let mut nav = NavState::new(&spec()).unwrap();
        nav.open();
        nav.select_prev_link();
        assert_eq!(nav.selected_link, 0);
        nav.select_next_link();
        nav.select_next_link();
        nav.select_next_link();
        assert_eq!(nav.selected_link, 2);
    }

    #[test]
    fn test_reopen_resets_link_selection() {
        let mut nav = NavState::new(&spec()).unwrap();
        nav.open();
        nav.select_next_link();
        nav.close();
        nav.open();
        assert_eq!(nav.selected_link, 0);
    }
}
