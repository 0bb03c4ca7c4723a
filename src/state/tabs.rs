//! Tabs state.
//!
//! Single-selection tab panels following the standard accessible tab
//! pattern: exactly one tab selected and one panel visible at all times,
//! arrow keys move selection circularly, Home/End jump to the edges, and
//! per-tab focusability tracks selection (the roving-tabindex analog).

use crate::page::TabsSpec;

#[derive(Debug, Clone)]
pub struct Tab {
    pub label: String,
    pub panel: Vec<String>,
    pub selected: bool,
    /// Whether sequential keyboard navigation can land on this tab.
    pub focusable: bool,
}

/// Whether a selection should pull keyboard focus onto the tab control.
/// Keyboard navigation does; a mouse click does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveFocus {
    Yes,
    No,
}

/// State for one tab group.
#[derive(Debug, Clone)]
pub struct TabsState {
    tabs: Vec<Tab>,
    selected: usize,
}

impl TabsState {
    /// Builds the tab group from its page section.
    ///
    /// Initial selection is the first tab whose panel is not hidden,
    /// defaulting to the first tab. Returns `None` with no tabs at all.
    pub fn new(spec: &TabsSpec) -> Option<Self> {
        if spec.tabs.is_empty() {
            return None;
        }
        let initial = spec.tabs.iter().position(|t| !t.hidden).unwrap_or(0);
        let tabs = spec
            .tabs
            .iter()
            .map(|t| Tab {
                label: t.label.clone(),
                panel: t.panel.clone(),
                selected: false,
                focusable: false,
            })
            .collect();
        let mut state = Self { tabs, selected: initial };
        state.apply_selection(initial);
        Some(state)
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Panel of the selected tab: the only visible one.
    pub fn visible_panel(&self) -> &[String] {
        &self.tabs[self.selected].panel
    }

    /// Number of selected tabs. Always 1; exposed for invariant checks.
    pub fn selected_count(&self) -> usize {
        self.tabs.iter().filter(|t| t.selected).count()
    }

    fn apply_selection(&mut self, index: usize) {
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            let on = i == index;
            tab.selected = on;
            tab.focusable = on;
        }
        self.selected = index;
    }

    /// Selects a tab by index, keeping panel visibility in lockstep.
    ///
    /// Returns `MoveFocus::Yes` when the caller should also move keyboard
    /// focus onto the tab control, which it passes in as policy.
    pub fn select(&mut self, index: usize, move_focus: MoveFocus) -> MoveFocus {
        if index < self.tabs.len() {
            self.apply_selection(index);
        }
        move_focus
    }

    pub fn select_next(&mut self) {
        let next = (self.selected + 1) % self.tabs.len();
        self.select(next, MoveFocus::Yes);
    }

    pub fn select_prev(&mut self) {
        let prev = (self.selected + self.tabs.len() - 1) % self.tabs.len();
        self.select(prev, MoveFocus::Yes);
    }

    pub fn select_first(&mut self) {
        self.select(0, MoveFocus::Yes);
    }

    pub fn select_last(&mut self) {
        self.select(self.tabs.len() - 1, MoveFocus::Yes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::TabSpec;

    fn spec(n: usize) -> TabsSpec {
        TabsSpec {
            tabs: (0..n)
                .map(|i| TabSpec {
                    label: format!("Tab {i}"),
                    panel: vec![format!("Panel {i}")],
                    hidden: i != 0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_no_tabs_skip_init() {
        assert!(TabsState::new(&spec(0)).is_none());
    }

    #[test]
    fn test_initial_selection_is_visible_panel() {
        let mut s = spec(3);
        s.tabs[0].hidden = true;
        s.tabs[1].hidden = false;
        let tabs = TabsState::new(&s).unwrap();
        assert_eq!(tabs.selected(), 1);
        assert_eq!(tabs.selected_count(), 1);
    }

    #[test]
    fn test_initial_selection_defaults_to_first() {
        let mut s = spec(3);
        for t in &mut s.tabs {
            t.hidden = true;
        }
        let tabs = TabsState::new(&s).unwrap();
        assert_eq!(tabs.selected(), 0);
    }

    #[test]
    fn test_arrow_cycle_wraps_both_ways() {
        let mut tabs = TabsState::new(&spec(3)).unwrap();
        for expected in [1, 2, 0, 1] {
            tabs.select_next();
            assert_eq!(tabs.selected(), expected);
            assert_eq!(tabs.selected_count(), 1);
        }
        for expected in [0, 2, 1, 0] {
            tabs.select_prev();
            assert_eq!(tabs.selected(), expected);
            assert_eq!(tabs.selected_count(), 1);
        }
    }

    #[test]
    fn test_home_end_jump() {
        let mut tabs = TabsState::new(&spec(4)).unwrap();
        tabs.select_last();
        assert_eq!(tabs.selected(), 3);
        tabs.select_first();
        assert_eq!(tabs.selected(), 0);
    }

    #[test]
    fn test_focusability_follows_selection() {
        let mut tabs = TabsState::new(&spec(3)).unwrap();
        tabs.select_next();
        let focusable: Vec<bool> = tabs.tabs().iter().map(|t| t.focusable).collect();
        assert_eq!(focusable, vec![false, true, false]);
    }

    #[test]
    fn test_click_select_does_not_request_focus() {
        let mut tabs = TabsState::new(&spec(3)).unwrap();
        assert_eq!(tabs.select(2, MoveFocus::No), MoveFocus::No);
        assert_eq!(tabs.selected(), 2);
    }

    #[test]
    fn test_out_of_range_select_is_ignored() {
        let mut tabs = TabsState::new(&spec(2)).unwrap();
        tabs.select(9, MoveFocus::No);
        assert_eq!(tabs.selected(), 0);
        assert_eq!(tabs.selected_count(), 1);
    }

    #[test]
    fn test_exactly_one_panel_visible() {
        let mut tabs = TabsState::new(&spec(3)).unwrap();
        tabs.select_next();
        assert_eq!(tabs.visible_panel(), &["Panel 1".to_string()]);
        assert_eq!(tabs.selected_count(), 1);
    }
}
