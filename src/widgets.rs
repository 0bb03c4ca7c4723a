//! Widget initialization.
//!
//! `Widgets::init` is the document-ready moment: each behavior inspects the
//! page for its section and either builds its state or stays out entirely.
//! Initialization is guarded so running it again is a no-op — no duplicated
//! marquee track, no reset selections, no re-requested badges.

use crate::assets::AssetLoader;
use crate::page::Page;
use crate::state::{FormState, MarqueeState, NavState, ScrollState, SlideshowState, TabsState};

#[derive(Default)]
pub struct Widgets {
    pub nav: Option<NavState>,
    pub slideshow: Option<SlideshowState>,
    pub marquee: Option<MarqueeState>,
    pub tabs: Option<TabsState>,
    pub form: Option<FormState>,
    pub scroll: Option<ScrollState>,
    initialized: bool,
}

impl Widgets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches every behavior whose page section is present. Safe to call
    /// more than once; only the first call does anything.
    pub fn init(&mut self, page: &Page, loader: &mut AssetLoader) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        self.nav = page.nav.as_ref().and_then(NavState::new);
        self.slideshow = page.slideshow.as_ref().and_then(SlideshowState::new);
        self.marquee = page.marquee.as_ref().and_then(MarqueeState::new);
        self.tabs = page.tabs.as_ref().and_then(TabsState::new);
        self.form = page.form.as_ref().and_then(FormState::new);
        self.scroll = Some(ScrollState::new(
            page.back_to_top.as_ref(),
            page.body.len(),
        ));

        if let Some(marquee) = &self.marquee {
            for (id, name) in marquee.pending_badges() {
                loader.spawn_badge(id, name);
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{MarqueeItemSpec, Page};

    #[test]
    fn test_init_attaches_present_sections() {
        let mut widgets = Widgets::new();
        let mut loader = AssetLoader::new();
        widgets.init(&Page::demo(), &mut loader);
        assert!(widgets.is_initialized());
        assert!(widgets.nav.is_some());
        assert!(widgets.slideshow.is_some());
        assert!(widgets.marquee.is_some());
        assert!(widgets.tabs.is_some());
        assert!(widgets.form.is_some());
        assert!(widgets.scroll.is_some());
    }

    #[test]
    fn test_missing_sections_skip_silently() {
        let mut widgets = Widgets::new();
        let mut loader = AssetLoader::new();
        let page = Page {
            title: "Bare".into(),
            body: vec!["hello".into()],
            ..Default::default()
        };
        widgets.init(&page, &mut loader);
        assert!(widgets.nav.is_none());
        assert!(widgets.slideshow.is_none());
        assert!(widgets.marquee.is_none());
        assert!(widgets.tabs.is_none());
        assert!(widgets.form.is_none());
        // Content still scrolls even without a back-to-top control.
        assert!(widgets.scroll.is_some());
    }

    #[test]
    fn test_badges_requested_from_loader() {
        let mut widgets = Widgets::new();
        let mut loader = AssetLoader::new();
        widgets.init(&Page::demo(), &mut loader);
        let badge_count = Page::demo()
            .marquee
            .unwrap()
            .items
            .iter()
            .filter(|i| matches!(i, MarqueeItemSpec::Badge { .. }))
            .count();
        assert_eq!(loader.pending_count(), badge_count);
    }

    #[test]
    fn test_double_init_is_noop() {
        let mut widgets = Widgets::new();
        let mut loader = AssetLoader::new();
        let page = Page::demo();
        widgets.init(&page, &mut loader);

        let pending_after_first = loader.pending_count();
        if let Some(tabs) = &mut widgets.tabs {
            tabs.select_next();
        }
        let selected = widgets.tabs.as_ref().unwrap().selected();

        widgets.init(&page, &mut loader);
        // No re-requested badges, no reset state.
        assert_eq!(loader.pending_count(), pending_after_first);
        assert_eq!(widgets.tabs.as_ref().unwrap().selected(), selected);
    }
}
