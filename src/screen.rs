//! Screen layout and click hit-testing.
//!
//! The screen arranges whichever widgets the page initialized and records
//! where everything landed so mouse clicks can be resolved against the last
//! rendered frame. The nav overlay is hit-tested first since it draws on
//! top of everything else.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::Line,
    Frame,
};

use crate::pages::content::ContentPage;
use crate::pages::form::FormPage;
use crate::pages::marquee::MarqueePage;
use crate::pages::nav::NavPage;
use crate::pages::slideshow::SlideshowPage;
use crate::pages::tabs::TabsPage;
use crate::ui_utils::hit;
use crate::widgets::Widgets;
use crate::Focus;

/// Rects of interactive regions from the most recent render.
#[derive(Debug, Default)]
pub struct HitAreas {
    pub nav_toggle: Option<Rect>,
    pub nav_panel: Option<Rect>,
    pub nav_links: Vec<Rect>,
    pub slideshow: Option<Rect>,
    pub slide_prev: Option<Rect>,
    pub slide_next: Option<Rect>,
    pub marquee: Option<Rect>,
    pub tab_buttons: Vec<Rect>,
    pub form: Option<Rect>,
    pub form_fields: Vec<Rect>,
    pub back_to_top: Option<Rect>,
    pub content: Option<Rect>,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    NavToggle,
    NavLink(usize),
    NavPanel,
    SlidePrev,
    SlideNext,
    Slideshow,
    Marquee,
    Tab(usize),
    FormField(usize),
    Form,
    BackToTop,
    Content,
    Outside,
}

impl HitAreas {
    pub fn hit_test(&self, column: u16, row: u16) -> HitTarget {
        // Overlay first: links, then the panel chrome around them.
        for (i, rect) in self.nav_links.iter().enumerate() {
            if hit(*rect, column, row) {
                return HitTarget::NavLink(i);
            }
        }
        if self.nav_panel.is_some_and(|r| hit(r, column, row)) {
            return HitTarget::NavPanel;
        }
        if self.nav_toggle.is_some_and(|r| hit(r, column, row)) {
            return HitTarget::NavToggle;
        }
        if self.back_to_top.is_some_and(|r| hit(r, column, row)) {
            return HitTarget::BackToTop;
        }
        for (i, rect) in self.tab_buttons.iter().enumerate() {
            if hit(*rect, column, row) {
                return HitTarget::Tab(i);
            }
        }
        if self.slide_prev.is_some_and(|r| hit(r, column, row)) {
            return HitTarget::SlidePrev;
        }
        if self.slide_next.is_some_and(|r| hit(r, column, row)) {
            return HitTarget::SlideNext;
        }
        if self.slideshow.is_some_and(|r| hit(r, column, row)) {
            return HitTarget::Slideshow;
        }
        if self.marquee.is_some_and(|r| hit(r, column, row)) {
            return HitTarget::Marquee;
        }
        for (i, rect) in self.form_fields.iter().enumerate() {
            if hit(*rect, column, row) {
                return HitTarget::FormField(i);
            }
        }
        if self.form.is_some_and(|r| hit(r, column, row)) {
            return HitTarget::Form;
        }
        if self.content.is_some_and(|r| hit(r, column, row)) {
            return HitTarget::Content;
        }
        HitTarget::Outside
    }
}

pub struct Screen {
    nav: NavPage,
    slideshow: SlideshowPage,
    marquee: MarqueePage,
    tabs: TabsPage,
    form: FormPage,
    content: ContentPage,
    pub hits: HitAreas,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            nav: NavPage::new(),
            slideshow: SlideshowPage::new(),
            marquee: MarqueePage::new(),
            tabs: TabsPage::new(),
            form: FormPage::new(),
            content: ContentPage::new(),
            hits: HitAreas::default(),
        }
    }

    /// Height of the content pane from the last render, for page scrolling.
    pub fn content_rows(&self) -> u16 {
        self.hits.content.map_or(0, |r| r.height.saturating_sub(2))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        frame: &mut Frame,
        widgets: &Widgets,
        title: &str,
        body: &[String],
        focus: Focus,
        wide: bool,
        status: &str,
    ) {
        let area = frame.area();
        self.hits = HitAreas::default();

        let mut constraints = vec![Constraint::Length(1)]; // header
        if widgets.slideshow.is_some() {
            constraints.push(Constraint::Length(5));
        }
        if widgets.marquee.is_some() {
            constraints.push(Constraint::Length(1));
        }
        if widgets.tabs.is_some() {
            constraints.push(Constraint::Length(6));
        }
        let form_height = widgets.form.as_ref().map(FormPage::required_height);
        if let Some(h) = form_height {
            constraints.push(Constraint::Length(h));
        }
        constraints.push(Constraint::Min(0)); // content
        constraints.push(Constraint::Length(1)); // status bar

        let layout = Layout::new(Direction::Vertical, constraints).split(area);
        let mut slot = 1;

        if let Some(show) = &widgets.slideshow {
            self.slideshow.render(
                frame,
                layout[slot],
                show,
                focus == Focus::Slideshow,
                &mut self.hits,
            );
            slot += 1;
        }
        if let Some(marquee) = &widgets.marquee {
            self.marquee.render(
                frame,
                layout[slot],
                marquee,
                focus == Focus::Marquee,
                &mut self.hits,
            );
            slot += 1;
        }
        if let Some(tabs) = &widgets.tabs {
            self.tabs.render(
                frame,
                layout[slot],
                tabs,
                focus == Focus::Tabs,
                &mut self.hits,
            );
            slot += 1;
        }
        if let Some(form) = &widgets.form {
            self.form.render(
                frame,
                layout[slot],
                form,
                focus == Focus::Form,
                &mut self.hits,
            );
            slot += 1;
        }
        if let Some(scroll) = &widgets.scroll {
            self.content.render(
                frame,
                layout[slot],
                body,
                scroll,
                focus == Focus::Content,
                &mut self.hits,
            );
        }

        let status_line = Line::from(format!(
            "{status}  |  Tab: Next widget  Shift+Tab: Previous  q: Quit"
        ))
        .on_dark_gray()
        .white();
        frame.render_widget(status_line, layout[layout.len() - 1]);

        // Header last: its open panel overlays the widgets below.
        if let Some(nav) = &widgets.nav {
            self.nav.render(
                frame,
                layout[0],
                nav,
                title,
                wide,
                focus == Focus::NavToggle,
                &mut self.hits,
            );
        } else {
            frame.render_widget(Line::from(format!(" {title}")).bold(), layout[0]);
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
