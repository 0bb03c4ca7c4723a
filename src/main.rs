use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::{DefaultTerminal, Frame};

pub mod assets;
pub mod key_handler;
pub mod page;
pub mod pages;
pub mod screen;
pub mod state;
pub mod ui_utils;
pub mod widgets;

use assets::AssetLoader;
use key_handler::{KeyAction, KeyHandler};
use page::Page;
use screen::{HitTarget, Screen};
use state::{MoveFocus, SubmitOutcome};
use widgets::Widgets;

/// How long the event poll waits before yielding an animation tick.
const TICK_RATE: Duration = Duration::from_millis(33);

/// Which widget keyboard input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    NavToggle,
    Slideshow,
    Marquee,
    Tabs,
    Form,
    Content,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    let _ = execute!(stdout(), EnableMouseCapture);
    let result = App::new(Page::demo()).run(terminal);
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

pub struct App {
    running: bool,
    screen: Screen,
    key_handler: KeyHandler,
    page: Page,
    widgets: Widgets,
    loader: AssetLoader,
    focus: Focus,
    viewport_width: u16,
    status_message: String,
}

impl App {
    pub fn new(page: Page) -> Self {
        let (width, _) = crossterm::terminal::size().unwrap_or((80, 24));
        let mut app = Self {
            running: false,
            screen: Screen::new(),
            key_handler: KeyHandler::new(),
            page,
            widgets: Widgets::new(),
            loader: AssetLoader::new(),
            focus: Focus::Content,
            viewport_width: width,
            status_message: String::from("Ready | Tab cycles widgets, q quits"),
        };
        app.widgets.init(&app.page, &mut app.loader);
        app
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let mut last_frame = Instant::now();
        while self.running {
            let now = Instant::now();
            let dt = now.duration_since(last_frame);
            last_frame = now;
            self.advance(dt);

            terminal.draw(|frame| self.render(frame))?;
            if let Some(scroll) = &mut self.widgets.scroll {
                scroll.set_viewport_rows(self.screen.content_rows());
            }

            let action = self.key_handler.poll_crossterm_events(TICK_RATE)?;
            if self.handle_action(action) {
                self.quit();
            }
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        self.screen.render(
            frame,
            &self.widgets,
            &self.page.title,
            &self.page.body,
            self.focus,
            self.is_wide(),
            &self.status_message,
        );
    }

    /// Steps every time-driven behavior by the elapsed wall time.
    fn advance(&mut self, dt: Duration) {
        while let Some((id, result)) = self.loader.try_recv() {
            if let Some(marquee) = &mut self.widgets.marquee {
                marquee.resolve_badge(id, result);
            }
        }
        if let Some(show) = &mut self.widgets.slideshow {
            show.tick(dt);
        }
        if let Some(marquee) = &mut self.widgets.marquee {
            marquee.advance(dt);
        }
        if let Some(form) = &mut self.widgets.form {
            form.tick(dt);
        }
        if let Some(scroll) = &mut self.widgets.scroll {
            scroll.tick(dt);
        }
    }

    fn is_wide(&self) -> bool {
        self.widgets
            .nav
            .as_ref()
            .is_some_and(|nav| self.viewport_width >= nav.wide_breakpoint())
    }

    /// Focus targets present on this page, in visual order.
    fn focus_ring(&self) -> Vec<Focus> {
        let mut ring = Vec::new();
        if self.widgets.nav.is_some() && !self.is_wide() {
            ring.push(Focus::NavToggle);
        }
        if self.widgets.slideshow.is_some() {
            ring.push(Focus::Slideshow);
        }
        if self.widgets.marquee.is_some() {
            ring.push(Focus::Marquee);
        }
        if self.widgets.tabs.is_some() {
            ring.push(Focus::Tabs);
        }
        if self.widgets.form.is_some() {
            ring.push(Focus::Form);
        }
        ring.push(Focus::Content);
        ring
    }

    fn set_focus(&mut self, focus: Focus) {
        if focus == self.focus {
            return;
        }
        // Leave hooks: the hover-out analog.
        match self.focus {
            Focus::Slideshow => {
                if let Some(show) = &mut self.widgets.slideshow {
                    show.focus_left();
                }
            }
            Focus::Marquee => {
                if let Some(marquee) = &mut self.widgets.marquee {
                    marquee.resume();
                }
            }
            _ => {}
        }
        match focus {
            Focus::Slideshow => {
                if let Some(show) = &mut self.widgets.slideshow {
                    show.focus_entered();
                }
            }
            Focus::Marquee => {
                if let Some(marquee) = &mut self.widgets.marquee {
                    marquee.pause();
                }
            }
            _ => {}
        }
        self.focus = focus;
    }

    fn cycle_focus(&mut self, forward: bool) {
        let ring = self.focus_ring();
        let current = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % ring.len()
        } else {
            (current + ring.len() - 1) % ring.len()
        };
        self.set_focus(ring[next]);
    }

    fn handle_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::Tick | KeyAction::None => {}
            KeyAction::Resize(width, _) => self.on_resize(width),
            KeyAction::Click(column, row) => self.on_click(column, row),
            KeyAction::FocusNext => self.cycle_focus(true),
            KeyAction::FocusPrev => self.cycle_focus(false),
            KeyAction::Back => self.on_escape(),
            KeyAction::Select => self.on_select(),
            KeyAction::NavigateLeft => match self.focus {
                Focus::Slideshow => {
                    if let Some(show) = &mut self.widgets.slideshow {
                        show.manual_prev();
                    }
                }
                Focus::Tabs => {
                    if let Some(tabs) = &mut self.widgets.tabs {
                        tabs.select_prev();
                    }
                }
                _ => {}
            },
            KeyAction::NavigateRight => match self.focus {
                Focus::Slideshow => {
                    if let Some(show) = &mut self.widgets.slideshow {
                        show.manual_next();
                    }
                }
                Focus::Tabs => {
                    if let Some(tabs) = &mut self.widgets.tabs {
                        tabs.select_next();
                    }
                }
                _ => {}
            },
            KeyAction::Home => {
                if self.focus == Focus::Tabs {
                    if let Some(tabs) = &mut self.widgets.tabs {
                        tabs.select_first();
                    }
                }
            }
            KeyAction::End => {
                if self.focus == Focus::Tabs {
                    if let Some(tabs) = &mut self.widgets.tabs {
                        tabs.select_last();
                    }
                }
            }
            KeyAction::NavigateUp => self.on_vertical(-1),
            KeyAction::NavigateDown => self.on_vertical(1),
            KeyAction::PageUp => self.scroll_page(-1),
            KeyAction::PageDown => self.scroll_page(1),
            KeyAction::InputChar(c) => return self.on_char(c),
            KeyAction::Backspace => {
                if self.focus == Focus::Form {
                    if let Some(form) = &mut self.widgets.form {
                        form.backspace();
                    }
                }
            }
        }
        false
    }

    fn on_resize(&mut self, width: u16) {
        self.viewport_width = width;
        if let Some(nav) = &mut self.widgets.nav {
            if nav.viewport_resized(width) {
                self.status_message = "Menu closed (wide viewport)".into();
            }
        }
        if let Some(marquee) = &mut self.widgets.marquee {
            marquee.remeasure();
        }
        if self.is_wide() && self.focus == Focus::NavToggle {
            self.cycle_focus(true);
        }
    }

    fn on_escape(&mut self) {
        let closed = self
            .widgets
            .nav
            .as_mut()
            .is_some_and(|nav| nav.escape());
        if closed {
            // Escape hands focus back to the toggle control.
            self.set_focus(Focus::NavToggle);
            self.status_message = "Menu closed".into();
        }
    }

    fn on_select(&mut self) {
        match self.focus {
            Focus::NavToggle => {
                if let Some(nav) = &mut self.widgets.nav {
                    if nav.is_open() {
                        let link = nav.selected_link;
                        if let Some(label) = nav.activate_link(link) {
                            self.status_message = format!("→ {label}");
                        }
                    } else {
                        nav.open();
                        self.status_message = "Menu open | ↑↓ select, ↵ follow".into();
                    }
                }
            }
            Focus::Form => {
                if let Some(form) = &mut self.widgets.form {
                    self.status_message = match form.submit() {
                        SubmitOutcome::Accepted => "✓ Message sent".into(),
                        SubmitOutcome::Rejected { first_invalid } => {
                            format!("✗ Check field {}", first_invalid + 1)
                        }
                    };
                }
            }
            _ => {}
        }
    }

    fn on_vertical(&mut self, delta: i32) {
        match self.focus {
            Focus::NavToggle => {
                if let Some(nav) = &mut self.widgets.nav {
                    if nav.is_open() {
                        if delta < 0 {
                            nav.select_prev_link();
                        } else {
                            nav.select_next_link();
                        }
                    }
                }
            }
            Focus::Form => {
                if let Some(form) = &mut self.widgets.form {
                    if delta < 0 {
                        form.focus_prev_field();
                    } else {
                        form.focus_next_field();
                    }
                }
            }
            Focus::Content => {
                if let Some(scroll) = &mut self.widgets.scroll {
                    if delta < 0 {
                        scroll.scroll_up(1);
                    } else {
                        scroll.scroll_down(1);
                    }
                }
            }
            _ => {}
        }
    }

    fn scroll_page(&mut self, direction: i32) {
        if self.focus != Focus::Content {
            return;
        }
        let rows = self.screen.content_rows().max(1);
        if let Some(scroll) = &mut self.widgets.scroll {
            if direction < 0 {
                scroll.scroll_up(rows);
            } else {
                scroll.scroll_down(rows);
            }
        }
    }

    fn on_char(&mut self, c: char) -> bool {
        if self.focus == Focus::Form {
            if let Some(form) = &mut self.widgets.form {
                form.input_char(c);
            }
            return false;
        }
        match c {
            'q' => return true,
            't' => {
                if let Some(scroll) = &mut self.widgets.scroll {
                    if scroll.top_control_visible() {
                        scroll.back_to_top();
                        self.status_message = "Scrolling to top".into();
                    }
                }
            }
            ' ' => {
                if self.focus == Focus::NavToggle {
                    if let Some(nav) = &mut self.widgets.nav {
                        nav.toggle();
                    }
                }
            }
            _ => {}
        }
        false
    }

    fn on_click(&mut self, column: u16, row: u16) {
        let target = self.screen.hits.hit_test(column, row);

        // A click anywhere outside the toggle and the open panel closes the
        // menu before the click does its own work.
        if !matches!(
            target,
            HitTarget::NavToggle | HitTarget::NavPanel | HitTarget::NavLink(_)
        ) {
            if let Some(nav) = &mut self.widgets.nav {
                if nav.click_outside() {
                    self.status_message = "Menu closed".into();
                }
            }
        }

        match target {
            HitTarget::NavToggle => {
                if let Some(nav) = &mut self.widgets.nav {
                    nav.toggle();
                    self.set_focus(Focus::NavToggle);
                }
            }
            HitTarget::NavLink(index) => {
                if let Some(nav) = &mut self.widgets.nav {
                    if let Some(label) = nav.activate_link(index) {
                        self.status_message = format!("→ {label}");
                    }
                }
            }
            HitTarget::SlidePrev => {
                if let Some(show) = &mut self.widgets.slideshow {
                    show.manual_prev();
                }
            }
            HitTarget::SlideNext => {
                if let Some(show) = &mut self.widgets.slideshow {
                    show.manual_next();
                }
            }
            HitTarget::Tab(index) => {
                // Click selects without pulling the keyboard focus ring.
                if let Some(tabs) = &mut self.widgets.tabs {
                    tabs.select(index, MoveFocus::No);
                }
            }
            HitTarget::FormField(index) => {
                if let Some(form) = &mut self.widgets.form {
                    form.focus_field(index);
                }
                self.set_focus(Focus::Form);
            }
            HitTarget::BackToTop => {
                if let Some(scroll) = &mut self.widgets.scroll {
                    scroll.back_to_top();
                    self.status_message = "Scrolling to top".into();
                }
            }
            HitTarget::NavPanel
            | HitTarget::Slideshow
            | HitTarget::Marquee
            | HitTarget::Form
            | HitTarget::Content
            | HitTarget::Outside => {}
        }
    }

    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Page::demo())
    }

    #[test]
    fn test_focus_ring_skips_missing_widgets() {
        let mut bare = App::new(Page {
            title: "Bare".into(),
            body: vec!["x".into()],
            ..Default::default()
        });
        assert_eq!(bare.focus_ring(), vec![Focus::Content]);
        bare.cycle_focus(true);
        assert_eq!(bare.focus, Focus::Content);
    }

    #[test]
    fn test_focus_cycle_covers_demo_widgets() {
        let mut app = app();
        app.viewport_width = 60; // narrow: toggle participates
        let ring = app.focus_ring();
        assert_eq!(ring[0], Focus::NavToggle);
        assert_eq!(*ring.last().unwrap(), Focus::Content);
        for _ in 0..ring.len() {
            app.cycle_focus(true);
        }
        assert_eq!(app.focus, Focus::Content);
    }

    #[test]
    fn test_escape_closes_nav_and_refocuses_toggle() {
        let mut app = app();
        app.viewport_width = 60;
        app.widgets.nav.as_mut().unwrap().open();
        app.handle_action(KeyAction::Back);
        assert!(!app.widgets.nav.as_ref().unwrap().is_open());
        assert_eq!(app.focus, Focus::NavToggle);
    }

    #[test]
    fn test_resize_into_wide_closes_nav() {
        let mut app = app();
        app.viewport_width = 60;
        app.widgets.nav.as_mut().unwrap().open();
        app.handle_action(KeyAction::Resize(120, 40));
        assert!(!app.widgets.nav.as_ref().unwrap().is_open());
    }

    #[test]
    fn test_click_outside_closes_nav() {
        let mut app = app();
        app.widgets.nav.as_mut().unwrap().open();
        // Nothing was rendered, so every click misses every rect.
        app.handle_action(KeyAction::Click(50, 20));
        assert!(!app.widgets.nav.as_ref().unwrap().is_open());
    }

    #[test]
    fn test_form_captures_q() {
        let mut app = app();
        app.set_focus(Focus::Form);
        assert!(!app.handle_action(KeyAction::InputChar('q')));
        assert_eq!(app.widgets.form.as_ref().unwrap().fields()[0].value, "q");
        app.set_focus(Focus::Content);
        assert!(app.handle_action(KeyAction::InputChar('q')));
    }

    #[test]
    fn test_marquee_pauses_while_focused() {
        let mut app = app();
        app.set_focus(Focus::Marquee);
        assert!(app.widgets.marquee.as_ref().unwrap().is_paused());
        app.set_focus(Focus::Content);
        assert!(!app.widgets.marquee.as_ref().unwrap().is_paused());
    }
}
