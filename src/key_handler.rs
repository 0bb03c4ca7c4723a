use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// Semantic input actions. Raw characters are passed through as
/// `InputChar` so the app can route them by focus (form fields consume
/// them, everything else treats them as shortcuts).
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Quit,
    Back,
    FocusNext,
    FocusPrev,
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    Home,
    End,
    PageUp,
    PageDown,
    Select,
    InputChar(char),
    Backspace,
    Click(u16, u16),
    Resize(u16, u16),
    /// Poll timeout elapsed with no input; drives the animation frame.
    Tick,
    None,
}

#[derive(Debug)]
pub struct KeyHandler;

impl KeyHandler {
    pub fn new() -> Self {
        Self
    }

    /// Polls for the next event, yielding `Tick` when the timeout elapses
    /// so animation keeps stepping while the page is idle.
    pub fn poll_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<KeyAction> {
        if !event::poll(timeout)? {
            return Ok(KeyAction::Tick);
        }
        match event::read()? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.on_key_event(key)),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Ok(KeyAction::Click(mouse.column, mouse.row))
            }
            Event::Resize(width, height) => Ok(KeyAction::Resize(width, height)),
            _ => Ok(KeyAction::None),
        }
    }

    pub fn on_key_event(&mut self, key: KeyEvent) -> KeyAction {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => KeyAction::Quit,
            (KeyModifiers::NONE, KeyCode::Esc) => KeyAction::Back,
            (KeyModifiers::NONE, KeyCode::Tab) => KeyAction::FocusNext,
            (_, KeyCode::BackTab) => KeyAction::FocusPrev,
            (KeyModifiers::NONE, KeyCode::Up) => KeyAction::NavigateUp,
            (KeyModifiers::NONE, KeyCode::Down) => KeyAction::NavigateDown,
            (KeyModifiers::NONE, KeyCode::Left) => KeyAction::NavigateLeft,
            (KeyModifiers::NONE, KeyCode::Right) => KeyAction::NavigateRight,
            (KeyModifiers::NONE, KeyCode::Home) => KeyAction::Home,
            (KeyModifiers::NONE, KeyCode::End) => KeyAction::End,
            (KeyModifiers::NONE, KeyCode::PageUp) => KeyAction::PageUp,
            (KeyModifiers::NONE, KeyCode::PageDown) => KeyAction::PageDown,
            (KeyModifiers::NONE, KeyCode::Enter) => KeyAction::Select,
            (KeyModifiers::NONE, KeyCode::Backspace) => KeyAction::Backspace,
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                KeyAction::InputChar(c)
            }
            _ => KeyAction::None,
        }
    }
}

impl Default for KeyHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut handler = KeyHandler::new();
        assert_eq!(
            handler.on_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_navigation_keys() {
        let mut handler = KeyHandler::new();
        assert_eq!(
            handler.on_key_event(press(KeyCode::Left, KeyModifiers::NONE)),
            KeyAction::NavigateLeft
        );
        assert_eq!(
            handler.on_key_event(press(KeyCode::Home, KeyModifiers::NONE)),
            KeyAction::Home
        );
        assert_eq!(
            handler.on_key_event(press(KeyCode::Tab, KeyModifiers::NONE)),
            KeyAction::FocusNext
        );
        assert_eq!(
            handler.on_key_event(press(KeyCode::BackTab, KeyModifiers::SHIFT)),
            KeyAction::FocusPrev
        );
    }

    #[test]
    fn test_chars_pass_through() {
        let mut handler = KeyHandler::new();
        assert_eq!(
            handler.on_key_event(press(KeyCode::Char('q'), KeyModifiers::NONE)),
            KeyAction::InputChar('q')
        );
        assert_eq!(
            handler.on_key_event(press(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            KeyAction::InputChar('Q')
        );
    }
}
