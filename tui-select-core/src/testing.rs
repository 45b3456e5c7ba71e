//! Test utilities for components
//!
//! - [`key`]: Create `KeyEvent` from string (e.g., `key("ctrl+p")`)
//! - [`click`] / [`hover`]: pointer events at a screen cell
//! - [`RenderHarness`]: render into an in-memory terminal and read it back
//! - Assertion macros for verifying emitted actions
//!
//! # Example
//!
//! ```ignore
//! use tui_select::testing::{click, key, RenderHarness};
//!
//! let mut harness = RenderHarness::new(30, 10);
//! harness.render(|frame| select.render(frame, Rect::new(0, 0, 30, 3), props()));
//!
//! let actions: Vec<_> = select.handle_event(&click(3, 1), props()).into_iter().collect();
//! assert!(select.is_open());
//! ```

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

use crate::event::EventKind;
use crate::keybindings::parse_key_string;

/// Create a `KeyEvent` from a key string.
///
/// Panics if the key string cannot be parsed, which is what a test wants.
///
/// # Examples
///
/// ```
/// use tui_select_core::testing::key;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let k = key("down");
/// assert_eq!(k.code, KeyCode::Down);
///
/// let k = key("ctrl+p");
/// assert_eq!(k.code, KeyCode::Char('p'));
/// assert!(k.modifiers.contains(KeyModifiers::CONTROL));
/// ```
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Wrap a key string as an [`EventKind::Key`].
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

/// Parse a whitespace-separated key sequence such as `"down down enter"`.
pub fn key_events(seq: &str) -> Vec<EventKind> {
    seq.split_whitespace().map(key_event).collect()
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Left-button press at a screen cell.
pub fn click(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// Pointer motion (no button held) to a screen cell.
pub fn hover(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Moved, column, row)
}

/// Renders components into an in-memory terminal.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with a `width` x `height` screen.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        Self { terminal }
    }

    /// Draw one frame and return the resulting buffer.
    pub fn render<F>(&mut self, draw: F) -> &Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(draw)
            .expect("drawing to the test backend never fails");
        self.terminal.backend().buffer()
    }

    /// Draw one frame and return its text, one line per row, styles dropped.
    pub fn render_to_string_plain<F>(&mut self, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        buffer_to_string_plain(self.render(draw))
    }
}

/// Text content of a buffer, rows joined with `\n` and trailing spaces trimmed.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let line: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert that a specific action was emitted.
///
/// # Example
///
/// ```ignore
/// assert_emitted!(actions, Action::FruitChange(Some(_)));
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT emitted.
///
/// # Example
///
/// ```ignore
/// assert_not_emitted!(actions, Action::FruitChange(_));
/// ```
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count how many actions match a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_key_special() {
        assert_eq!(key("esc").code, KeyCode::Esc);
        assert_eq!(key("enter").code, KeyCode::Enter);
        assert_eq!(key("space").code, KeyCode::Char(' '));
        assert_eq!(key("shift+tab").code, KeyCode::BackTab);
    }

    #[test]
    #[should_panic(expected = "Invalid key string")]
    fn test_key_panics_on_garbage() {
        key("not a key");
    }

    #[test]
    fn test_key_events_sequence() {
        let events = key_events("down  down enter");
        assert_eq!(events.len(), 3);
        assert_eq!(events[2], EventKind::Key(key("enter")));
    }

    #[test]
    fn test_pointer_helpers() {
        match click(3, 4) {
            EventKind::Mouse(m) => {
                assert_eq!(m.kind, MouseEventKind::Down(MouseButton::Left));
                assert_eq!((m.column, m.row), (3, 4));
            }
            other => panic!("expected mouse event, got {:?}", other),
        }
        assert!(matches!(
            hover(0, 0),
            EventKind::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                ..
            })
        ));
    }

    #[test]
    fn test_render_to_string_plain() {
        let mut harness = RenderHarness::new(12, 2);
        let output = harness.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("hello\nworld"), frame.area());
        });
        assert_eq!(output, "hello\nworld");
    }

    #[derive(Debug, PartialEq)]
    enum Picked {
        One(u8),
        None,
    }

    #[test]
    fn test_assert_macros() {
        let actions = vec![Picked::One(1), Picked::One(2)];

        assert_emitted!(actions, Picked::One(2));
        assert_emitted!(actions, Picked::One(n) if *n > 1);
        assert_not_emitted!(actions, Picked::None);
        assert_eq!(count_emitted!(actions, Picked::One(_)), 2);
    }
}
