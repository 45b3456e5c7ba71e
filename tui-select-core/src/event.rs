//! Event types delivered to components

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;

/// The event payload handed to [`Component::handle_event`](crate::Component::handle_event)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse click, drag or motion
    Mouse(MouseEvent),
    /// Scroll wheel event with position and delta
    Scroll { column: u16, row: u16, delta: isize },
    /// Terminal resize
    Resize(u16, u16),
    /// The terminal window gained focus
    FocusGained,
    /// The terminal window lost focus
    FocusLost,
}

/// Check whether a screen cell lies inside `area`
pub fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let area = Rect::new(2, 3, 4, 2);
        assert!(rect_contains(area, 2, 3));
        assert!(rect_contains(area, 5, 4));
        assert!(!rect_contains(area, 6, 4));
        assert!(!rect_contains(area, 5, 5));
        assert!(!rect_contains(area, 1, 3));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        assert!(!rect_contains(Rect::default(), 0, 0));
    }
}
